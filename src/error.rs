use thiserror::Error;

/// Failures raised while materializing the route catalog into postgres.
///
/// `MissingLocation` is a configuration error: the catalog names a stop that
/// was never resolved into a location row. Seeding must abort rather than
/// continue with partial data. The remaining variants are storage failures,
/// propagated without retry.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("local não encontrado: {name}")]
    MissingLocation { name: String },

    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("database connection error: {0}")]
    Connection(#[from] diesel::result::ConnectionError),

    #[error("connection pool error: {0}")]
    Pool(#[from] bb8::RunError<diesel_async::pooled_connection::PoolError>),
}
