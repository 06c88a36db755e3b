use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::ManagerConfig;
use diesel_async::pooled_connection::RecyclingMethod;
use diesel_async::pooled_connection::bb8::Pool;
use std::env;

/// Pool of async postgres connections, shared across actix workers via Arc.
pub type ShuttlePostgresPool =
    bb8::Pool<AsyncDieselConnectionManager<diesel_async::AsyncPgConnection>>;

/// Builds the connection pool from `DATABASE_URL`. The pool is sized for a
/// low-volume reference-data service; failure here is fatal at startup.
pub async fn make_async_pool()
-> Result<ShuttlePostgresPool, Box<dyn std::error::Error + Sync + Send>> {
    let mut manager_config = ManagerConfig::default();
    manager_config.recycling_method = RecyclingMethod::Fast;

    let manager = AsyncDieselConnectionManager::<diesel_async::AsyncPgConnection>::new_with_config(
        database_url_for_env(),
        manager_config,
    );

    let pool = Pool::builder().max_size(8).build(manager).await?;

    Ok(pool)
}

pub fn database_url_for_env() -> String {
    env::var("DATABASE_URL").expect("DATABASE_URL must be set")
}
