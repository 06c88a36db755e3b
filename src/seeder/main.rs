use diesel::prelude::*;
use diesel_async::AsyncPgConnection;
use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use log::{error, info};

mod seed;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    if let Err(err) = run().await {
        error!("seeding aborted: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error + Sync + Send>> {
    let database_url = shuttle::postgres_tools::database_url_for_env();
    apply_migrations(database_url).await?;

    let pool = shuttle::postgres_tools::make_async_pool().await?;
    seed::seed(&pool).await?;

    Ok(())
}

/// The diesel migration harness is synchronous; run it on a blocking thread
/// over the async connection wrapper.
async fn apply_migrations(
    database_url: String,
) -> Result<(), Box<dyn std::error::Error + Sync + Send>> {
    tokio::task::spawn_blocking(
        move || -> Result<(), Box<dyn std::error::Error + Sync + Send>> {
            let mut conn: AsyncConnectionWrapper<AsyncPgConnection> =
                AsyncConnectionWrapper::establish(&database_url)?;
            let applied = conn.run_pending_migrations(MIGRATIONS)?;
            info!("applied {} pending migrations", applied.len());
            Ok(())
        },
    )
    .await??;

    Ok(())
}
