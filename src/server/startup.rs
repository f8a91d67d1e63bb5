use crate::server::{config::Config, error::AppError};

/// Installs the global tracing subscriber.
///
/// Uses the `RUST_LOG` filter when set, otherwise logs at `info` and above.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, applying
/// the optional pool size and acquire timeout, then runs all pending SeaORM migrations so
/// the `sections` table exists.
///
/// # Arguments
/// - `config` - Application configuration containing the database settings
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    if let Some(max_connections) = config.database_max_connections {
        opt.max_connections(max_connections);
    }
    if let Some(timeout) = config.database_acquire_timeout {
        opt.acquire_timeout(timeout);
    }

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
