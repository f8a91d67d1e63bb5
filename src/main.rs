mod model;
mod server;

use axum::{extract::Request, ServiceExt};

use crate::server::{
    config::Config, error::AppError, router, service::health::HealthService, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    // Refuse to serve if the database cannot answer
    let health = HealthService::new(&db).check_health().await?;
    tracing::info!("{}", health.msg);

    let app = router::app(AppState::new(db));

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("Starting server on {}:{}", config.host, config.port);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
