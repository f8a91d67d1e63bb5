//! Database connectivity probe.

use sea_orm::DatabaseConnection;

use crate::server::{error::AppError, model::health::HealthStatus};

/// Service verifying that the database is reachable.
pub struct HealthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HealthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Pings the database through the connection pool.
    ///
    /// # Returns
    /// - `Ok(HealthStatus)` - Database answered, carries the fixed success message
    /// - `Err(AppError::HealthCheck)` - Could not reach the database
    pub async fn check_health(&self) -> Result<HealthStatus, AppError> {
        self.db.ping().await.map_err(AppError::HealthCheck)?;
        Ok(HealthStatus::healthy())
    }
}
