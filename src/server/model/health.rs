/// Message reported when the database answers a connectivity probe.
pub const HEALTHY_MSG: &str = "Connection to database is successful";

/// Result of a successful database connectivity check.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthStatus {
    pub msg: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            msg: HEALTHY_MSG.to_string(),
        }
    }
}
