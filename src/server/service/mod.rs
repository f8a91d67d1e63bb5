//! Service layer for business logic.
//!
//! Services sit between the controller layer and the repository layer. `CourseService`
//! decides when a successful query counts as "not found", `HealthService` probes the
//! database connection.

pub mod course;
pub mod health;
