//! Server-side API backend.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, status code selection, error context
//! - **Service Layer** (`service/`) - Found/not-found decisions and health probing
//! - **Data Layer** (`data/`) - Parameterized queries and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models and lookup parameter types
//! - **Error Layer** (`error/`) - Application error type and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Tracing setup, database connection and migrations
//! - **Router** (`router`) - Axum route table and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** matches the path and calls the controller
//! 2. **Controller** builds lookup parameters and calls the service
//! 3. **Service** queries the repository and classifies the rows as found or not found
//! 4. **Controller** answers 200 or 404 and logs the outcome, or tags the error and
//!    returns it for `AppError` to render

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
