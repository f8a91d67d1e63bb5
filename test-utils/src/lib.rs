//! Courses Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the courses
//! service. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **factory** / **fixture**: Section rows with and without database insertion
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//! use entity::prelude::Section;
//!
//! #[tokio::test]
//! async fn test_section_lookup() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Section)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     factory::seed_sample_sections(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
