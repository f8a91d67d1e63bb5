//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests (DTO conversion, domain model
//! mapping) and supply the default values used by the factories. Unlike factories,
//! fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let section = fixture::section::entity();
//!
//! let evening = fixture::section::entity_builder()
//!     .section(2)
//!     .term("B6")
//!     .build();
//! ```

pub mod section;

pub use section::{entity as section_entity, entity_builder as section_entity_builder};
