//! Factory methods for creating test data.
//!
//! Factories insert section rows with sensible defaults, reducing boilerplate in tests.
//! Every insert replaces an existing row with the same `(course_id, section)` key, so
//! seeding the same data twice never duplicates rows.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let section = factory::create_section(&db).await?;
//!
//!     // Seed the four sample TST-* sections, then remove them again
//!     factory::seed_sample_sections(&db).await?;
//!     factory::clear_sections_with_prefix(&db, factory::TEST_COURSE_PREFIX).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let section = factory::section::SectionFactory::new(&db)
//!     .course_id("TST-1003")
//!     .section(2)
//!     .term("B6")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `section` - Create section entities
//! - `helpers` - Sample data seeding and prefix teardown

pub mod helpers;
pub mod section;

pub use helpers::{clear_sections_with_prefix, seed_sample_sections, TEST_COURSE_PREFIX};
pub use section::{create_section, create_section_for_course};
