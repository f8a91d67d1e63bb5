//! Shared helper utilities for factory methods.
//!
//! Provides unique ID generation for factory defaults plus seeding and teardown of the
//! sample `TST-*` course sections used across data, service, and controller tests.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::factory::section::SectionFactory;

/// Course ID prefix shared by every sample section.
pub const TEST_COURSE_PREFIX: &str = "TST";

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Seeds the four sample sections.
///
/// | course_id | section | title             | term | registered | cap | credits |
/// |-----------|---------|-------------------|------|------------|-----|---------|
/// | TST-1003  | 1       | Test Course One   | A6   | 25         | 100 | 3       |
/// | TST-1003  | 2       | Test Course One   | B6   | 25         | 100 | 3       |
/// | TST-1024  | 1       | Test Course Two   | B6   | 15         | 45  | 4       |
/// | TST-4032  | 1       | Test Course Three | C6   | 10         | 75  | 2       |
///
/// All rows use instructor `T. Ester` and instruction type `F`. Rows are written with
/// replace-on-conflict semantics, so seeding twice leaves four rows.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(Vec<entity::section::Model>)` - The seeded rows in the order above
/// - `Err(DbErr)` - Database error during insert
pub async fn seed_sample_sections(
    db: &DatabaseConnection,
) -> Result<Vec<entity::section::Model>, DbErr> {
    let rows = [
        ("TST-1003", 1, "Test Course One", "A6", 25, 100, 3),
        ("TST-1003", 2, "Test Course One", "B6", 25, 100, 3),
        ("TST-1024", 1, "Test Course Two", "B6", 15, 45, 4),
        ("TST-4032", 1, "Test Course Three", "C6", 10, 75, 2),
    ];

    let mut seeded = Vec::with_capacity(rows.len());
    for (course_id, section, title, term, registered, cap, credits) in rows {
        let model = SectionFactory::new(db)
            .course_id(course_id)
            .section(section)
            .title(title)
            .term(term)
            .instructor("T. Ester")
            .inst_type("F")
            .registered(registered)
            .cap(cap)
            .credits(credits)
            .build()
            .await?;
        seeded.push(model);
    }

    Ok(seeded)
}

/// Deletes every section whose course ID starts with `prefix`.
///
/// # Arguments
/// - `db` - Database connection
/// - `prefix` - Course ID prefix, e.g. `TEST_COURSE_PREFIX`
///
/// # Returns
/// - `Ok(u64)` - Number of rows deleted
/// - `Err(DbErr)` - Database error during delete
pub async fn clear_sections_with_prefix(
    db: &DatabaseConnection,
    prefix: &str,
) -> Result<u64, DbErr> {
    let result = entity::prelude::Section::delete_many()
        .filter(entity::section::Column::CourseId.starts_with(prefix))
        .exec(db)
        .await?;

    Ok(result.rows_affected)
}
