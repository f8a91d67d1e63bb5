use super::*;

/// Tests fetching every section from a seeded store.
///
/// Expected: Ok with one entry per stored row, ordered by course then section
#[tokio::test]
async fn returns_all_sections_in_key_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Section)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::section::create_section_for_course(db, "TST-4032", 1).await?;
    factory::section::create_section_for_course(db, "TST-1003", 2).await?;
    factory::section::create_section_for_course(db, "TST-1003", 1).await?;

    let sections = SectionRepository::new(db).get_all().await?;

    let keys: Vec<(&str, i32)> = sections
        .iter()
        .map(|s| (s.course_id.as_str(), s.section))
        .collect();
    assert_eq!(
        keys,
        vec![("TST-1003", 1), ("TST-1003", 2), ("TST-4032", 1)]
    );

    Ok(())
}

/// Tests fetching from an empty store.
///
/// Expected: Ok(empty vector)
#[tokio::test]
async fn returns_empty_for_empty_store() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Section)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sections = SectionRepository::new(db).get_all().await?;

    assert!(sections.is_empty());

    Ok(())
}

/// Tests that store failures propagate rather than being swallowed.
///
/// Expected: Err(DbErr) when the sections table does not exist
#[tokio::test]
async fn propagates_error_without_table() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SectionRepository::new(db).get_all().await;

    assert!(result.is_err());
}
