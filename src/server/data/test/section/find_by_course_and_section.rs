use super::*;

/// Tests finding a single section by course and section number.
///
/// Expected: Ok with exactly the matching row
#[tokio::test]
async fn finds_matching_section() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Section)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_sample_sections(db).await?;

    let sections = SectionRepository::new(db)
        .find_by_course_and_section("TST-1003", 2)
        .await?;

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].course_id, "TST-1003");
    assert_eq!(sections[0].section, 2);
    assert_eq!(sections[0].term, "B6");

    Ok(())
}

/// Tests a section number that does not exist for a stored course.
///
/// Expected: Ok(empty vector)
#[tokio::test]
async fn returns_empty_for_unknown_section() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Section)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_sample_sections(db).await?;

    let sections = SectionRepository::new(db)
        .find_by_course_and_section("TST-1024", 2)
        .await?;

    assert!(sections.is_empty());

    Ok(())
}
