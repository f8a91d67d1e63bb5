use super::*;

/// Tests finding every section offered in a term.
///
/// Expected: Ok with the two B6 sections from different courses
#[tokio::test]
async fn finds_sections_in_term() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Section)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_sample_sections(db).await?;

    let sections = SectionRepository::new(db).find_by_term("B6").await?;

    let keys: Vec<(&str, i32)> = sections
        .iter()
        .map(|s| (s.course_id.as_str(), s.section))
        .collect();
    assert_eq!(keys, vec![("TST-1003", 2), ("TST-1024", 1)]);

    Ok(())
}

/// Tests a term with no offerings.
///
/// Expected: Ok(empty vector)
#[tokio::test]
async fn returns_empty_for_unknown_term() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Section)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_sample_sections(db).await?;

    let sections = SectionRepository::new(db).find_by_term("Z9").await?;

    assert!(sections.is_empty());

    Ok(())
}
