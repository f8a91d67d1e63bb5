use super::*;

/// Tests that the result length equals the number of stored rows.
///
/// Expected: Ok with four sections after seeding the sample data
#[tokio::test]
async fn returns_every_stored_section() -> Result<(), AppError> {
    let test = TestBuilder::new().with_section_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_sample_sections(db).await?;

    let sections = CourseService::new(db).get_all_courses().await?;

    assert_eq!(sections.len(), 4);

    Ok(())
}

/// Tests that an empty store is not treated as not found.
///
/// Expected: Ok(empty vector)
#[tokio::test]
async fn returns_empty_for_empty_store() -> Result<(), AppError> {
    let test = TestBuilder::new().with_section_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let sections = CourseService::new(db).get_all_courses().await?;

    assert!(sections.is_empty());

    Ok(())
}

/// Tests that a failing store surfaces as an error.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn fails_when_store_query_fails() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CourseService::new(db).get_all_courses().await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
}
