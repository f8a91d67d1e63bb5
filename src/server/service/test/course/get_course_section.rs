use super::*;

fn param(course_id: &str, section_id: &str) -> GetCourseSectionParam {
    GetCourseSectionParam {
        course_id: course_id.to_string(),
        section_id: section_id.to_string(),
    }
}

/// Tests fetching a stored section.
///
/// Expected: Ok(Found) with exactly one row whose course ID and section match the input
#[tokio::test]
async fn finds_stored_section() -> Result<(), AppError> {
    let test = TestBuilder::new().with_section_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_sample_sections(db).await?;

    let lookup = CourseService::new(db)
        .get_course_section(param("TST-1003", "2"))
        .await?;

    let sections = match lookup {
        CourseLookup::Found(sections) => sections,
        not_found => panic!("expected Found, got {:?}", not_found),
    };
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].course_id, "TST-1003");
    assert_eq!(sections[0].section, 2);

    Ok(())
}

/// Tests a section number the course does not have.
///
/// Expected: Ok(NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_section() -> Result<(), AppError> {
    let test = TestBuilder::new().with_section_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_sample_sections(db).await?;

    let lookup = CourseService::new(db)
        .get_course_section(param("TST-1003", "7"))
        .await?;

    assert_eq!(
        lookup,
        CourseLookup::NotFound("Could not find section 7 of course TST-1003".to_string())
    );

    Ok(())
}

/// Tests that a malformed section ID is reported as not found rather than rejected.
///
/// Expected: Ok(NotFound), even when the store would fail
#[tokio::test]
async fn returns_not_found_for_malformed_section() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CourseService::new(db);
    for section_id in ["abc", "2.0", ""] {
        let lookup = service
            .get_course_section(param("TST-1003", section_id))
            .await?;

        assert!(
            matches!(lookup, CourseLookup::NotFound(_)),
            "{:?}",
            section_id
        );
    }

    Ok(())
}

/// Tests that a zero-padded section ID resolves to the same section.
///
/// Expected: Ok(Found) with section 2
#[tokio::test]
async fn finds_zero_padded_section() -> Result<(), AppError> {
    let test = TestBuilder::new().with_section_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_sample_sections(db).await?;

    let lookup = CourseService::new(db)
        .get_course_section(param("TST-1003", "02"))
        .await?;

    let sections = match lookup {
        CourseLookup::Found(sections) => sections,
        not_found => panic!("expected Found, got {:?}", not_found),
    };
    assert_eq!(sections[0].section, 2);

    Ok(())
}

/// Tests that store failures are not folded into not found.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn fails_when_store_query_fails() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CourseService::new(db)
        .get_course_section(param("TST-1003", "1"))
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
}
