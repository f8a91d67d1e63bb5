use super::*;

/// Tests fetching the sections offered in a term.
///
/// Expected: Ok(Found) with every row in term B6
#[tokio::test]
async fn finds_courses_in_term() -> Result<(), AppError> {
    let test = TestBuilder::new().with_section_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_sample_sections(db).await?;

    let lookup = CourseService::new(db)
        .get_courses_by_term(GetTermCoursesParam {
            term: "B6".to_string(),
        })
        .await?;

    let sections = match lookup {
        CourseLookup::Found(sections) => sections,
        not_found => panic!("expected Found, got {:?}", not_found),
    };
    assert_eq!(sections.len(), 2);
    assert!(sections.iter().all(|s| s.term == "B6"));

    Ok(())
}

/// Tests a term nothing is offered in.
///
/// Expected: Ok(NotFound) naming the term
#[tokio::test]
async fn returns_not_found_for_empty_term() -> Result<(), AppError> {
    let test = TestBuilder::new().with_section_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_sample_sections(db).await?;

    let lookup = CourseService::new(db)
        .get_courses_by_term(GetTermCoursesParam {
            term: "D6".to_string(),
        })
        .await?;

    assert_eq!(
        lookup,
        CourseLookup::NotFound("Could not find any courses for term D6".to_string())
    );

    Ok(())
}
