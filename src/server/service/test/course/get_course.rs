use super::*;

/// Tests fetching every section of a stored course.
///
/// Expected: Ok(Found) with both TST-1003 sections
#[tokio::test]
async fn finds_course_sections() -> Result<(), AppError> {
    let test = TestBuilder::new().with_section_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_sample_sections(db).await?;

    let lookup = CourseService::new(db)
        .get_course(GetCourseParam {
            course_id: "TST-1003".to_string(),
        })
        .await?;

    let sections = match lookup {
        CourseLookup::Found(sections) => sections,
        not_found => panic!("expected Found, got {:?}", not_found),
    };
    assert_eq!(sections.len(), 2);
    assert!(sections.iter().all(|s| s.course_id == "TST-1003"));

    Ok(())
}

/// Tests that unknown course IDs produce the not-found variant instead of an error.
///
/// Expected: Ok(NotFound) naming the course, for every absent ID
#[tokio::test]
async fn returns_not_found_for_unknown_courses() -> Result<(), AppError> {
    let test = TestBuilder::new().with_section_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_sample_sections(db).await?;

    let service = CourseService::new(db);
    for course_id in ["TST-9999", "tst-1003", "", "NOT A COURSE"] {
        let lookup = service
            .get_course(GetCourseParam {
                course_id: course_id.to_string(),
            })
            .await?;

        match lookup {
            CourseLookup::NotFound(msg) => assert!(msg.contains(course_id)),
            found => panic!("expected NotFound for {:?}, got {:?}", course_id, found),
        }
    }

    Ok(())
}

/// Tests that removing the sample rows makes the course not found.
///
/// Expected: Ok(NotFound) after clearing the TST prefix
#[tokio::test]
async fn returns_not_found_after_prefix_cleared() -> Result<(), AppError> {
    let test = TestBuilder::new().with_section_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::seed_sample_sections(db).await?;
    factory::clear_sections_with_prefix(db, factory::TEST_COURSE_PREFIX).await?;

    let lookup = CourseService::new(db)
        .get_course(GetCourseParam {
            course_id: "TST-1003".to_string(),
        })
        .await?;

    assert!(matches!(lookup, CourseLookup::NotFound(_)));

    Ok(())
}
