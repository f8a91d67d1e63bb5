//! Course service for section lookups.
//!
//! Wraps `SectionRepository` results in `CourseLookup`, turning an empty result set into
//! `CourseLookup::NotFound` with a client-facing message. Database failures are returned
//! as `AppError` and never folded into the not-found case.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::section::SectionRepository,
    error::AppError,
    model::course::{
        CourseLookup, CourseSection, GetCourseParam, GetCourseSectionParam, GetTermCoursesParam,
    },
};

/// Service providing course section lookups.
pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    /// Creates a new CourseService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CourseService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every course section.
    ///
    /// An empty store is a valid answer here, so this never produces `NotFound`.
    ///
    /// # Returns
    /// - `Ok(Vec<CourseSection>)` - All sections, possibly empty
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all_courses(&self) -> Result<Vec<CourseSection>, AppError> {
        let sections = SectionRepository::new(self.db).get_all().await?;
        Ok(sections)
    }

    /// Retrieves all sections of a course.
    ///
    /// # Arguments
    /// - `param` - Parameters containing the course ID
    ///
    /// # Returns
    /// - `Ok(CourseLookup::Found)` - At least one section matched
    /// - `Ok(CourseLookup::NotFound)` - No section has this course ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_course(&self, param: GetCourseParam) -> Result<CourseLookup, AppError> {
        let sections = SectionRepository::new(self.db)
            .find_by_course_id(&param.course_id)
            .await?;

        Ok(CourseLookup::from_rows(sections, || {
            format!("Could not find any sections for course {}", param.course_id)
        }))
    }

    /// Retrieves a single section of a course.
    ///
    /// A section ID that is not an integer cannot match any stored section, so it yields
    /// `NotFound` without querying the store.
    ///
    /// # Arguments
    /// - `param` - Parameters containing the course ID and raw section ID
    ///
    /// # Returns
    /// - `Ok(CourseLookup::Found)` - The section exists
    /// - `Ok(CourseLookup::NotFound)` - No such section, or the section ID is malformed
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_course_section(
        &self,
        param: GetCourseSectionParam,
    ) -> Result<CourseLookup, AppError> {
        let not_found = || {
            format!(
                "Could not find section {} of course {}",
                param.section_id, param.course_id
            )
        };

        let Ok(section) = param.section_id.trim().parse::<i32>() else {
            return Ok(CourseLookup::NotFound(not_found()));
        };

        let sections = SectionRepository::new(self.db)
            .find_by_course_and_section(&param.course_id, section)
            .await?;

        Ok(CourseLookup::from_rows(sections, not_found))
    }

    /// Retrieves all sections offered in a term.
    ///
    /// # Arguments
    /// - `param` - Parameters containing the term code
    ///
    /// # Returns
    /// - `Ok(CourseLookup::Found)` - At least one section is offered in the term
    /// - `Ok(CourseLookup::NotFound)` - Nothing is offered in the term
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_courses_by_term(
        &self,
        param: GetTermCoursesParam,
    ) -> Result<CourseLookup, AppError> {
        let sections = SectionRepository::new(self.db)
            .find_by_term(&param.term)
            .await?;

        Ok(CourseLookup::from_rows(sections, || {
            format!("Could not find any courses for term {}", param.term)
        }))
    }
}
