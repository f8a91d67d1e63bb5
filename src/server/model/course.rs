//! Course section domain models and lookup parameters.
//!
//! Provides the `CourseSection` domain model, the `CourseLookup` result distinguishing
//! "query matched rows" from "query matched nothing", and the parameter types accepted
//! by `CourseService`.

use crate::model::course::CourseSectionDto;

/// One scheduled offering of a course.
///
/// `(course_id, section)` is the natural key; the same course ID appears once per section.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseSection {
    /// Course identifier, e.g. `TST-1003`.
    pub course_id: String,
    /// Section number distinguishing offerings of the same course.
    pub section: i32,
    /// Human-readable course name.
    pub title: String,
    /// Academic term code the section is offered in, e.g. `A6`.
    pub term: String,
    /// Instructor teaching the section.
    pub instructor: String,
    /// Single-character instruction type code.
    pub inst_type: String,
    /// Number of enrolled students.
    pub registered: i32,
    /// Maximum capacity.
    pub cap: i32,
    /// Credit value.
    pub credits: i32,
}

impl CourseSection {
    /// Converts an entity model to a course section domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `CourseSection` - The converted domain model
    pub fn from_entity(entity: entity::section::Model) -> Self {
        Self {
            course_id: entity.course_id,
            section: entity.section,
            title: entity.title,
            term: entity.term,
            instructor: entity.instructor,
            inst_type: entity.inst_type,
            registered: entity.registered,
            cap: entity.cap,
            credits: entity.credits,
        }
    }

    /// Converts the course section domain model to a DTO for API responses.
    pub fn into_dto(self) -> CourseSectionDto {
        CourseSectionDto {
            course_id: self.course_id,
            section: self.section,
            title: self.title,
            term: self.term,
            instructor: self.instructor,
            inst_type: self.inst_type,
            registered: self.registered,
            cap: self.cap,
            credits: self.credits,
        }
    }
}

/// Outcome of a course lookup that executed successfully.
///
/// Store failures are not represented here; they surface as `AppError` instead.
#[derive(Debug, Clone, PartialEq)]
pub enum CourseLookup {
    /// The query matched at least one row.
    Found(Vec<CourseSection>),
    /// The query matched zero rows. Carries the message returned to the client.
    NotFound(String),
}

impl CourseLookup {
    /// Wraps query rows, producing `NotFound` with the lazily built message when empty.
    ///
    /// # Arguments
    /// - `sections` - Rows returned by the repository
    /// - `msg` - Builds the not-found message, only called when `sections` is empty
    pub fn from_rows(sections: Vec<CourseSection>, msg: impl FnOnce() -> String) -> Self {
        if sections.is_empty() {
            Self::NotFound(msg())
        } else {
            Self::Found(sections)
        }
    }
}

/// Parameters for fetching every section of a course.
#[derive(Debug, Clone)]
pub struct GetCourseParam {
    pub course_id: String,
}

/// Parameters for fetching a single section of a course.
///
/// `section_id` is kept as received in the request path; it is parsed by the service.
#[derive(Debug, Clone)]
pub struct GetCourseSectionParam {
    pub course_id: String,
    pub section_id: String,
}

/// Parameters for fetching every section offered in a term.
#[derive(Debug, Clone)]
pub struct GetTermCoursesParam {
    pub term: String,
}
