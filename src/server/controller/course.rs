use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, NotFoundDto},
        course::CourseSectionDto,
    },
    server::{
        error::{AppError, ErrorContext},
        model::course::{
            CourseLookup, CourseSection, GetCourseParam, GetCourseSectionParam,
            GetTermCoursesParam,
        },
        service::course::CourseService,
        state::AppState,
    },
};

pub static COURSE_TAG: &str = "course";

/// GET /api/courses - Get every course section
///
/// # Returns
/// - `200 OK`: JSON array of CourseSectionDto, empty when the store is empty
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    get,
    path = "/api/courses",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved all course sections", body = Vec<CourseSectionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_courses(State(state): State<AppState>) -> Result<Response, AppError> {
    let sections = CourseService::new(&state.db)
        .get_all_courses()
        .await
        .context("An error has occurred when fetching information for all courses")?;

    tracing::info!(
        count = sections.len(),
        "Successfully fetched information for all courses"
    );

    Ok(found(sections))
}

/// GET /api/courses/{course_id} - Get every section of a course
///
/// # Returns
/// - `200 OK`: JSON array of CourseSectionDto
/// - `404 Not Found`: `{ "msg": ... }` when the course has no sections
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    get,
    path = "/api/courses/{course_id}",
    tag = COURSE_TAG,
    params(
        ("course_id" = String, Path, description = "Course identifier, e.g. TST-1003")
    ),
    responses(
        (status = 200, description = "Successfully retrieved course sections", body = Vec<CourseSectionDto>),
        (status = 404, description = "No sections found for the course", body = NotFoundDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Response, AppError> {
    let lookup = CourseService::new(&state.db)
        .get_course(GetCourseParam {
            course_id: course_id.clone(),
        })
        .await
        .context(format!(
            "An error has occurred when attempting to fetch course {}",
            course_id
        ))?;

    match lookup {
        CourseLookup::Found(sections) => {
            tracing::info!(
                course_id = %course_id,
                "Successfully fetched information for course {}",
                course_id
            );
            Ok(found(sections))
        }
        CourseLookup::NotFound(msg) => {
            tracing::warn!(
                course_id = %course_id,
                "Attempted to fetch information for course {} but couldn't find anything",
                course_id
            );
            Ok(not_found(msg))
        }
    }
}

/// GET /api/courses/{course_id}/{section_id} - Get one section of a course
///
/// `section_id` is not validated. Anything that does not parse as an integer, including
/// decimal forms such as `2.0`, is reported as not found without querying the store.
/// Leading zeros parse, so `02` finds section 2.
///
/// # Returns
/// - `200 OK`: JSON array holding the single CourseSectionDto
/// - `404 Not Found`: `{ "msg": ... }` when the section does not exist
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    get,
    path = "/api/courses/{course_id}/{section_id}",
    tag = COURSE_TAG,
    params(
        ("course_id" = String, Path, description = "Course identifier, e.g. TST-1003"),
        ("section_id" = String, Path, description = "Section number within the course")
    ),
    responses(
        (status = 200, description = "Successfully retrieved course section", body = Vec<CourseSectionDto>),
        (status = 404, description = "Section not found", body = NotFoundDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course_section(
    State(state): State<AppState>,
    Path((course_id, section_id)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let lookup = CourseService::new(&state.db)
        .get_course_section(GetCourseSectionParam {
            course_id: course_id.clone(),
            section_id: section_id.clone(),
        })
        .await
        .context(format!(
            "An error has occurred when attempting to fetch course {}:{}",
            course_id, section_id
        ))?;

    match lookup {
        CourseLookup::Found(sections) => {
            tracing::info!(
                course_id = %course_id,
                section_id = %section_id,
                "Successfully fetched information for course {}:{}",
                course_id,
                section_id
            );
            Ok(found(sections))
        }
        CourseLookup::NotFound(msg) => {
            tracing::warn!(
                course_id = %course_id,
                section_id = %section_id,
                "Attempted to fetch information for course {}:{} but couldn't find anything",
                course_id,
                section_id
            );
            Ok(not_found(msg))
        }
    }
}

/// GET /api/courses/term/{term} - Get every section offered in a term
///
/// # Returns
/// - `200 OK`: JSON array of CourseSectionDto
/// - `404 Not Found`: `{ "msg": ... }` when nothing is offered in the term
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    get,
    path = "/api/courses/term/{term}",
    tag = COURSE_TAG,
    params(
        ("term" = String, Path, description = "Term code, e.g. A6")
    ),
    responses(
        (status = 200, description = "Successfully retrieved courses in term", body = Vec<CourseSectionDto>),
        (status = 404, description = "No courses found for the term", body = NotFoundDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_courses_by_term(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> Result<Response, AppError> {
    let lookup = CourseService::new(&state.db)
        .get_courses_by_term(GetTermCoursesParam { term: term.clone() })
        .await
        .context(format!(
            "An error has occurred when attempting to fetch courses from the term {}",
            term
        ))?;

    match lookup {
        CourseLookup::Found(sections) => {
            tracing::info!(
                term = %term,
                "Successfully fetched information for all courses in term {}",
                term
            );
            Ok(found(sections))
        }
        CourseLookup::NotFound(msg) => {
            tracing::warn!(
                term = %term,
                "Attempted to fetch information for courses in term {} but couldn't find anything",
                term
            );
            Ok(not_found(msg))
        }
    }
}

fn found(sections: Vec<CourseSection>) -> Response {
    let dto: Vec<CourseSectionDto> = sections.into_iter().map(CourseSection::into_dto).collect();
    (StatusCode::OK, Json(dto)).into_response()
}

fn not_found(msg: String) -> Response {
    (StatusCode::NOT_FOUND, Json(NotFoundDto { msg })).into_response()
}
