use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One scheduled offering of a course as returned by the API.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct CourseSectionDto {
    pub course_id: String,
    pub section: i32,
    pub title: String,
    pub term: String,
    pub instructor: String,
    pub inst_type: String,
    pub registered: i32,
    pub cap: i32,
    pub credits: i32,
}
