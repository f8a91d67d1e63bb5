use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned when a request fails.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Body returned when a lookup succeeds but matches no rows.
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct NotFoundDto {
    pub msg: String,
}
