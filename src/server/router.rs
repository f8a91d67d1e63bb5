use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, normalize_path::NormalizePath, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, NotFoundDto},
        course::CourseSectionDto,
    },
    server::{
        controller::course::{
            self, get_all_courses, get_course, get_course_section, get_courses_by_term,
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        course::get_all_courses,
        course::get_course,
        course::get_course_section,
        course::get_courses_by_term,
    ),
    components(schemas(CourseSectionDto, NotFoundDto, ErrorDto)),
    tags((name = "course", description = "Read-only course section lookups"))
)]
pub struct ApiDoc;

/// Servable application: the full router with request tracing and CORS, wrapped so a
/// trailing slash resolves to the same route as the bare path.
///
/// Path normalization has to run before routing, so it wraps the router rather than
/// being added with `Router::layer`.
pub fn app(state: AppState) -> NormalizePath<Router> {
    let router = router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    NormalizePath::trim_trailing_slash(router)
}

/// Full application router: course routes under `/api/courses`, Swagger UI at
/// `/api/docs` and the OpenAPI document at `/api/openapi.json`.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/api/courses", course_router())
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
}

/// Course routes relative to their mount point.
///
/// The static `term` segment wins over the `{course_id}/{section_id}` pattern, so
/// `/term/A6` is a term lookup rather than section `A6` of course `term`.
pub fn course_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_courses))
        .route("/term/{term}", get(get_courses_by_term))
        .route("/{course_id}", get(get_course))
        .route("/{course_id}/{section_id}", get(get_course_section))
}
