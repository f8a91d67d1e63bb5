use std::convert::Infallible;

use axum::{
    body::{to_bytes, Body, Bytes},
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};
use tower::{Service, ServiceExt};

use crate::server::{
    router::{app, course_router, router},
    state::AppState,
};


fn course_app(db: &DatabaseConnection) -> Router {
    course_router().with_state(AppState::new(db.clone()))
}

async fn get_raw<S>(app: &S, uri: &str) -> (StatusCode, Bytes)
where
    S: Service<Request<Body>, Response = Response, Error = Infallible> + Clone,
{
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .method("GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body)
}

async fn get_json<S>(app: &S, uri: &str) -> (StatusCode, serde_json::Value)
where
    S: Service<Request<Body>, Response = Response, Error = Infallible> + Clone,
{
    let (status, body) = get_raw(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}
