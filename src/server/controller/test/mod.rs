use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde::de::DeserializeOwned;
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::{router, state::AppState},
};


async fn setup() -> TestContext {
    TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap()
}

fn app(db: &DatabaseConnection) -> Router {
    router::app(AppState::new(db.clone()))
}

/// Sends a bodiless request through the full application and returns the status and body.
async fn send(db: &DatabaseConnection, method: Method, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app(db).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, bytes.to_vec())
}

fn json<T: DeserializeOwned>(bytes: &[u8]) -> T {
    serde_json::from_slice(bytes).unwrap()
}
