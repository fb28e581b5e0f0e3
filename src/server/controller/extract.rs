//! Request extractors that reject with the JSON error envelope.
//!
//! axum's own `Path` and `Query` answer a malformed request with a plain-text body. These
//! wrappers run the same extraction and convert the rejection into `AppError::BadRequest`.
//! The router fallbacks for unknown routes and methods live here too, so every failure
//! reaching the client has the same body.

use axum::{
    extract::FromRequestParts,
    http::{Method, StatusCode, Uri},
    response::Response,
};

use crate::server::error::{error_response, AppError};

/// Path parameters, e.g. the `{id}` of `/people/{id}`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);

/// Query string parameters.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct Query<T>(pub T);

/// Handles requests that match no API route.
pub async fn not_found(uri: Uri) -> AppError {
    tracing::debug!("No route for {}", uri.path());

    AppError::NotFound("Route not found".to_string())
}

/// Handles requests whose path exists but not for the requested method.
pub async fn method_not_allowed(method: Method) -> Response {
    error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        format!("Method {} not allowed", method),
    )
}
