use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// `username` or `password` query parameter was not supplied.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Please provide Username and Password")]
    MissingCredentials,

    /// No user exists with the supplied username.
    ///
    /// Results in a 404 Not Found response.
    #[error("User not found")]
    UserNotFound(String),

    /// The supplied password does not verify against the stored hash.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Password incorrect")]
    InvalidPassword(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingCredentials` → 400 Bad Request
/// - `UserNotFound` → 404 Not Found
/// - `InvalidPassword` → 401 Unauthorized
///
/// Failures are logged at debug level with the username involved. The username is not
/// echoed back to the client.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match &self {
            Self::MissingCredentials => {
                error_response(StatusCode::BAD_REQUEST, self.to_string())
            }
            Self::UserNotFound(username) => {
                tracing::debug!("Credential check failed: unknown user {}", username);
                error_response(StatusCode::NOT_FOUND, self.to_string())
            }
            Self::InvalidPassword(username) => {
                tracing::debug!("Credential check failed: wrong password for {}", username);
                error_response(StatusCode::UNAUTHORIZED, self.to_string())
            }
        }
    }
}
