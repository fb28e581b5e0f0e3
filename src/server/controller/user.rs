use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, GreetingDto},
        user::UserDto,
    },
    server::{error::AppError, service::user::UserService, state::AppState},
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Static greeting used as a liveness check.
///
/// # Returns
/// - `200 OK` - `{"msg": "Hello, this is your GET /user response "}`
#[utoipa::path(
    get,
    path = "/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Greeting message", body = GreetingDto)
    ),
)]
pub async fn greet() -> impl IntoResponse {
    Json(GreetingDto {
        msg: "Hello, this is your GET /user response ".to_string(),
    })
}

/// List every user with their favorites inlined.
///
/// Password hashes are never included in the response.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Array of users ordered by id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/user/all",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let users = service.get_all_with_favorites().await?;

    let dtos: Vec<UserDto> = users.into_iter().map(|user| user.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
