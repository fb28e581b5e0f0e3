use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, character::CharacterDto},
    server::{
        controller::extract::Path, error::AppError, service::character::CharacterService, state::AppState,
    },
};

/// Tag for grouping character endpoints in OpenAPI documentation
pub static CHARACTER_TAG: &str = "people";

/// List every character.
///
/// # Returns
/// - `200 OK` - Array of characters ordered by id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved characters", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    list_characters(&state).await
}

/// List every character. Same response as `GET /`.
#[utoipa::path(
    get,
    path = "/people",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved characters", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_people(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    list_characters(&state).await
}

/// Get a character by id.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Character id
///
/// # Returns
/// - `200 OK` - The character
/// - `404 Not Found` - No character with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = CHARACTER_TAG,
    params(
        ("id" = i32, Path, description = "Character id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved character", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CharacterService::new(&state.db);

    let character = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}

async fn list_characters(state: &AppState) -> Result<impl IntoResponse, AppError> {
    let service = CharacterService::new(&state.db);

    let characters = service.get_all().await?;

    let dtos: Vec<CharacterDto> = characters.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
