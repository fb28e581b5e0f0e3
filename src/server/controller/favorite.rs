use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::FavoriteDto,
    },
    server::{
        controller::extract::{Path, Query},
        error::AppError,
        middleware::auth::AuthGuard,
        model::favorite::{Favorite, FavoriteTarget},
        service::favorite::FavoriteService,
        state::AppState,
    },
};

/// Tag for grouping favorite endpoints in OpenAPI documentation
pub static FAVORITE_TAG: &str = "favorite";

#[derive(Deserialize)]
pub struct UsernameParams {
    pub username: Option<String>,
}

#[derive(Deserialize)]
pub struct CredentialParams {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// List the favorites of a user.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Query parameters containing the username
///
/// # Returns
/// - `200 OK` - Array of favorites with their target inlined
/// - `400 Bad Request` - `username` missing
/// - `404 Not Found` - No user with that username
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = FAVORITE_TAG,
    params(
        ("username" = String, Query, description = "Username whose favorites are listed")
    ),
    responses(
        (status = 200, description = "Successfully retrieved favorites", body = Vec<FavoriteDto>),
        (status = 400, description = "Username missing", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    Query(params): Query<UsernameParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = FavoriteService::new(&state.db);

    let favorites = service.get_by_username(params.username).await?;

    let dtos: Vec<FavoriteDto> = favorites.into_iter().map(Favorite::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Add a character to the user's favorites.
///
/// # Access Control
/// `username` and `password` query parameters must match a stored user.
///
/// # Returns
/// - `200 OK` - `{"Message": "Favorite character added successfully"}`
/// - `400 Bad Request` - Credentials missing
/// - `401 Unauthorized` - Password incorrect
/// - `404 Not Found` - User or character not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/favorite/people/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "Character id"),
        ("username" = String, Query, description = "Username"),
        ("password" = String, Query, description = "Password")
    ),
    responses(
        (status = 200, description = "Favorite added", body = MessageDto),
        (status = 400, description = "Credentials missing", body = ErrorDto),
        (status = 401, description = "Password incorrect", body = ErrorDto),
        (status = 404, description = "User or character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<CredentialParams>,
) -> Result<impl IntoResponse, AppError> {
    add_favorite(&state, FavoriteTarget::Character(id), params).await
}

/// Remove a character from the user's favorites.
///
/// # Access Control
/// `username` and `password` query parameters must match a stored user.
///
/// # Returns
/// - `200 OK` - `{"Message": "Favorite character deleted successfully"}`
/// - `400 Bad Request` - Credentials missing
/// - `401 Unauthorized` - Password incorrect
/// - `404 Not Found` - User not found, or the user has no such favorite
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/favorite/people/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "Character id"),
        ("username" = String, Query, description = "Username"),
        ("password" = String, Query, description = "Password")
    ),
    responses(
        (status = 200, description = "Favorite deleted", body = MessageDto),
        (status = 400, description = "Credentials missing", body = ErrorDto),
        (status = 401, description = "Password incorrect", body = ErrorDto),
        (status = 404, description = "User or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_character(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<CredentialParams>,
) -> Result<impl IntoResponse, AppError> {
    remove_favorite(&state, FavoriteTarget::Character(id), params).await
}

/// Add a planet to the user's favorites.
///
/// # Returns
/// - `200 OK` - `{"Message": "Favorite planet added successfully"}`
/// - `400 Bad Request` - Credentials missing
/// - `401 Unauthorized` - Password incorrect
/// - `404 Not Found` - User or planet not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/favorite/planet/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "Planet id"),
        ("username" = String, Query, description = "Username"),
        ("password" = String, Query, description = "Password")
    ),
    responses(
        (status = 200, description = "Favorite added", body = MessageDto),
        (status = 400, description = "Credentials missing", body = ErrorDto),
        (status = 401, description = "Password incorrect", body = ErrorDto),
        (status = 404, description = "User or planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<CredentialParams>,
) -> Result<impl IntoResponse, AppError> {
    add_favorite(&state, FavoriteTarget::Planet(id), params).await
}

/// Remove a planet from the user's favorites.
///
/// # Returns
/// - `200 OK` - `{"Message": "Favorite planet deleted successfully"}`
/// - `400 Bad Request` - Credentials missing
/// - `401 Unauthorized` - Password incorrect
/// - `404 Not Found` - User not found, or the user has no such favorite
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/favorite/planet/{id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "Planet id"),
        ("username" = String, Query, description = "Username"),
        ("password" = String, Query, description = "Password")
    ),
    responses(
        (status = 200, description = "Favorite deleted", body = MessageDto),
        (status = 400, description = "Credentials missing", body = ErrorDto),
        (status = 401, description = "Password incorrect", body = ErrorDto),
        (status = 404, description = "User or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<CredentialParams>,
) -> Result<impl IntoResponse, AppError> {
    remove_favorite(&state, FavoriteTarget::Planet(id), params).await
}

async fn add_favorite(
    state: &AppState,
    target: FavoriteTarget,
    params: CredentialParams,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db)
        .require(params.username, params.password)
        .await?;

    FavoriteService::new(&state.db).add(&user, target).await?;

    let message = format!("Favorite {} added successfully", target.label());

    Ok((StatusCode::OK, Json(MessageDto::new(message))))
}

async fn remove_favorite(
    state: &AppState,
    target: FavoriteTarget,
    params: CredentialParams,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db)
        .require(params.username, params.password)
        .await?;

    FavoriteService::new(&state.db).remove(&user, target).await?;

    let message = format!("Favorite {} deleted successfully", target.label());

    Ok((StatusCode::OK, Json(MessageDto::new(message))))
}
