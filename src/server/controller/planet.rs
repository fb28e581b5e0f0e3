use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, planet::PlanetDto},
    server::{
        controller::extract::Path, error::AppError, service::planet::PlanetService, state::AppState,
    },
};

/// Tag for grouping planet endpoints in OpenAPI documentation
pub static PLANET_TAG: &str = "planet";

/// List every planet.
///
/// # Returns
/// - `200 OK` - Array of planets ordered by id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Successfully retrieved planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = PlanetService::new(&state.db);

    let planets = service.get_all().await?;

    let dtos: Vec<PlanetDto> = planets.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a planet by id.
///
/// # Returns
/// - `200 OK` - The planet
/// - `404 Not Found` - No planet with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/planet/{id}",
    tag = PLANET_TAG,
    params(
        ("id" = i32, Path, description = "Planet id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PlanetService::new(&state.db);

    let planet = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(planet.into_dto())))
}
