//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI
//! is served at `/api/docs` with the document at `/api/docs/openapi.json`.

use axum::Router;
use tower::Layer;
use tower_http::{cors::CorsLayer, normalize_path::NormalizePathLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, state::AppState};

/// Builds the API routes and the OpenAPI document describing them.
///
/// Handlers that share a path are registered in the same `routes!` call so they end up
/// on one method router.
///
/// # Registered Endpoints
/// - `GET /user` - Static greeting
/// - `GET /user/all` - Users with their favorites
/// - `GET /` and `GET /people` - All characters
/// - `GET /people/{id}` - One character
/// - `GET /planets` - All planets
/// - `GET /planet/{id}` - One planet
/// - `GET /users/favorites` - A user's favorites
/// - `POST`/`DELETE /favorite/people/{id}` - Add or remove a character favorite
/// - `POST`/`DELETE /favorite/planet/{id}` - Add or remove a planet favorite
pub fn routes() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holonet", description = "Holonet API"), tags(
        (name = controller::user::USER_TAG, description = "User API routes"),
        (name = controller::character::CHARACTER_TAG, description = "Character API routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite API routes"),
    ))]
    struct ApiDoc;

    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::greet))
        .routes(routes!(controller::user::get_all_users))
        .routes(routes!(controller::character::get_characters))
        .routes(routes!(controller::character::get_people))
        .routes(routes!(controller::character::get_character))
        .routes(routes!(controller::planet::get_planets))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(controller::favorite::get_user_favorites))
        .routes(routes!(
            controller::favorite::add_favorite_character,
            controller::favorite::remove_favorite_character
        ))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::remove_favorite_planet
        ))
        .split_for_parts()
}

/// Builds the complete application with state, documentation and middleware applied.
///
/// Trailing slashes are trimmed before API routing. Swagger UI sits in front of the
/// normalization because it redirects `/api/docs` to `/api/docs/` itself. Unknown routes
/// and unsupported methods answer with the JSON error envelope.
pub fn app(state: AppState) -> Router {
    let (api, openapi) = routes();

    let api = api
        .fallback(controller::extract::not_found)
        .method_not_allowed_fallback(controller::extract::method_not_allowed)
        .with_state(state);
    let api = NormalizePathLayer::trim_trailing_slash().layer(api);

    Router::new()
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi))
        .fallback_service(api)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
