use axum::{
    Router,
    http::{StatusCode, Uri},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{services::documentation::ApiDoc, state::SharedState};

/// Game CRUD routes.
pub mod game;
/// Health check route.
pub mod health;

const GAME_ITEM_PREFIX: &str = "/games/";

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router().merge(game::router());

    api_router
        .merge(docs_router())
        .fallback(unknown_route)
        .with_state(state)
}

/// Serve the Swagger UI backed by the generated OpenAPI document.
fn docs_router() -> Router<SharedState> {
    SwaggerUi::new("/docs")
        .url("/api-doc/openapi.json", ApiDoc::openapi())
        .into()
}

/// Plain-text `404` for unmatched paths. Anything below `/games/` that is not
/// exactly one identifier segment is reported as missing parameters.
async fn unknown_route(uri: Uri) -> (StatusCode, &'static str) {
    if uri.path().starts_with(GAME_ITEM_PREFIX) {
        (StatusCode::NOT_FOUND, "Insufficient Parameters")
    } else {
        (StatusCode::NOT_FOUND, "Not found")
    }
}
