//! Library crate for games-api, exposing modules for binaries and integration tests.

use axum::Router;
use tower_http::{cors::CorsLayer, normalize_path::NormalizePath, trace::TraceLayer};

/// Startup configuration: port and seed games.
pub mod config;
/// Game records and their storage.
pub mod dao;
/// Request and response payloads.
pub mod dto;
mod error;
/// HTTP route trees.
pub mod routes;
/// Operations behind the routes.
pub mod services;
/// Shared application state.
pub mod state;

pub use error::{AppError, ServiceError};

use state::SharedState;

/// Build the HTTP application: routes, cross-cutting middleware, and trailing slash trimming.
///
/// Trailing slashes are removed before routing so `/games/` and `/games/{id}/` reach the same
/// handlers as their canonical forms.
pub fn build_app(state: SharedState) -> NormalizePath<Router> {
    let router = routes::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    NormalizePath::trim_trailing_slash(router)
}
