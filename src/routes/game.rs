use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderName, StatusCode, header},
    routing::get,
};

use crate::{
    dao::models::Game,
    dto::{game::GamePatch, json::JsonBody},
    error::AppError,
    services::game_service,
    state::SharedState,
};

/// Routes for the game collection and individual games.
///
/// Methods not listed for a path fall through to a plain-text `405`. `HEAD` is
/// rejected explicitly since `get` would otherwise answer it.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route(
            "/games",
            get(list_games)
                .post(create_game)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route(
            "/games/{id}",
            get(get_game)
                .put(update_game)
                .delete(delete_game)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
}

/// List every stored game.
#[utoipa::path(
    get,
    path = "/games",
    tag = "game",
    responses((status = 200, description = "All stored games", body = [Game]))
)]
pub async fn list_games(State(state): State<SharedState>) -> Json<Vec<Game>> {
    Json(game_service::list_games(&state).await)
}

/// Store a new game, assigning an identifier when none (or an unknown one) is supplied.
#[utoipa::path(
    post,
    path = "/games",
    tag = "game",
    request_body(content = Game, content_type = "application/json"),
    responses(
        (status = 200, description = "Game stored; `Location` names its identifier"),
        (status = 400, description = "Body is not a valid game"),
        (status = 415, description = "Content type is not JSON"),
        (status = 500, description = "Request body could not be read")
    )
)]
pub async fn create_game(
    State(state): State<SharedState>,
    JsonBody(game): JsonBody<Game>,
) -> (StatusCode, [(HeaderName, String); 1]) {
    let id = game_service::create_game(&state, game).await;
    (StatusCode::OK, [(header::LOCATION, format!("/games/{id}"))])
}

/// Fetch a game by identifier.
#[utoipa::path(
    get,
    path = "/games/{id}",
    tag = "game",
    params(("id" = String, Path, description = "Identifier of the game to fetch")),
    responses(
        (status = 200, description = "Game", body = Game),
        (status = 404, description = "Unknown identifier")
    )
)]
pub async fn get_game(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Game>, AppError> {
    Ok(Json(game_service::get_game(&state, &id).await?))
}

/// Merge the body into the stored game.
///
/// The identifier is resolved before the body is inspected, so an unknown id
/// answers `404` whatever the payload.
#[utoipa::path(
    put,
    path = "/games/{id}",
    tag = "game",
    params(("id" = String, Path, description = "Identifier of the game to update")),
    request_body(content = GamePatch, content_type = "application/json"),
    responses(
        (status = 200, description = "Game updated"),
        (status = 400, description = "Body is not a valid game patch"),
        (status = 404, description = "Unknown identifier"),
        (status = 409, description = "Body tries to change the identifier"),
        (status = 415, description = "Content type is not JSON")
    )
)]
pub async fn update_game(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    body: Result<JsonBody<GamePatch>, AppError>,
) -> Result<StatusCode, AppError> {
    game_service::get_game(&state, &id).await?;
    let JsonBody(patch) = body?;
    game_service::update_game(&state, &id, patch).await?;
    Ok(StatusCode::OK)
}

/// Delete a game by identifier.
#[utoipa::path(
    delete,
    path = "/games/{id}",
    tag = "game",
    params(("id" = String, Path, description = "Identifier of the game to delete")),
    responses(
        (status = 200, description = "Game deleted"),
        (status = 404, description = "Unknown identifier")
    )
)]
pub async fn delete_game(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    game_service::delete_game(&state, &id).await?;
    Ok(StatusCode::OK)
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
