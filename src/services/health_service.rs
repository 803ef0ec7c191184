use tracing::debug;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Report liveness together with the current store size.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    let games = state.game_store().count().await;
    debug!(games, "health check");
    HealthResponse::ok(games)
}
