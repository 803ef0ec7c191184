use tracing::{debug, info};

use crate::{
    dao::{game_store::Created, models::Game},
    dto::game::GamePatch,
    error::ServiceError,
    state::SharedState,
};

/// Return every stored game.
pub async fn list_games(state: &SharedState) -> Vec<Game> {
    state.game_store().list().await
}

/// Store `game`, returning the identifier it was stored under.
///
/// A missing or unknown identifier is replaced by a fresh UUID; a known one
/// overwrites the existing record.
pub async fn create_game(state: &SharedState, game: Game) -> String {
    match state.game_store().create(game).await {
        Created::New(id) => {
            info!(%id, "game created");
            id
        }
        Created::Overwritten(id) => {
            info!(%id, "game overwritten");
            id
        }
    }
}

/// Fetch a single game by identifier.
pub async fn get_game(state: &SharedState, id: &str) -> Result<Game, ServiceError> {
    state
        .game_store()
        .find(id.to_owned())
        .await
        .ok_or_else(|| not_found(id))
}

/// Merge `patch` into the game stored under `id`.
///
/// The identifier cannot change through an update: a patch naming a
/// different identifier is rejected and the store is left untouched.
pub async fn update_game(
    state: &SharedState,
    id: &str,
    patch: GamePatch,
) -> Result<(), ServiceError> {
    if let Some(requested) = patch.requested_id().filter(|requested| *requested != id) {
        return Err(ServiceError::Conflict(format!(
            "game identifier cannot change from `{id}` to `{requested}`"
        )));
    }

    let store = state.game_store();
    let existing = store
        .find(id.to_owned())
        .await
        .ok_or_else(|| not_found(id))?;
    let updated = patch.apply(existing);

    // The record may have been deleted since the lookup.
    if !store.replace(id.to_owned(), updated).await {
        return Err(not_found(id));
    }

    debug!(%id, "game updated");
    Ok(())
}

/// Remove the game stored under `id`.
pub async fn delete_game(state: &SharedState, id: &str) -> Result<(), ServiceError> {
    if !state.game_store().delete(id.to_owned()).await {
        return Err(not_found(id));
    }

    info!(%id, "game deleted");
    Ok(())
}

fn not_found(id: &str) -> ServiceError {
    ServiceError::NotFound(format!("game `{id}` not found"))
}
