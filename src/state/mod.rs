use std::sync::Arc;

use crate::dao::game_store::{GameStore, MemoryGameStore};

/// Reference-counted handle to [`AppState`] handed to every route.
pub type SharedState = Arc<AppState>;

/// Central application state shared by every request handler.
pub struct AppState {
    game_store: Arc<dyn GameStore>,
}

impl AppState {
    /// Construct a new [`AppState`] around `store`, wrapped in an [`Arc`] so it can be cloned
    /// cheaply.
    pub fn new(store: Arc<dyn GameStore>) -> SharedState {
        Arc::new(Self { game_store: store })
    }

    /// State backed by an empty in-memory store.
    pub fn in_memory() -> SharedState {
        Self::new(Arc::new(MemoryGameStore::new()))
    }

    /// Handle to the game store.
    pub fn game_store(&self) -> Arc<dyn GameStore> {
        self.game_store.clone()
    }
}
