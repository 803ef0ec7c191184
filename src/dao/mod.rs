/// Game record storage and retrieval operations.
pub mod game_store;
/// Data model shared by the storage and REST layers.
pub mod models;
