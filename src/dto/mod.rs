/// Merge patch accepted on update.
pub mod game;
/// Health check payload.
pub mod health;
/// JSON body extractor.
pub mod json;
