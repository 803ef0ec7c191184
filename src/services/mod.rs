/// OpenAPI documentation generation.
pub mod documentation;
/// Game CRUD operations on top of the store.
pub mod game_service;
/// Health check service.
pub mod health_service;
