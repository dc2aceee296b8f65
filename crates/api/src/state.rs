use std::sync::Arc;

use atarashi_core::service::AnimeService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (user lookups during login).
    pub pool: atarashi_db::DbPool,
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
    /// Anime service wrapping the configured repository.
    pub anime_service: Arc<AnimeService>,
}
