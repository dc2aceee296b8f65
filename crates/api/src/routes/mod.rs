pub mod anime;
pub mod auth;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                      login (public)
///
/// /animes                                          list, create (admin)
/// /animes/batch                                    batch create (admin)
/// /animes/{id}                                     get (user), update, delete (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/animes", anime::router())
}
