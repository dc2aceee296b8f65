//! Route definitions for the `/animes` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::anime;
use crate::state::AppState;

/// Routes mounted at `/animes`.
///
/// ```text
/// GET    /          -> list        (admin)
/// POST   /          -> create      (admin)
/// POST   /batch     -> create_batch (admin)
/// GET    /{id}      -> get_by_id   (user)
/// PUT    /{id}      -> update      (admin)
/// DELETE /{id}      -> delete      (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(anime::list).post(anime::create))
        .route("/batch", post(anime::create_batch))
        .route(
            "/{id}",
            get(anime::get_by_id)
                .put(anime::update)
                .delete(anime::delete),
        )
}
