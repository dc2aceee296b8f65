//! Handlers for the `/animes` resource.
//!
//! Listing and every mutation require the admin role; reading a single
//! anime requires the user role.

use atarashi_core::anime::Anime;
use atarashi_core::types::DbId;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use futures::TryStreamExt;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::rbac::{RequireAdmin, RequireUser};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/animes
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Anime>>>> {
    let animes: Vec<Anime> = state.anime_service.list_all().try_collect().await?;
    Ok(Json(DataResponse { data: animes }))
}

/// GET /api/v1/animes/{id}
pub async fn get_by_id(
    RequireUser(_user): RequireUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Anime>> {
    let anime = state.anime_service.find_by_id(id).await?;
    Ok(Json(anime))
}

/// POST /api/v1/animes
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<Anime>,
) -> AppResult<(StatusCode, Json<Anime>)> {
    let anime = state.anime_service.save(input).await?;
    tracing::info!(user_id = admin.user_id, id = ?anime.id, "Anime created via API");
    Ok((StatusCode::CREATED, Json(anime)))
}

/// POST /api/v1/animes/batch
///
/// The whole batch is collected before responding, so a failure after some
/// rows were persisted still produces an error response.
pub async fn create_batch(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<Vec<Anime>>,
) -> AppResult<(StatusCode, Json<DataResponse<Vec<Anime>>>)> {
    let animes: Vec<Anime> = state.anime_service.save_all(input).try_collect().await?;
    tracing::info!(user_id = admin.user_id, count = animes.len(), "Anime batch created via API");
    Ok((StatusCode::CREATED, Json(DataResponse { data: animes })))
}

/// PUT /api/v1/animes/{id}
///
/// The path id wins over any id in the body.
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(mut input): AppJson<Anime>,
) -> AppResult<StatusCode> {
    input.id = Some(id);
    state.anime_service.update(input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/animes/{id}
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.anime_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
