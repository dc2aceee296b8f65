//! Handler for `/auth/login`.

use atarashi_core::error::CoreError;
use atarashi_core::types::DbId;
use atarashi_db::repositories::UserRepo;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{dummy_password_hash, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Public user info embedded in [`AuthResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub name: String,
    pub username: String,
    pub roles: Vec<String>,
}

/// POST /api/v1/auth/login
///
/// Authenticate with username + password. Returns a bearer access token.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let invalid = || {
        AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        ))
    };

    let Some(user) = UserRepo::find_by_username(&state.pool, &input.username).await? else {
        // Same argon2 cost as a wrong password.
        let _ = verify_password(&input.password, dummy_password_hash());
        tracing::info!(username = %input.username, "Rejected login for unknown user");
        return Err(invalid());
    };

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(username = %input.username, "Rejected login with wrong password");
        return Err(invalid());
    }

    let jwt = &state.config.jwt;
    let roles = user.roles();
    let access_token = generate_access_token(user.id, &user.username, &roles, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(AuthResponse {
        access_token,
        token_type: "Bearer",
        expires_in: jwt.access_token_expiry_mins * 60,
        user: UserInfo {
            id: user.id,
            name: user.name,
            username: user.username,
            roles,
        },
    }))
}
