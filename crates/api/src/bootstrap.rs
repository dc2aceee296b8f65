//! Startup provisioning of the administrator account.

use atarashi_core::roles::{ROLE_ADMIN, ROLE_USER};
use atarashi_db::models::user::CreateUser;
use atarashi_db::repositories::UserRepo;
use atarashi_db::DbPool;

use crate::auth::password::hash_password;
use crate::config::BootstrapAdmin;
use crate::error::{AppError, AppResult};

/// Create the configured admin user unless a user with that name exists.
///
/// Returns `true` when a row was inserted.
pub async fn ensure_admin(pool: &DbPool, admin: &BootstrapAdmin) -> AppResult<bool> {
    if UserRepo::find_by_username(pool, &admin.username)
        .await?
        .is_some()
    {
        return Ok(false);
    }

    let password_hash = hash_password(&admin.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let input = CreateUser {
        name: admin.username.clone(),
        username: admin.username.clone(),
        password_hash,
        authorities: format!("{ROLE_ADMIN},{ROLE_USER}"),
    };
    let user = UserRepo::create(pool, &input).await?;
    tracing::info!(user_id = user.id, username = %user.username, "Bootstrap admin created");
    Ok(true)
}
