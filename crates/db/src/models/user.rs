//! User entity model and DTOs.

use atarashi_core::roles::parse_authorities;
use atarashi_core::types::DbId;
use serde::Deserialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub username: String,
    pub password_hash: String,
    pub authorities: String,
}

impl User {
    /// Role names granted to this user.
    pub fn roles(&self) -> Vec<String> {
        parse_authorities(&self.authorities)
    }
}

/// DTO for creating a new user.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub username: String,
    pub password_hash: String,
    pub authorities: String,
}
