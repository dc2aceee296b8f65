//! Well-known role name constants.
//!
//! These must match the `authorities` values seeded into the `users` table.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

/// Split a comma-separated `authorities` column into role names.
///
/// Whitespace around entries is trimmed and empty entries are dropped.
pub fn parse_authorities(authorities: &str) -> Vec<String> {
    authorities
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
