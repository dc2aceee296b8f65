//! Repository layer.
//!
//! [`AnimeRepo`] owns a pool and implements the core `AnimeRepository`
//! trait. [`UserRepo`] is a zero-sized struct whose async methods accept
//! `&PgPool` as the first argument.

pub mod anime_repo;
pub mod user_repo;

pub use anime_repo::AnimeRepo;
pub use user_repo::UserRepo;
