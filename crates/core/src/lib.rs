//! Domain layer for the Atarashi anime API.
//!
//! Holds the entity model, the error taxonomy, the storage seam
//! ([`repository::AnimeRepository`]) and the service that wraps it.

pub mod anime;
pub mod error;
pub mod repository;
pub mod roles;
pub mod service;
pub mod types;
