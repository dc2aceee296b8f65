//! Row structs and DTOs.
//!
//! Rows derive `FromRow` and convert into the core domain types where one
//! exists.

pub mod anime;
pub mod user;
