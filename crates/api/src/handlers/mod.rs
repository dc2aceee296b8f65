pub mod anime;
pub mod auth;
