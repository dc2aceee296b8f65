//! Anime entity and its name rule.

use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

use crate::error::CoreError;
use crate::types::DbId;

/// Entity name used in [`CoreError::NotFound`].
pub const ENTITY: &str = "Anime";

/// An anime record.
///
/// `id` is `None` until the storage layer assigns it. A missing or `null`
/// `name` in JSON deserializes to an empty string so it is rejected by
/// validation rather than by the extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Anime {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank"))]
    pub name: String,
}

impl Anime {
    /// A to-be-created anime with no identity yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// A persisted anime.
    pub fn with_id(id: DbId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }

    /// `true` when `name` contains at least one non-whitespace character.
    pub fn has_valid_name(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Reject an anime whose name is blank.
pub fn validate_anime(anime: &Anime) -> Result<(), CoreError> {
    anime
        .validate()
        .map_err(|_| CoreError::Validation { field: "name" })
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn name_with_text_is_valid() {
        assert!(Anime::new("Tensei Shitara Slime Datta Ken").has_valid_name());
    }

    #[test]
    fn padded_name_is_valid() {
        assert!(Anime::new("  Mushishi ").has_valid_name());
    }

    #[test]
    fn empty_name_is_invalid() {
        assert!(!Anime::new("").has_valid_name());
    }

    #[test]
    fn whitespace_only_name_is_invalid() {
        assert!(!Anime::new(" \t\n").has_valid_name());
    }

    #[test]
    fn validate_anime_reports_name_field() {
        assert_matches!(
            validate_anime(&Anime::with_id(1, " ")),
            Err(CoreError::Validation { field: "name" })
        );
        assert!(validate_anime(&Anime::with_id(1, "Monster")).is_ok());
    }

    #[test]
    fn null_or_missing_name_deserializes_as_blank() {
        let anime: Anime = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(anime, Anime::new(""));

        let anime: Anime = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(anime, Anime::with_id(3, ""));
        assert!(!anime.has_valid_name());
    }

    #[test]
    fn unsaved_anime_serializes_without_id() {
        let json = serde_json::to_value(Anime::new("Ping Pong")).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Ping Pong"}));
    }
}
