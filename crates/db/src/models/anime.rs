//! Row mapping for the `animes` table.

use atarashi_core::anime::Anime;
use atarashi_core::types::DbId;
use sqlx::FromRow;

/// An anime row from the `animes` table.
#[derive(Debug, Clone, FromRow)]
pub struct AnimeRow {
    pub id: DbId,
    pub name: String,
}

impl From<AnimeRow> for Anime {
    fn from(row: AnimeRow) -> Self {
        Anime::with_id(row.id, row.name)
    }
}
