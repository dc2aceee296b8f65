//! Repository for the `animes` table.

use async_trait::async_trait;
use atarashi_core::anime::Anime;
use atarashi_core::error::StorageError;
use atarashi_core::repository::{AnimeRepository, AnimeStream, StorageResult};
use atarashi_core::types::DbId;
use futures::stream::{self, StreamExt, TryStreamExt};
use sqlx::PgPool;

use crate::models::anime::AnimeRow;

const SELECT_ALL: &str = "SELECT id, name FROM animes ORDER BY id";
const SELECT_BY_ID: &str = "SELECT id, name FROM animes WHERE id = $1";
const INSERT: &str = "INSERT INTO animes (name) VALUES ($1) RETURNING id, name";
const UPDATE: &str = "UPDATE animes SET name = $2 WHERE id = $1 RETURNING id, name";
const DELETE: &str = "DELETE FROM animes WHERE id = $1";

/// PostgreSQL-backed [`AnimeRepository`].
#[derive(Clone)]
pub struct AnimeRepo {
    pool: PgPool,
}

impl AnimeRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnimeRepository for AnimeRepo {
    /// Rows are streamed from the cursor as the consumer polls.
    fn find_all(&self) -> AnimeStream<'_> {
        sqlx::query_as::<_, AnimeRow>(SELECT_ALL)
            .fetch(&self.pool)
            .map_ok(Anime::from)
            .map_err(StorageError::new)
            .boxed()
    }

    async fn find_by_id(&self, id: DbId) -> StorageResult<Option<Anime>> {
        let row = sqlx::query_as::<_, AnimeRow>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::new)?;
        Ok(row.map(Anime::from))
    }

    async fn create(&self, anime: Anime) -> StorageResult<Anime> {
        let row = sqlx::query_as::<_, AnimeRow>(INSERT)
            .bind(&anime.name)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::new)?;
        tracing::debug!(id = row.id, "Inserted anime row");
        Ok(row.into())
    }

    /// One insert per pulled element, in input order. Not transactional:
    /// rows inserted before a failure stay committed.
    fn create_all(&self, animes: Vec<Anime>) -> AnimeStream<'_> {
        stream::iter(animes)
            .then(move |anime| self.create(anime))
            .boxed()
    }

    async fn overwrite(&self, anime: Anime) -> StorageResult<Option<Anime>> {
        let Some(id) = anime.id else {
            return Ok(None);
        };
        let row = sqlx::query_as::<_, AnimeRow>(UPDATE)
            .bind(id)
            .bind(&anime.name)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::new)?;
        Ok(row.map(Anime::from))
    }

    async fn remove(&self, anime: Anime) -> StorageResult<()> {
        let Some(id) = anime.id else {
            return Ok(());
        };
        let result = sqlx::query(DELETE)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::new)?;
        tracing::debug!(id, rows = result.rows_affected(), "Deleted anime row");
        Ok(())
    }
}
