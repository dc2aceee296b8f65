//! Storage seam consumed by [`crate::service::AnimeService`].

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::anime::Anime;
use crate::error::StorageError;
use crate::types::DbId;

pub type StorageResult<T> = Result<T, StorageError>;

/// Lazy stream of persisted rows, borrowed from the repository.
pub type AnimeStream<'a> = BoxStream<'a, StorageResult<Anime>>;

/// Non-blocking persistence for [`Anime`] records.
///
/// Implementations never report "not found" as an error: `find_by_id`
/// yields `None` and `overwrite` yields `None` when no row matched.
#[async_trait]
pub trait AnimeRepository: Send + Sync {
    /// Every stored anime, produced as the consumer polls.
    fn find_all(&self) -> AnimeStream<'_>;

    /// The anime with the given id, if any.
    async fn find_by_id(&self, id: DbId) -> StorageResult<Option<Anime>>;

    /// Insert a new anime and return it with its assigned id.
    async fn create(&self, anime: Anime) -> StorageResult<Anime>;

    /// Insert a batch. Results are yielded in input order.
    fn create_all(&self, animes: Vec<Anime>) -> AnimeStream<'_>;

    /// Replace the stored row matching `anime.id`.
    async fn overwrite(&self, anime: Anime) -> StorageResult<Option<Anime>>;

    /// Delete the stored row matching `anime.id`.
    async fn remove(&self, anime: Anime) -> StorageResult<()>;
}
