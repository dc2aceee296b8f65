//! Anime service: validation, existence checks and error typing around an
//! [`AnimeRepository`].
//!
//! Every operation is lazy. Nothing touches storage until the returned
//! future or stream is polled, and dropping it stops the pipeline before the
//! next repository call.

use std::sync::Arc;

use futures::future;
use futures::stream::{self, BoxStream, Stream, StreamExt, TryStreamExt};

use crate::anime::{validate_anime, Anime, ENTITY};
use crate::error::{CoreError, CoreResult};
use crate::repository::AnimeRepository;
use crate::types::DbId;

/// Stateless service shared by all request handlers.
pub struct AnimeService {
    repository: Arc<dyn AnimeRepository>,
}

impl AnimeService {
    pub fn new(repository: Arc<dyn AnimeRepository>) -> Self {
        Self { repository }
    }

    /// Every stored anime, forwarded as the repository yields them.
    pub fn list_all(&self) -> BoxStream<'_, CoreResult<Anime>> {
        let rows = async move {
            tracing::debug!("Listing all anime");
            self.repository.find_all().map_err(CoreError::from)
        };
        stream::once(rows).flatten().boxed()
    }

    /// Look up one anime, failing with [`CoreError::NotFound`] on a miss.
    pub async fn find_by_id(&self, id: DbId) -> CoreResult<Anime> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })
    }

    /// Validate and create one anime. Invalid input never reaches storage.
    pub async fn save(&self, anime: Anime) -> CoreResult<Anime> {
        validate_anime(&anime)?;
        let created = self.repository.create(anime).await?;
        tracing::info!(id = ?created.id, name = %created.name, "Anime created");
        Ok(created)
    }

    /// Create a batch and stream back the persisted rows in input order.
    ///
    /// All inputs are validated before the repository is called; one invalid
    /// name fails the whole batch with no storage access. Rows coming back
    /// from storage are checked again as they are pulled: the first invalid
    /// row ends the stream with [`CoreError::Validation`] and is not yielded,
    /// while rows already yielded stay delivered. Rows persisted before the
    /// failure are not rolled back.
    pub fn save_all(&self, animes: Vec<Anime>) -> BoxStream<'_, CoreResult<Anime>> {
        let batch = async move {
            if let Err(err) = animes.iter().try_for_each(validate_anime) {
                tracing::debug!(count = animes.len(), "Rejected batch with an invalid name");
                return stream::once(future::ready(Err::<Anime, _>(err))).left_stream();
            }

            tracing::info!(count = animes.len(), "Creating anime batch");
            self.repository
                .create_all(animes)
                .map(|persisted| -> CoreResult<Anime> {
                    let anime = persisted?;
                    if !anime.has_valid_name() {
                        tracing::warn!(id = ?anime.id, "Storage returned an anime with a blank name");
                        return Err(CoreError::Validation { field: "name" });
                    }
                    Ok(anime)
                })
                .right_stream()
        };

        end_after_first_error(stream::once(batch).flatten())
    }

    /// Overwrite an existing anime with `anime` as given.
    ///
    /// The row must exist; the lookup completes before the name is checked
    /// and before the write is issued.
    pub async fn update(&self, anime: Anime) -> CoreResult<()> {
        let id = anime.id.ok_or(CoreError::Validation { field: "id" })?;
        self.find_by_id(id).await?;
        validate_anime(&anime)?;
        self.repository.overwrite(anime).await?;
        tracing::info!(id, "Anime updated");
        Ok(())
    }

    /// Delete an existing anime.
    pub async fn delete(&self, id: DbId) -> CoreResult<()> {
        let anime = self.find_by_id(id).await?;
        self.repository.remove(anime).await?;
        tracing::info!(id, "Anime deleted");
        Ok(())
    }
}

/// Forward items up to and including the first `Err`, then end without
/// polling `results` again.
fn end_after_first_error<'a, T, E>(
    results: impl Stream<Item = Result<T, E>> + Send + 'a,
) -> BoxStream<'a, Result<T, E>>
where
    T: Send + 'a,
    E: Send + 'a,
{
    stream::unfold(Some(results.boxed()), |remaining| async move {
        let mut remaining = remaining?;
        let item = remaining.next().await?;
        let next = item.is_ok().then_some(remaining);
        Some((item, next))
    })
    .boxed()
}
