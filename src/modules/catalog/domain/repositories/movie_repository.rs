use crate::modules::catalog::domain::entities::{ActorSummary, Movie, Rating};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Persistence port for movies and their owned relations.
///
/// Every read returns movies with actors and ratings populated, in
/// ascending id order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Movie>>;
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Movie>>;
    /// Case-insensitive substring match on the title.
    async fn search_by_title(&self, term: &str) -> AppResult<Vec<Movie>>;
    async fn exists(&self, id: i32) -> AppResult<bool>;

    /// `None` when the movie does not exist.
    async fn find_actors(&self, movie_id: i32) -> AppResult<Option<Vec<ActorSummary>>>;
    /// `None` when the movie does not exist.
    async fn find_ratings(&self, movie_id: i32) -> AppResult<Option<Vec<Rating>>>;

    /// Insert the movie and link it to `actor_ids` in one transaction.
    /// Every id in `actor_ids` must reference an existing actor.
    async fn create(
        &self,
        title: &str,
        description: &str,
        ratings: f64,
        actor_ids: &[i32],
    ) -> AppResult<Movie>;

    /// Overwrite the scalar fields and replace the actor links in one
    /// transaction. Fails with `NotFound` if the movie is gone.
    async fn update(
        &self,
        id: i32,
        title: &str,
        description: &str,
        ratings: f64,
        actor_ids: &[i32],
    ) -> AppResult<Movie>;

    /// Delete the movie's ratings, its actor links and the movie itself in
    /// one transaction. Returns `false` if no movie row was deleted.
    async fn delete_with_ratings(&self, id: i32) -> AppResult<bool>;
}
