use crate::modules::catalog::domain::entities::{Rating, RatingDraft, RatingPatch};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Ratings returned from this port carry their owning movie.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RatingRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Rating>>;
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Rating>>;
    async fn create(&self, movie_id: i32, draft: &RatingDraft) -> AppResult<Rating>;
    /// `None` when the rating does not exist.
    async fn update(&self, id: i32, patch: &RatingPatch) -> AppResult<Option<Rating>>;
    /// Number of rows removed (0 or 1).
    async fn delete(&self, id: i32) -> AppResult<usize>;
}
