use crate::modules::catalog::domain::entities::{Actor, MovieSummary};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActorRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Actor>>;
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Actor>>;
    /// Case-insensitive substring match on the name.
    async fn search_by_name(&self, term: &str) -> AppResult<Vec<Actor>>;
    /// The subset of `ids` that exist, in no particular order.
    async fn find_existing_ids(&self, ids: &[i32]) -> AppResult<Vec<i32>>;
    /// `None` when the actor does not exist.
    async fn find_movies(&self, actor_id: i32) -> AppResult<Option<Vec<MovieSummary>>>;

    async fn create(&self, name: &str) -> AppResult<Actor>;
    /// `None` when the actor does not exist.
    async fn update(&self, id: i32, name: &str) -> AppResult<Option<Actor>>;
    /// Number of actor rows removed (0 or 1). Links to movies go with it.
    async fn delete(&self, id: i32) -> AppResult<usize>;
}
