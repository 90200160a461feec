use crate::modules::catalog::domain::{
    Actor, ActorRepository, ActorSummary, IdResolution, Movie, MovieDraft, MovieRepository,
    MovieSummary, Rating, RatingDraft, RatingPatch, RatingRepository,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;
use crate::{log_debug, log_info, log_warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Confirmation body returned by delete operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deletion {
    pub deleted: bool,
}

impl Deletion {
    pub fn confirmed() -> Self {
        Self { deleted: true }
    }
}

/// Relationship-aware CRUD over movies, actors and ratings.
///
/// Inputs are expected to be validated at the boundary already; this layer
/// only enforces existence and relationship rules.
pub struct CatalogService {
    movie_repo: Arc<dyn MovieRepository>,
    actor_repo: Arc<dyn ActorRepository>,
    rating_repo: Arc<dyn RatingRepository>,
    id_resolution: IdResolution,
}

impl CatalogService {
    pub fn new(
        movie_repo: Arc<dyn MovieRepository>,
        actor_repo: Arc<dyn ActorRepository>,
        rating_repo: Arc<dyn RatingRepository>,
    ) -> Self {
        Self {
            movie_repo,
            actor_repo,
            rating_repo,
            id_resolution: IdResolution::BestEffort,
        }
    }

    // --- MOVIES ---

    pub async fn list_movies(&self) -> AppResult<Vec<Movie>> {
        self.movie_repo.find_all().await
    }

    pub async fn get_movie(&self, id: i32) -> AppResult<Movie> {
        self.movie_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| movie_not_found(id))
    }

    pub async fn search_movies(&self, term: &str) -> AppResult<Vec<Movie>> {
        if unmatchable(term) {
            return Ok(Vec::new());
        }
        LogContext::search_operation(term, "movies", None);
        let movies = self.movie_repo.search_by_title(term).await?;
        LogContext::search_operation(term, "movies", Some(movies.len()));
        Ok(movies)
    }

    /// Empty when the movie does not exist; unlike `get_movie` this never
    /// reports `NotFound`.
    pub async fn get_actors_of_movie(&self, movie_id: i32) -> AppResult<Vec<ActorSummary>> {
        Ok(self
            .movie_repo
            .find_actors(movie_id)
            .await?
            .unwrap_or_default())
    }

    pub async fn create_movie(&self, draft: MovieDraft) -> AppResult<Movie> {
        let actor_ids = self.resolve_actor_ids(&draft).await?;

        let movie = self
            .movie_repo
            .create(&draft.title, &draft.description, draft.ratings, &actor_ids)
            .await?;

        log_info!(
            "Created movie {} '{}' with {} actor(s)",
            movie.id,
            movie.title,
            movie.actors.len()
        );
        Ok(movie)
    }

    /// Full replace: scalar fields are overwritten and the cast becomes
    /// exactly the resolved `draft.actors`. Dropped actors are unlinked,
    /// never deleted.
    pub async fn update_movie(&self, id: i32, draft: MovieDraft) -> AppResult<Movie> {
        let existing = self.get_movie(id).await?;
        let actor_ids = self.resolve_actor_ids(&draft).await?;

        let unlinked = existing
            .actor_ids()
            .into_iter()
            .filter(|actor_id| !actor_ids.contains(actor_id))
            .count();

        let movie = self
            .movie_repo
            .update(
                id,
                &draft.title,
                &draft.description,
                draft.ratings,
                &actor_ids,
            )
            .await?;

        log_info!(
            "Updated movie {} '{}' ({} actor(s), {} unlinked)",
            movie.id,
            movie.title,
            movie.actors.len(),
            unlinked
        );
        Ok(movie)
    }

    /// Removes the movie together with every rating it owns.
    pub async fn delete_movie(&self, id: i32) -> AppResult<Deletion> {
        if !self.movie_repo.exists(id).await? {
            return Err(movie_not_found(id));
        }

        if !self.movie_repo.delete_with_ratings(id).await? {
            // Lost a race with a concurrent delete
            return Err(movie_not_found(id));
        }

        log_info!("Deleted movie {} and its ratings", id);
        Ok(Deletion::confirmed())
    }

    // --- ACTORS ---

    pub async fn list_actors(&self) -> AppResult<Vec<Actor>> {
        self.actor_repo.find_all().await
    }

    pub async fn get_actor(&self, id: i32) -> AppResult<Actor> {
        self.actor_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| actor_not_found(id))
    }

    pub async fn search_actors(&self, term: &str) -> AppResult<Vec<Actor>> {
        if unmatchable(term) {
            return Ok(Vec::new());
        }
        LogContext::search_operation(term, "actors", None);
        let actors = self.actor_repo.search_by_name(term).await?;
        LogContext::search_operation(term, "actors", Some(actors.len()));
        Ok(actors)
    }

    /// Empty when the actor does not exist.
    pub async fn get_movies_of_actor(&self, actor_id: i32) -> AppResult<Vec<MovieSummary>> {
        Ok(self
            .actor_repo
            .find_movies(actor_id)
            .await?
            .unwrap_or_default())
    }

    pub async fn create_actor(&self, name: &str) -> AppResult<Actor> {
        let actor = self.actor_repo.create(name).await?;
        log_info!("Created actor {} '{}'", actor.id, actor.name);
        Ok(actor)
    }

    pub async fn update_actor(&self, id: i32, name: &str) -> AppResult<Actor> {
        let actor = self
            .actor_repo
            .update(id, name)
            .await?
            .ok_or_else(|| actor_not_found(id))?;
        log_info!("Renamed actor {} to '{}'", actor.id, actor.name);
        Ok(actor)
    }

    pub async fn delete_actor(&self, id: i32) -> AppResult<Deletion> {
        let affected = self.actor_repo.delete(id).await?;
        if affected != 1 {
            return Err(actor_not_found(id));
        }
        log_info!("Deleted actor {}", id);
        Ok(Deletion::confirmed())
    }

    // --- RATINGS ---

    /// Unlike `get_actors_of_movie`, a missing movie is `NotFound` here.
    pub async fn get_ratings_of_movie(&self, movie_id: i32) -> AppResult<Vec<Rating>> {
        self.movie_repo
            .find_ratings(movie_id)
            .await?
            .ok_or_else(|| movie_not_found(movie_id))
    }

    pub async fn add_rating(&self, movie_id: i32, draft: RatingDraft) -> AppResult<Rating> {
        if !self.movie_repo.exists(movie_id).await? {
            return Err(movie_not_found(movie_id));
        }

        let rating = self.rating_repo.create(movie_id, &draft).await?;
        log_info!(
            "Added rating {} ({} by '{}') to movie {}",
            rating.id,
            rating.value,
            rating.user_name,
            movie_id
        );
        Ok(rating)
    }

    pub async fn list_all_ratings(&self) -> AppResult<Vec<Rating>> {
        self.rating_repo.find_all().await
    }

    pub async fn get_rating(&self, id: i32) -> AppResult<Rating> {
        self.rating_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| rating_not_found(id))
    }

    pub async fn update_rating(&self, id: i32, patch: RatingPatch) -> AppResult<Rating> {
        if patch.is_empty() {
            log_debug!("Empty patch for rating {}, nothing to update", id);
            return self.get_rating(id).await;
        }

        let rating = self
            .rating_repo
            .update(id, &patch)
            .await?
            .ok_or_else(|| rating_not_found(id))?;
        log_info!("Updated rating {}", id);
        Ok(rating)
    }

    /// Idempotent: deleting an unknown rating is not an error.
    pub async fn delete_rating(&self, id: i32) -> AppResult<Deletion> {
        let affected = self.rating_repo.delete(id).await?;
        if affected == 0 {
            log_debug!("Rating {} did not exist, nothing deleted", id);
        } else {
            log_info!("Deleted rating {}", id);
        }
        Ok(Deletion::confirmed())
    }

    async fn resolve_actor_ids(&self, draft: &MovieDraft) -> AppResult<Vec<i32>> {
        let candidates = self.id_resolution.candidates(&draft.actors);
        if candidates.is_empty() {
            return Ok(candidates);
        }

        let existing = self.actor_repo.find_existing_ids(&candidates).await?;
        let resolved = self.id_resolution.retain_existing(candidates, &existing);

        let dropped = draft.actors.len() - resolved.len();
        if dropped > 0 {
            log_warn!(
                "Ignoring {} duplicate or unresolvable actor reference(s) for movie '{}'",
                dropped,
                draft.title
            );
        }
        Ok(resolved)
    }
}

/// Stored text never contains NUL, and Postgres rejects it in parameters.
fn unmatchable(term: &str) -> bool {
    term.contains('\0')
}

fn movie_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Movie with ID {} not found", id))
}

fn actor_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Actor with ID {} not found", id))
}

fn rating_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Rating with ID {} not found", id))
}
