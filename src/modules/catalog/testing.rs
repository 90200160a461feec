//! In-memory repositories backing service and router tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::modules::catalog::domain::{
    Actor, ActorRepository, ActorSummary, Movie, MovieRepository, MovieSummary, Rating,
    RatingDraft, RatingPatch, RatingRepository,
};
use crate::shared::errors::{AppError, AppResult};

#[derive(Default)]
struct State {
    movies: BTreeMap<i32, MovieSummary>,
    actors: BTreeMap<i32, String>,
    links: Vec<(i32, i32)>,
    ratings: BTreeMap<i32, Rating>,
    next_id: i32,
}

impl State {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn cast_of(&self, movie_id: i32) -> Vec<ActorSummary> {
        self.actors
            .iter()
            .filter(|(actor_id, _)| self.links.contains(&(movie_id, **actor_id)))
            .map(|(id, name)| ActorSummary {
                id: *id,
                name: name.clone(),
            })
            .collect()
    }

    fn ratings_of(&self, movie_id: i32) -> Vec<Rating> {
        self.ratings
            .values()
            .filter(|r| r.movie_id == movie_id)
            .cloned()
            .collect()
    }

    fn movie(&self, id: i32) -> Option<Movie> {
        let summary = self.movies.get(&id)?.clone();
        Some(Movie::new(summary, self.cast_of(id), self.ratings_of(id)))
    }

    fn actor(&self, id: i32) -> Option<Actor> {
        let name = self.actors.get(&id)?.clone();
        let movies = self
            .movies
            .values()
            .filter(|m| self.links.contains(&(m.id, id)))
            .cloned()
            .collect();
        Some(Actor { id, name, movies })
    }

    fn rating_with_movie(&self, rating: &Rating) -> Rating {
        Rating {
            movie: self.movies.get(&rating.movie_id).cloned(),
            ..rating.clone()
        }
    }

    fn link(&mut self, movie_id: i32, actor_ids: &[i32]) -> AppResult<()> {
        self.links.retain(|(m, _)| *m != movie_id);
        for actor_id in actor_ids {
            if !self.actors.contains_key(actor_id) {
                return Err(AppError::DatabaseError(format!(
                    "foreign key violation: actor {}",
                    actor_id
                )));
            }
            self.links.push((movie_id, *actor_id));
        }
        Ok(())
    }
}

/// One shared store implementing all three repository ports.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    state: Arc<Mutex<State>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rating_count(&self) -> usize {
        self.state.lock().unwrap().ratings.len()
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[async_trait]
impl MovieRepository for InMemoryCatalog {
    async fn find_all(&self) -> AppResult<Vec<Movie>> {
        let state = self.state.lock().unwrap();
        Ok(state.movies.keys().filter_map(|id| state.movie(*id)).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Movie>> {
        Ok(self.state.lock().unwrap().movie(id))
    }

    async fn search_by_title(&self, term: &str) -> AppResult<Vec<Movie>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .movies
            .values()
            .filter(|m| contains_ignore_case(&m.title, term))
            .filter_map(|m| state.movie(m.id))
            .collect())
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        Ok(self.state.lock().unwrap().movies.contains_key(&id))
    }

    async fn find_actors(&self, movie_id: i32) -> AppResult<Option<Vec<ActorSummary>>> {
        let state = self.state.lock().unwrap();
        Ok(state.movie(movie_id).map(|m| m.actors))
    }

    async fn find_ratings(&self, movie_id: i32) -> AppResult<Option<Vec<Rating>>> {
        let state = self.state.lock().unwrap();
        Ok(state.movie(movie_id).map(|m| m.ratings_list))
    }

    async fn create(
        &self,
        title: &str,
        description: &str,
        ratings: f64,
        actor_ids: &[i32],
    ) -> AppResult<Movie> {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        state.link(id, actor_ids)?;
        state.movies.insert(
            id,
            MovieSummary {
                id,
                title: title.to_string(),
                description: description.to_string(),
                ratings,
            },
        );
        state
            .movie(id)
            .ok_or_else(|| AppError::InternalError("movie vanished".into()))
    }

    async fn update(
        &self,
        id: i32,
        title: &str,
        description: &str,
        ratings: f64,
        actor_ids: &[i32],
    ) -> AppResult<Movie> {
        let mut state = self.state.lock().unwrap();
        if !state.movies.contains_key(&id) {
            return Err(AppError::NotFound(format!("Movie with ID {} not found", id)));
        }
        state.link(id, actor_ids)?;
        state.movies.insert(
            id,
            MovieSummary {
                id,
                title: title.to_string(),
                description: description.to_string(),
                ratings,
            },
        );
        state
            .movie(id)
            .ok_or_else(|| AppError::InternalError("movie vanished".into()))
    }

    async fn delete_with_ratings(&self, id: i32) -> AppResult<bool> {
        let mut state = self.state.lock().unwrap();
        state.ratings.retain(|_, r| r.movie_id != id);
        state.links.retain(|(m, _)| *m != id);
        Ok(state.movies.remove(&id).is_some())
    }
}

#[async_trait]
impl ActorRepository for InMemoryCatalog {
    async fn find_all(&self) -> AppResult<Vec<Actor>> {
        let state = self.state.lock().unwrap();
        Ok(state.actors.keys().filter_map(|id| state.actor(*id)).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Actor>> {
        Ok(self.state.lock().unwrap().actor(id))
    }

    async fn search_by_name(&self, term: &str) -> AppResult<Vec<Actor>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .actors
            .iter()
            .filter(|(_, name)| contains_ignore_case(name, term))
            .filter_map(|(id, _)| state.actor(*id))
            .collect())
    }

    async fn find_existing_ids(&self, ids: &[i32]) -> AppResult<Vec<i32>> {
        let state = self.state.lock().unwrap();
        Ok(ids
            .iter()
            .copied()
            .filter(|id| state.actors.contains_key(id))
            .collect())
    }

    async fn find_movies(&self, actor_id: i32) -> AppResult<Option<Vec<MovieSummary>>> {
        let state = self.state.lock().unwrap();
        Ok(state.actor(actor_id).map(|a| a.movies))
    }

    async fn create(&self, name: &str) -> AppResult<Actor> {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        state.actors.insert(id, name.to_string());
        Ok(Actor {
            id,
            name: name.to_string(),
            movies: vec![],
        })
    }

    async fn update(&self, id: i32, name: &str) -> AppResult<Option<Actor>> {
        let mut state = self.state.lock().unwrap();
        match state.actors.get_mut(&id) {
            Some(existing) => *existing = name.to_string(),
            None => return Ok(None),
        }
        Ok(state.actor(id))
    }

    async fn delete(&self, id: i32) -> AppResult<usize> {
        let mut state = self.state.lock().unwrap();
        state.links.retain(|(_, a)| *a != id);
        Ok(usize::from(state.actors.remove(&id).is_some()))
    }
}

#[async_trait]
impl RatingRepository for InMemoryCatalog {
    async fn find_all(&self) -> AppResult<Vec<Rating>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .ratings
            .values()
            .map(|r| state.rating_with_movie(r))
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Rating>> {
        let state = self.state.lock().unwrap();
        Ok(state.ratings.get(&id).map(|r| state.rating_with_movie(r)))
    }

    async fn create(&self, movie_id: i32, draft: &RatingDraft) -> AppResult<Rating> {
        let mut state = self.state.lock().unwrap();
        if !state.movies.contains_key(&movie_id) {
            return Err(AppError::DatabaseError(format!(
                "foreign key violation: movie {}",
                movie_id
            )));
        }
        let id = state.next_id();
        let rating = Rating {
            id,
            value: draft.value,
            user_name: draft.user_name.clone(),
            movie_id,
            movie: None,
        };
        state.ratings.insert(id, rating.clone());
        Ok(state.rating_with_movie(&rating))
    }

    async fn update(&self, id: i32, patch: &RatingPatch) -> AppResult<Option<Rating>> {
        let mut state = self.state.lock().unwrap();
        let Some(rating) = state.ratings.get_mut(&id) else {
            return Ok(None);
        };
        patch.apply_to(rating);
        let rating = rating.clone();
        Ok(Some(state.rating_with_movie(&rating)))
    }

    async fn delete(&self, id: i32) -> AppResult<usize> {
        let mut state = self.state.lock().unwrap();
        Ok(usize::from(state.ratings.remove(&id).is_some()))
    }
}
