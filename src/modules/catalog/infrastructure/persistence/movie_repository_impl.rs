use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use std::sync::Arc;

use super::{contains_pattern, mapper, with_connection};
use crate::log_debug;
use crate::modules::catalog::domain::{ActorSummary, Movie, MovieRepository, Rating};
use crate::modules::catalog::infrastructure::models::{
    ActorModel, MovieActor, MovieChangeset, MovieModel, NewMovie, RatingModel,
};
use crate::schema::{actors, movie_actors, movies, ratings};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::Database;

pub struct MovieRepositoryImpl {
    db: Arc<Database>,
}

impl MovieRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Attach cast and ratings to a batch of movie rows with two queries.
    fn load_with_relations(
        conn: &mut PgConnection,
        models: Vec<MovieModel>,
    ) -> AppResult<Vec<Movie>> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let cast_rows: Vec<(MovieActor, ActorModel)> = MovieActor::belonging_to(&models)
            .inner_join(actors::table)
            .select((movie_actors::all_columns, actors::all_columns))
            .order(actors::id.asc())
            .load::<(MovieActor, ActorModel)>(conn)?;
        let cast_grouped = cast_rows.grouped_by(&models);

        let rating_rows: Vec<RatingModel> = RatingModel::belonging_to(&models)
            .order(ratings::id.asc())
            .load::<RatingModel>(conn)?;
        let ratings_grouped = rating_rows.grouped_by(&models);

        let movies = models
            .into_iter()
            .zip(cast_grouped)
            .zip(ratings_grouped)
            .map(|((model, cast), ratings)| {
                let cast = cast.into_iter().map(|(_, actor)| actor).collect();
                mapper::movie_to_entity(model, cast, ratings)
            })
            .collect();

        Ok(movies)
    }

    fn load_one(conn: &mut PgConnection, model: MovieModel) -> AppResult<Movie> {
        let id = model.id;
        Self::load_with_relations(conn, vec![model])?
            .pop()
            .ok_or_else(|| {
                AppError::InternalError(format!("Movie {} lost its row while loading", id))
            })
    }

    fn movie_exists(conn: &mut PgConnection, id: i32) -> AppResult<bool> {
        let exists = diesel::select(diesel::dsl::exists(movies::table.find(id)))
            .get_result::<bool>(conn)?;
        Ok(exists)
    }

    fn replace_cast(conn: &mut PgConnection, movie_id: i32, actor_ids: &[i32]) -> AppResult<()> {
        diesel::delete(movie_actors::table.filter(movie_actors::movie_id.eq(movie_id)))
            .execute(conn)?;

        if actor_ids.is_empty() {
            return Ok(());
        }

        let links: Vec<MovieActor> = actor_ids
            .iter()
            .map(|&actor_id| MovieActor { movie_id, actor_id })
            .collect();
        diesel::insert_into(movie_actors::table)
            .values(&links)
            .on_conflict_do_nothing()
            .execute(conn)?;
        Ok(())
    }
}

#[async_trait]
impl MovieRepository for MovieRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Movie>> {
        with_connection(&self.db, "find all movies", |conn| {
            let models = movies::table
                .order(movies::id.asc())
                .load::<MovieModel>(conn)?;
            Self::load_with_relations(conn, models)
        })
        .await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Movie>> {
        with_connection(&self.db, "find movie by id", move |conn| {
            let model = movies::table
                .find(id)
                .first::<MovieModel>(conn)
                .optional()?;
            model.map(|m| Self::load_one(conn, m)).transpose()
        })
        .await
    }

    async fn search_by_title(&self, term: &str) -> AppResult<Vec<Movie>> {
        let pattern = contains_pattern(term);
        with_connection(&self.db, "search movies by title", move |conn| {
            let models = movies::table
                .filter(movies::title.ilike(pattern))
                .order(movies::id.asc())
                .load::<MovieModel>(conn)?;
            Self::load_with_relations(conn, models)
        })
        .await
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        with_connection(&self.db, "check movie exists", move |conn| {
            Self::movie_exists(conn, id)
        })
        .await
    }

    async fn find_actors(&self, movie_id: i32) -> AppResult<Option<Vec<ActorSummary>>> {
        with_connection(&self.db, "find actors of movie", move |conn| {
            if !Self::movie_exists(conn, movie_id)? {
                return Ok(None);
            }
            let cast = movie_actors::table
                .inner_join(actors::table)
                .filter(movie_actors::movie_id.eq(movie_id))
                .select(actors::all_columns)
                .order(actors::id.asc())
                .load::<ActorModel>(conn)?;
            Ok(Some(cast.into_iter().map(mapper::actor_summary).collect()))
        })
        .await
    }

    async fn find_ratings(&self, movie_id: i32) -> AppResult<Option<Vec<Rating>>> {
        with_connection(&self.db, "find ratings of movie", move |conn| {
            if !Self::movie_exists(conn, movie_id)? {
                return Ok(None);
            }
            let rows = ratings::table
                .filter(ratings::movie_id.eq(movie_id))
                .order(ratings::id.asc())
                .load::<RatingModel>(conn)?;
            Ok(Some(
                rows.into_iter()
                    .map(|r| mapper::rating_to_entity(r, None))
                    .collect(),
            ))
        })
        .await
    }

    async fn create(
        &self,
        title: &str,
        description: &str,
        ratings: f64,
        actor_ids: &[i32],
    ) -> AppResult<Movie> {
        let title = title.to_string();
        let description = description.to_string();
        let actor_ids = actor_ids.to_vec();

        with_connection(&self.db, "create movie", move |conn| {
            conn.transaction::<Movie, AppError, _>(|conn| {
                let model = diesel::insert_into(movies::table)
                    .values(&NewMovie {
                        title: &title,
                        description: &description,
                        ratings,
                    })
                    .get_result::<MovieModel>(conn)?;

                Self::replace_cast(conn, model.id, &actor_ids)?;
                log_debug!("Inserted movie {} with {} cast link(s)", model.id, actor_ids.len());

                Self::load_one(conn, model)
            })
        })
        .await
    }

    async fn update(
        &self,
        id: i32,
        title: &str,
        description: &str,
        ratings: f64,
        actor_ids: &[i32],
    ) -> AppResult<Movie> {
        let title = title.to_string();
        let description = description.to_string();
        let actor_ids = actor_ids.to_vec();

        with_connection(&self.db, "update movie", move |conn| {
            conn.transaction::<Movie, AppError, _>(|conn| {
                let model = diesel::update(movies::table.find(id))
                    .set(&MovieChangeset {
                        title: &title,
                        description: &description,
                        ratings,
                    })
                    .get_result::<MovieModel>(conn)
                    .optional()?
                    .ok_or_else(|| AppError::NotFound(format!("Movie with ID {} not found", id)))?;

                Self::replace_cast(conn, id, &actor_ids)?;

                Self::load_one(conn, model)
            })
        })
        .await
    }

    async fn delete_with_ratings(&self, id: i32) -> AppResult<bool> {
        with_connection(&self.db, "delete movie", move |conn| {
            conn.transaction::<bool, AppError, _>(|conn| {
                let removed_ratings =
                    diesel::delete(ratings::table.filter(ratings::movie_id.eq(id))).execute(conn)?;
                diesel::delete(movie_actors::table.filter(movie_actors::movie_id.eq(id)))
                    .execute(conn)?;
                let removed = diesel::delete(movies::table.find(id)).execute(conn)?;

                log_debug!(
                    "Movie {} delete removed {} row(s) and {} rating(s)",
                    id,
                    removed,
                    removed_ratings
                );
                Ok(removed > 0)
            })
        })
        .await
    }
}
