use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use std::sync::Arc;

use super::{contains_pattern, mapper, with_connection};
use crate::modules::catalog::domain::{Actor, ActorRepository, MovieSummary};
use crate::modules::catalog::infrastructure::models::{
    ActorModel, MovieActor, MovieModel, NewActor,
};
use crate::schema::{actors, movie_actors, movies};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::Database;

pub struct ActorRepositoryImpl {
    db: Arc<Database>,
}

impl ActorRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn load_with_movies(conn: &mut PgConnection, models: Vec<ActorModel>) -> AppResult<Vec<Actor>> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let rows: Vec<(MovieActor, MovieModel)> = MovieActor::belonging_to(&models)
            .inner_join(movies::table)
            .select((movie_actors::all_columns, movies::all_columns))
            .order(movies::id.asc())
            .load::<(MovieActor, MovieModel)>(conn)?;
        let grouped = rows.grouped_by(&models);

        Ok(models
            .into_iter()
            .zip(grouped)
            .map(|(model, pairs)| {
                let movies = pairs.into_iter().map(|(_, movie)| movie).collect();
                mapper::actor_to_entity(model, movies)
            })
            .collect())
    }

    fn load_one(conn: &mut PgConnection, model: ActorModel) -> AppResult<Actor> {
        let id = model.id;
        Self::load_with_movies(conn, vec![model])?
            .pop()
            .ok_or_else(|| {
                AppError::InternalError(format!("Actor {} lost its row while loading", id))
            })
    }
}

#[async_trait]
impl ActorRepository for ActorRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Actor>> {
        with_connection(&self.db, "find all actors", |conn| {
            let models = actors::table
                .order(actors::id.asc())
                .load::<ActorModel>(conn)?;
            Self::load_with_movies(conn, models)
        })
        .await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Actor>> {
        with_connection(&self.db, "find actor by id", move |conn| {
            let model = actors::table
                .find(id)
                .first::<ActorModel>(conn)
                .optional()?;
            model.map(|m| Self::load_one(conn, m)).transpose()
        })
        .await
    }

    async fn search_by_name(&self, term: &str) -> AppResult<Vec<Actor>> {
        let pattern = contains_pattern(term);
        with_connection(&self.db, "search actors by name", move |conn| {
            let models = actors::table
                .filter(actors::name.ilike(pattern))
                .order(actors::id.asc())
                .load::<ActorModel>(conn)?;
            Self::load_with_movies(conn, models)
        })
        .await
    }

    async fn find_existing_ids(&self, ids: &[i32]) -> AppResult<Vec<i32>> {
        let ids = ids.to_vec();
        with_connection(&self.db, "resolve actor ids", move |conn| {
            let found = actors::table
                .filter(actors::id.eq_any(ids))
                .select(actors::id)
                .load::<i32>(conn)?;
            Ok(found)
        })
        .await
    }

    async fn find_movies(&self, actor_id: i32) -> AppResult<Option<Vec<MovieSummary>>> {
        with_connection(&self.db, "find movies of actor", move |conn| {
            let exists = diesel::select(diesel::dsl::exists(actors::table.find(actor_id)))
                .get_result::<bool>(conn)?;
            if !exists {
                return Ok(None);
            }

            let rows = movie_actors::table
                .inner_join(movies::table)
                .filter(movie_actors::actor_id.eq(actor_id))
                .select(movies::all_columns)
                .order(movies::id.asc())
                .load::<MovieModel>(conn)?;
            Ok(Some(rows.into_iter().map(mapper::movie_summary).collect()))
        })
        .await
    }

    async fn create(&self, name: &str) -> AppResult<Actor> {
        let name = name.to_string();
        with_connection(&self.db, "create actor", move |conn| {
            let model = diesel::insert_into(actors::table)
                .values(&NewActor { name: &name })
                .get_result::<ActorModel>(conn)?;
            Ok(mapper::actor_to_entity(model, Vec::new()))
        })
        .await
    }

    async fn update(&self, id: i32, name: &str) -> AppResult<Option<Actor>> {
        let name = name.to_string();
        with_connection(&self.db, "update actor", move |conn| {
            let model = diesel::update(actors::table.find(id))
                .set(actors::name.eq(&name))
                .get_result::<ActorModel>(conn)
                .optional()?;
            model.map(|m| Self::load_one(conn, m)).transpose()
        })
        .await
    }

    async fn delete(&self, id: i32) -> AppResult<usize> {
        // Cast links cascade with the actor row
        with_connection(&self.db, "delete actor", move |conn| {
            let removed = diesel::delete(actors::table.find(id)).execute(conn)?;
            Ok(removed)
        })
        .await
    }
}
