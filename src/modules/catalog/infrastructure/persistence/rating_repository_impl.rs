use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use super::{mapper, with_connection};
use crate::modules::catalog::domain::{Rating, RatingDraft, RatingPatch, RatingRepository};
use crate::modules::catalog::infrastructure::models::{MovieModel, NewRating, RatingModel};
use crate::schema::{movies, ratings};
use crate::shared::errors::AppResult;
use crate::shared::Database;

pub struct RatingRepositoryImpl {
    db: Arc<Database>,
}

impl RatingRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RatingRepository for RatingRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Rating>> {
        with_connection(&self.db, "find all ratings", |conn| {
            let rows = ratings::table
                .inner_join(movies::table)
                .select((ratings::all_columns, movies::all_columns))
                .order(ratings::id.asc())
                .load::<(RatingModel, MovieModel)>(conn)?;
            Ok(rows
                .into_iter()
                .map(|(rating, movie)| mapper::rating_to_entity(rating, Some(movie)))
                .collect())
        })
        .await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Rating>> {
        with_connection(&self.db, "find rating by id", move |conn| {
            let row = ratings::table
                .inner_join(movies::table)
                .filter(ratings::id.eq(id))
                .select((ratings::all_columns, movies::all_columns))
                .first::<(RatingModel, MovieModel)>(conn)
                .optional()?;
            Ok(row.map(|(rating, movie)| mapper::rating_to_entity(rating, Some(movie))))
        })
        .await
    }

    async fn create(&self, movie_id: i32, draft: &RatingDraft) -> AppResult<Rating> {
        let draft = draft.clone();
        with_connection(&self.db, "create rating", move |conn| {
            let rating = diesel::insert_into(ratings::table)
                .values(&NewRating {
                    value: draft.value,
                    user_name: &draft.user_name,
                    movie_id,
                })
                .get_result::<RatingModel>(conn)?;
            let movie = movies::table
                .find(movie_id)
                .first::<MovieModel>(conn)
                .optional()?;
            Ok(mapper::rating_to_entity(rating, movie))
        })
        .await
    }

    async fn update(&self, id: i32, patch: &RatingPatch) -> AppResult<Option<Rating>> {
        let changeset = mapper::patch_to_changeset(patch);
        with_connection(&self.db, "update rating", move |conn| {
            let Some(rating) = diesel::update(ratings::table.find(id))
                .set(&changeset)
                .get_result::<RatingModel>(conn)
                .optional()?
            else {
                return Ok(None);
            };
            let movie = movies::table
                .find(rating.movie_id)
                .first::<MovieModel>(conn)
                .optional()?;
            Ok(Some(mapper::rating_to_entity(rating, movie)))
        })
        .await
    }

    async fn delete(&self, id: i32) -> AppResult<usize> {
        with_connection(&self.db, "delete rating", move |conn| {
            let removed = diesel::delete(ratings::table.find(id)).execute(conn)?;
            Ok(removed)
        })
        .await
    }
}
