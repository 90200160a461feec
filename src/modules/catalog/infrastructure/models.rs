use crate::schema::{actors, movie_actors, movies, ratings};
use diesel::prelude::*;

// ============= MOVIE MODELS =============

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = movies)]
pub struct MovieModel {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub ratings: f64,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = movies)]
pub struct NewMovie<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub ratings: f64,
}

// Full replace of the scalar fields (excludes id)
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = movies)]
pub struct MovieChangeset<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub ratings: f64,
}

// ============= ACTOR MODELS =============

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = actors)]
pub struct ActorModel {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = actors)]
pub struct NewActor<'a> {
    pub name: &'a str,
}

// ============= MOVIE-ACTOR ASSOCIATION =============

#[derive(Queryable, Identifiable, Associations, Insertable, Debug, Clone, PartialEq)]
#[diesel(belongs_to(MovieModel, foreign_key = movie_id))]
#[diesel(belongs_to(ActorModel, foreign_key = actor_id))]
#[diesel(table_name = movie_actors)]
#[diesel(primary_key(movie_id, actor_id))]
pub struct MovieActor {
    pub movie_id: i32,
    pub actor_id: i32,
}

// ============= RATING MODELS =============

#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone, PartialEq)]
#[diesel(belongs_to(MovieModel, foreign_key = movie_id))]
#[diesel(table_name = ratings)]
pub struct RatingModel {
    pub id: i32,
    pub value: f64,
    pub user_name: String,
    pub movie_id: i32,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = ratings)]
pub struct NewRating<'a> {
    pub value: f64,
    pub user_name: &'a str,
    pub movie_id: i32,
}

// `None` fields are skipped; an all-`None` changeset is rejected by diesel,
// so callers must short-circuit empty patches.
#[derive(AsChangeset, Debug, Clone, Default)]
#[diesel(table_name = ratings)]
pub struct RatingChangeset {
    pub value: Option<f64>,
    pub user_name: Option<String>,
}
