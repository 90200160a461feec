use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::api::extract::{IdPath, ValidatedJson};
use crate::api::AppState;
use crate::modules::catalog::application::{
    ActorRequest, Deletion, MovieRequest, RatingPatchRequest, RatingRequest, SearchQuery,
};
use crate::modules::catalog::domain::{Actor, ActorSummary, Movie, MovieSummary, Rating};
use crate::shared::errors::{AppError, AppResult};

// ============= MOVIES =============

pub async fn list_movies(State(state): State<AppState>) -> AppResult<Json<Vec<Movie>>> {
    Ok(Json(state.catalog.list_movies().await?))
}

pub async fn search_movies(
    State(state): State<AppState>,
    Query(search): Query<SearchQuery>,
) -> AppResult<Json<Vec<Movie>>> {
    Ok(Json(state.catalog.search_movies(&search.query).await?))
}

pub async fn get_movie(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Movie>> {
    Ok(Json(state.catalog.get_movie(id).await?))
}

pub async fn get_movie_actors(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Vec<ActorSummary>>> {
    Ok(Json(state.catalog.get_actors_of_movie(id).await?))
}

pub async fn get_movie_ratings(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Vec<Rating>>> {
    Ok(Json(state.catalog.get_ratings_of_movie(id).await?))
}

pub async fn create_movie(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<MovieRequest>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    let movie = state
        .catalog
        .create_movie(payload.into())
        .await
        .map_err(AppError::into_bad_request)?;
    Ok((StatusCode::CREATED, Json(movie)))
}

pub async fn update_movie(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(payload): ValidatedJson<MovieRequest>,
) -> AppResult<Json<Movie>> {
    let movie = state
        .catalog
        .update_movie(id, payload.into())
        .await
        .map_err(AppError::into_bad_request)?;
    Ok(Json(movie))
}

pub async fn delete_movie(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Deletion>> {
    Ok(Json(state.catalog.delete_movie(id).await?))
}

// ============= RATINGS =============

pub async fn list_ratings(State(state): State<AppState>) -> AppResult<Json<Vec<Rating>>> {
    Ok(Json(state.catalog.list_all_ratings().await?))
}

pub async fn get_rating(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Rating>> {
    Ok(Json(state.catalog.get_rating(id).await?))
}

pub async fn add_rating(
    State(state): State<AppState>,
    IdPath(movie_id): IdPath,
    ValidatedJson(payload): ValidatedJson<RatingRequest>,
) -> AppResult<(StatusCode, Json<Rating>)> {
    let rating = state
        .catalog
        .add_rating(movie_id, payload.into())
        .await
        .map_err(AppError::into_bad_request)?;
    Ok((StatusCode::CREATED, Json(rating)))
}

pub async fn update_rating(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(payload): ValidatedJson<RatingPatchRequest>,
) -> AppResult<Json<Rating>> {
    let rating = state
        .catalog
        .update_rating(id, payload.into())
        .await
        .map_err(AppError::into_bad_request)?;
    Ok(Json(rating))
}

pub async fn delete_rating(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Deletion>> {
    Ok(Json(state.catalog.delete_rating(id).await?))
}

// ============= ACTORS =============

pub async fn list_actors(State(state): State<AppState>) -> AppResult<Json<Vec<Actor>>> {
    Ok(Json(state.catalog.list_actors().await?))
}

pub async fn search_actors(
    State(state): State<AppState>,
    Query(search): Query<SearchQuery>,
) -> AppResult<Json<Vec<Actor>>> {
    Ok(Json(state.catalog.search_actors(&search.query).await?))
}

pub async fn get_actor(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Actor>> {
    Ok(Json(state.catalog.get_actor(id).await?))
}

pub async fn get_actor_movies(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Vec<MovieSummary>>> {
    Ok(Json(state.catalog.get_movies_of_actor(id).await?))
}

pub async fn create_actor(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ActorRequest>,
) -> AppResult<(StatusCode, Json<Actor>)> {
    let actor = state
        .catalog
        .create_actor(&payload.name)
        .await
        .map_err(AppError::into_bad_request)?;
    Ok((StatusCode::CREATED, Json(actor)))
}

pub async fn update_actor(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(payload): ValidatedJson<ActorRequest>,
) -> AppResult<Json<Actor>> {
    let actor = state
        .catalog
        .update_actor(id, &payload.name)
        .await
        .map_err(AppError::into_bad_request)?;
    Ok(Json(actor))
}

pub async fn delete_actor(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Deletion>> {
    Ok(Json(state.catalog.delete_actor(id).await?))
}
