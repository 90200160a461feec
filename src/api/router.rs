use axum::{
    middleware,
    routing::{get, patch, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api::AppState;
use crate::modules::access::require_bearer;
use crate::modules::catalog::handlers;

pub fn create_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/movies", get(handlers::list_movies))
        .route("/movies/search", get(handlers::search_movies))
        .route("/movies/ratings", get(handlers::list_ratings))
        .route("/movies/ratings/{rating_id}", get(handlers::get_rating))
        .route("/movies/{id}", get(handlers::get_movie))
        .route("/movies/{id}/actors", get(handlers::get_movie_actors))
        .route("/movies/{id}/ratings", get(handlers::get_movie_ratings))
        .route("/actors", get(handlers::list_actors))
        .route("/actors/search", get(handlers::search_actors))
        .route("/actors/{id}", get(handlers::get_actor))
        .route("/actors/{id}/movies", get(handlers::get_actor_movies));

    let protected = Router::new()
        .route("/movies", post(handlers::create_movie))
        .route(
            "/movies/{id}",
            put(handlers::update_movie).delete(handlers::delete_movie),
        )
        .route("/movies/{id}/ratings", post(handlers::add_rating))
        .route(
            "/movies/ratings/{rating_id}",
            patch(handlers::update_rating).delete(handlers::delete_rating),
        )
        .route("/actors", post(handlers::create_actor))
        .route(
            "/actors/{id}",
            put(handlers::update_actor).delete(handlers::delete_actor),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer,
        ));

    Router::new()
        .route("/health", get(health))
        .merge(public)
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
