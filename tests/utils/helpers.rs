/// Test helper functions and service builders
use axum::Router;
use movie_catalog_lib::api::{create_router, AppState};
use movie_catalog_lib::modules::access::SharedSecretAuthorizer;
use movie_catalog_lib::modules::catalog::{application::CatalogService, build_service};
use movie_catalog_lib::shared::Database;
use std::sync::Arc;

pub const TEST_SECRET: &str = "integration-secret";

pub fn build_catalog(db: Arc<Database>) -> CatalogService {
    build_service(db)
}

/// Full HTTP application over the given database, gated by `TEST_SECRET`
pub fn build_app(db: Arc<Database>) -> Router {
    create_router(AppState::new(
        build_service(db),
        SharedSecretAuthorizer::new(TEST_SECRET),
    ))
}
