// Catalog bounded context: movies, actors and ratings

pub mod application;
pub mod domain;
pub mod handlers;
pub mod infrastructure;

#[cfg(test)]
pub mod testing;

use std::sync::Arc;

use crate::shared::Database;
use application::CatalogService;
use infrastructure::{ActorRepositoryImpl, MovieRepositoryImpl, RatingRepositoryImpl};

/// Wire the service to the Postgres-backed repositories.
pub fn build_service(db: Arc<Database>) -> CatalogService {
    CatalogService::new(
        Arc::new(MovieRepositoryImpl::new(Arc::clone(&db))),
        Arc::new(ActorRepositoryImpl::new(Arc::clone(&db))),
        Arc::new(RatingRepositoryImpl::new(db)),
    )
}
