pub mod dto;
pub mod seed;
pub mod service;

pub use dto::{
    ActorRequest, MovieRequest, RatingPatchRequest, RatingRequest, SearchQuery, Validate,
};
pub use seed::{seed_catalog, SeedReport};
pub use service::{CatalogService, Deletion};
