pub mod entities;
pub mod repositories;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{
    Actor, ActorSummary, Movie, MovieDraft, MovieSummary, Rating, RatingDraft, RatingPatch,
};
pub use repositories::{ActorRepository, MovieRepository, RatingRepository};
pub use value_objects::{ActorRef, IdResolution};

#[cfg(test)]
pub use repositories::{MockActorRepository, MockMovieRepository, MockRatingRepository};
