pub mod actor_repository;
pub mod movie_repository;
pub mod rating_repository;

pub use actor_repository::ActorRepository;
pub use movie_repository::MovieRepository;
pub use rating_repository::RatingRepository;

#[cfg(test)]
pub use actor_repository::MockActorRepository;
#[cfg(test)]
pub use movie_repository::MockMovieRepository;
#[cfg(test)]
pub use rating_repository::MockRatingRepository;
