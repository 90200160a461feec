pub mod actor;
pub mod movie;
pub mod rating;

pub use actor::{Actor, ActorSummary};
pub use movie::{Movie, MovieDraft, MovieSummary};
pub use rating::{Rating, RatingDraft, RatingPatch};
