/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use movie_catalog_lib::modules::catalog::domain::{ActorRef, MovieDraft, RatingDraft};

pub struct MovieFactory {
    title: String,
    description: String,
    ratings: f64,
    actors: Vec<ActorRef>,
}

impl Default for MovieFactory {
    fn default() -> Self {
        Self {
            title: format!("Test Movie {}", rand::random::<u32>() % 1_000_000),
            description: "A test movie".to_string(),
            ratings: 7.0,
            actors: Vec::new(),
        }
    }
}

impl MovieFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn ratings(mut self, ratings: f64) -> Self {
        self.ratings = ratings;
        self
    }

    pub fn actor(mut self, actor: impl Into<ActorRef>) -> Self {
        self.actors.push(actor.into());
        self
    }

    pub fn build(self) -> MovieDraft {
        MovieDraft {
            title: self.title,
            description: self.description,
            ratings: self.ratings,
            actors: self.actors,
        }
    }
}

pub fn rating(value: f64, user_name: &str) -> RatingDraft {
    RatingDraft {
        value,
        user_name: user_name.to_string(),
    }
}
