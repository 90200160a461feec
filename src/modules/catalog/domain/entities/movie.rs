use serde::{Deserialize, Serialize};

use super::actor::ActorSummary;
use super::rating::Rating;
use crate::modules::catalog::domain::value_objects::ActorRef;

/// A movie with its cast and ratings populated.
///
/// `ratings` is the editorial summary score set by whoever edits the movie.
/// It is never derived from `ratings_list`; `average_rating` is the value
/// computed from the individual ratings at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub ratings: f64,
    pub actors: Vec<ActorSummary>,
    pub ratings_list: Vec<Rating>,
    #[serde(default)]
    pub average_rating: Option<f64>,
}

/// Movie fields without relations, used on the inverse side of joins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieSummary {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub ratings: f64,
}

/// Full-field input for creating or replacing a movie.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDraft {
    pub title: String,
    pub description: String,
    pub ratings: f64,
    /// Requested cast; resolved against existing actors when applied.
    pub actors: Vec<ActorRef>,
}

impl Movie {
    pub fn new(
        summary: MovieSummary,
        actors: Vec<ActorSummary>,
        ratings_list: Vec<Rating>,
    ) -> Self {
        let average_rating = Self::average_of(&ratings_list);
        Self {
            id: summary.id,
            title: summary.title,
            description: summary.description,
            ratings: summary.ratings,
            actors,
            ratings_list,
            average_rating,
        }
    }

    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            ratings: self.ratings,
        }
    }

    pub fn actor_ids(&self) -> Vec<i32> {
        self.actors.iter().map(|a| a.id).collect()
    }

    fn average_of(ratings: &[Rating]) -> Option<f64> {
        if ratings.is_empty() {
            return None;
        }
        let total: f64 = ratings.iter().map(|r| r.value).sum();
        Some(total / ratings.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> MovieSummary {
        MovieSummary {
            id: 1,
            title: "Inception".to_string(),
            description: "A mind-bending thriller".to_string(),
            ratings: 8.8,
        }
    }

    fn rating(id: i32, value: f64) -> Rating {
        Rating {
            id,
            value,
            user_name: format!("user{}", id),
            movie_id: 1,
            movie: None,
        }
    }

    #[test]
    fn average_is_none_without_ratings() {
        let movie = Movie::new(summary(), vec![], vec![]);
        assert_eq!(movie.average_rating, None);
        assert_eq!(movie.ratings, 8.8);
    }

    #[test]
    fn average_is_independent_of_summary_score() {
        let movie = Movie::new(summary(), vec![], vec![rating(1, 9.0), rating(2, 8.0)]);
        assert_eq!(movie.average_rating, Some(8.5));
        assert_eq!(movie.ratings, 8.8);
    }

    #[test]
    fn serializes_with_camel_case_relations() {
        let movie = Movie::new(summary(), vec![], vec![rating(1, 9.0)]);
        let json = serde_json::to_value(&movie).unwrap();
        assert!(json.get("ratingsList").is_some());
        assert_eq!(json["averageRating"], 9.0);
        assert_eq!(json["ratingsList"][0]["userName"], "user1");
    }
}
