use serde::{Deserialize, Serialize};

use super::movie::MovieSummary;

/// A single user's rating of a movie. Always owned by exactly one movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: i32,
    pub value: f64,
    pub user_name: String,
    pub movie_id: i32,
    /// Populated only when ratings are listed on their own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movie: Option<MovieSummary>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RatingDraft {
    pub value: f64,
    pub user_name: String,
}

/// Partial update; `None` leaves the stored field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingPatch {
    pub value: Option<f64>,
    pub user_name: Option<String>,
}

impl RatingPatch {
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.user_name.is_none()
    }

    pub fn apply_to(&self, rating: &mut Rating) {
        if let Some(value) = self.value {
            rating.value = value;
        }
        if let Some(user_name) = &self.user_name {
            rating.user_name = user_name.clone();
        }
    }
}
