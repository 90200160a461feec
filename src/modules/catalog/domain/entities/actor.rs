use serde::{Deserialize, Serialize};

use super::movie::MovieSummary;

/// An actor with the movies they appear in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub id: i32,
    pub name: String,
    pub movies: Vec<MovieSummary>,
}

/// Actor fields without relations, as listed inside a movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorSummary {
    pub id: i32,
    pub name: String,
}

impl Actor {
    pub fn summary(&self) -> ActorSummary {
        ActorSummary {
            id: self.id,
            name: self.name.clone(),
        }
    }
}
