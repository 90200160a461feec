use serde::Deserialize;

use crate::modules::catalog::domain::{ActorRef, MovieDraft, RatingDraft, RatingPatch};
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// Request bodies that check their own field rules before reaching the
/// service.
pub trait Validate {
    fn validate(&self) -> AppResult<()>;
}

/// Body of `POST /movies` and `PUT /movies/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MovieRequest {
    pub title: String,
    pub description: String,
    pub ratings: f64,
    pub actors: Vec<ActorRef>,
}

impl Validate for MovieRequest {
    fn validate(&self) -> AppResult<()> {
        Validator::validate_movie_title(&self.title)?;
        Validator::validate_movie_description(&self.description)?;
        Validator::validate_score("ratings", self.ratings)?;
        Validator::validate_actor_refs(&self.actors)
    }
}

impl From<MovieRequest> for MovieDraft {
    fn from(request: MovieRequest) -> Self {
        MovieDraft {
            title: request.title,
            description: request.description,
            ratings: request.ratings,
            actors: request.actors,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ActorRequest {
    pub name: String,
}

impl Validate for ActorRequest {
    fn validate(&self) -> AppResult<()> {
        Validator::validate_actor_name(&self.name)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RatingRequest {
    pub value: f64,
    pub user_name: String,
}

impl Validate for RatingRequest {
    fn validate(&self) -> AppResult<()> {
        Validator::validate_score("value", self.value)
    }
}

impl From<RatingRequest> for RatingDraft {
    fn from(request: RatingRequest) -> Self {
        RatingDraft {
            value: request.value,
            user_name: request.user_name,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RatingPatchRequest {
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub user_name: Option<String>,
}

impl Validate for RatingPatchRequest {
    fn validate(&self) -> AppResult<()> {
        match self.value {
            Some(value) => Validator::validate_score("value", value),
            None => Ok(()),
        }
    }
}

impl From<RatingPatchRequest> for RatingPatch {
    fn from(request: RatingPatchRequest) -> Self {
        RatingPatch {
            value: request.value,
            user_name: request.user_name,
        }
    }
}

/// `?query=` on the search routes. Absent means match everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
}
