//! Conversions between database rows and catalog entities.

use crate::modules::catalog::domain::{
    Actor, ActorSummary, Movie, MovieSummary, Rating, RatingPatch,
};
use crate::modules::catalog::infrastructure::models::{
    ActorModel, MovieModel, RatingChangeset, RatingModel,
};

pub fn movie_summary(model: MovieModel) -> MovieSummary {
    MovieSummary {
        id: model.id,
        title: model.title,
        description: model.description,
        ratings: model.ratings,
    }
}

pub fn actor_summary(model: ActorModel) -> ActorSummary {
    ActorSummary {
        id: model.id,
        name: model.name,
    }
}

pub fn movie_to_entity(
    model: MovieModel,
    actors: Vec<ActorModel>,
    ratings: Vec<RatingModel>,
) -> Movie {
    Movie::new(
        movie_summary(model),
        actors.into_iter().map(actor_summary).collect(),
        ratings.into_iter().map(|r| rating_to_entity(r, None)).collect(),
    )
}

pub fn actor_to_entity(model: ActorModel, movies: Vec<MovieModel>) -> Actor {
    Actor {
        id: model.id,
        name: model.name,
        movies: movies.into_iter().map(movie_summary).collect(),
    }
}

pub fn rating_to_entity(model: RatingModel, movie: Option<MovieModel>) -> Rating {
    Rating {
        id: model.id,
        value: model.value,
        user_name: model.user_name,
        movie_id: model.movie_id,
        movie: movie.map(movie_summary),
    }
}

pub fn patch_to_changeset(patch: &RatingPatch) -> RatingChangeset {
    RatingChangeset {
        value: patch.value,
        user_name: patch.user_name.clone(),
    }
}
