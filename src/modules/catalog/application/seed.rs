use crate::log_info;
use crate::modules::catalog::application::service::CatalogService;
use crate::modules::catalog::domain::{ActorRef, MovieDraft, RatingDraft};
use crate::shared::errors::AppResult;
use crate::shared::utils::TimedOperation;

const ACTORS: [&str; 5] = [
    "Leonardo DiCaprio",
    "Keanu Reeves",
    "Matthew McConaughey",
    "Carrie-Anne Moss",
    "Anne Hathaway",
];

/// (title, description, summary score, indexes into `ACTORS`)
const MOVIES: [(&str, &str, f64, &[usize]); 3] = [
    ("Inception", "A mind-bending thriller", 8.8, &[0]),
    ("The Matrix", "A hacker discovers reality", 8.7, &[1, 3]),
    (
        "Interstellar",
        "A journey through space and time",
        8.6,
        &[0, 2, 4],
    ),
];

/// (user, value, index into `MOVIES`)
const RATINGS: [(&str, f64, usize); 4] = [
    ("Alice", 9.0, 0),
    ("Bob", 8.0, 0),
    ("Charlie", 10.0, 1),
    ("Diana", 7.5, 2),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedReport {
    pub actors: usize,
    pub movies: usize,
    pub ratings: usize,
}

/// Insert the demonstration catalog through the regular service operations.
///
/// Not idempotent: running it twice yields two copies of everything.
pub async fn seed_catalog(service: &CatalogService) -> AppResult<SeedReport> {
    let timer = TimedOperation::new("seed catalog");

    let mut actor_ids = Vec::with_capacity(ACTORS.len());
    for name in ACTORS {
        actor_ids.push(service.create_actor(name).await?.id);
    }

    let mut movie_ids = Vec::with_capacity(MOVIES.len());
    for (title, description, ratings, cast) in MOVIES {
        let draft = MovieDraft {
            title: title.to_string(),
            description: description.to_string(),
            ratings,
            actors: cast.iter().map(|&i| ActorRef::from(actor_ids[i])).collect(),
        };
        movie_ids.push(service.create_movie(draft).await?.id);
    }

    for (user_name, value, movie) in RATINGS {
        let draft = RatingDraft {
            value,
            user_name: user_name.to_string(),
        };
        service.add_rating(movie_ids[movie], draft).await?;
    }

    let report = SeedReport {
        actors: actor_ids.len(),
        movies: movie_ids.len(),
        ratings: RATINGS.len(),
    };
    timer.finish();

    log_info!(
        "Seeded {} actors, {} movies and {} ratings",
        report.actors,
        report.movies,
        report.ratings
    );
    Ok(report)
}
