pub mod actor_repository_impl;
pub mod mapper;
pub mod movie_repository_impl;
pub mod rating_repository_impl;

pub use actor_repository_impl::ActorRepositoryImpl;
pub use movie_repository_impl::MovieRepositoryImpl;
pub use rating_repository_impl::RatingRepositoryImpl;

use diesel::pg::PgConnection;
use std::sync::Arc;
use tokio::task;

use crate::shared::errors::AppResult;
use crate::shared::utils::TimedOperation;
use crate::shared::Database;

/// Run a blocking diesel closure on the blocking pool with a pooled
/// connection, timing it under `operation`.
pub(crate) async fn with_connection<T, F>(db: &Arc<Database>, operation: &str, f: F) -> AppResult<T>
where
    T: Send + 'static,
    F: FnOnce(&mut PgConnection) -> AppResult<T> + Send + 'static,
{
    let db = Arc::clone(db);
    let timer = TimedOperation::new(operation);

    let result = task::spawn_blocking(move || -> AppResult<T> {
        let mut conn = db.get_connection()?;
        f(&mut *conn)
    })
    .await?;

    timer.finish();
    result
}

/// `ILIKE` pattern for a case-insensitive substring match on `term`.
pub(crate) fn contains_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[cfg(test)]
mod tests {
    use super::contains_pattern;

    #[test]
    fn empty_term_matches_everything() {
        assert_eq!(contains_pattern(""), "%%");
    }

    #[test]
    fn wildcards_in_term_are_literal() {
        assert_eq!(contains_pattern("100%_a\\b"), "%100\\%\\_a\\\\b%");
    }
}
