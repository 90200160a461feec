use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    pub fn validate_movie_title(title: &str) -> Result<(), AppError> {
        Self::require_non_empty(title, "title")
    }

    pub fn validate_movie_description(description: &str) -> Result<(), AppError> {
        Self::require_non_empty(description, "description")
    }

    pub fn validate_actor_name(name: &str) -> Result<(), AppError> {
        Self::require_non_empty(name, "name")
    }

    /// Scores (movie summary and rating values) live on a 0-10 scale.
    pub fn validate_score(field: &str, score: f64) -> Result<(), AppError> {
        if !score.is_finite() {
            return Err(AppError::ValidationError(format!(
                "{} must be a number",
                field
            )));
        }
        if !(0.0..=10.0).contains(&score) {
            return Err(AppError::ValidationError(format!(
                "{} must be between 0 and 10",
                field
            )));
        }
        Ok(())
    }

    pub fn validate_actor_refs<T>(actors: &[T]) -> Result<(), AppError> {
        if actors.is_empty() {
            return Err(AppError::ValidationError(
                "actors should not be empty".to_string(),
            ));
        }
        Ok(())
    }

    fn require_non_empty(value: &str, field: &str) -> Result<(), AppError> {
        if value.is_empty() {
            return Err(AppError::ValidationError(format!(
                "{} should not be empty",
                field
            )));
        }
        Ok(())
    }
}
