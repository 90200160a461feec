use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::log_debug;
use crate::shared::errors::AppError;

/// Route layer for mutating endpoints: the request only reaches the handler
/// when the configured `Authorizer` accepts its `Authorization` header.
pub async fn require_bearer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = match request.headers().get(AUTHORIZATION) {
        Some(value) => Some(
            value
                .to_str()
                .map_err(|_| AppError::Unauthorized("Invalid API token".to_string()))?,
        ),
        None => None,
    };

    if let Err(err) = state.authorizer.authorize(header) {
        log_debug!(
            "Rejected {} {}: {}",
            request.method(),
            request.uri().path(),
            err.message()
        );
        return Err(err);
    }

    Ok(next.run(request).await)
}
