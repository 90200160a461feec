use crate::shared::errors::{AppError, AppResult};

/// Decides whether a request may perform a mutating operation, given the
/// raw value of its `Authorization` header.
pub trait Authorizer: Send + Sync {
    fn authorize(&self, authorization: Option<&str>) -> AppResult<()>;
}

/// Accepts exactly one bearer token shared by every client.
pub struct SharedSecretAuthorizer {
    secret: String,
}

impl SharedSecretAuthorizer {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl Authorizer for SharedSecretAuthorizer {
    fn authorize(&self, authorization: Option<&str>) -> AppResult<()> {
        let header = authorization.ok_or_else(|| {
            AppError::Unauthorized("Missing Authorization header".to_string())
        })?;

        // `Bearer <token>`; the scheme word itself is not checked
        let token = header.split(' ').nth(1);

        match token {
            Some(token) if !self.secret.is_empty() && token == self.secret => Ok(()),
            _ => Err(AppError::Unauthorized("Invalid API token".to_string())),
        }
    }
}
