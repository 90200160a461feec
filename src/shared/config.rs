use std::{env, fmt::Display, str::FromStr};

use crate::shared::errors::{AppError, AppResult};
use crate::{log_info, log_warn};

/// Secret used by the access gate when `API_SECRET` is not set.
pub const DEFAULT_API_SECRET: &str = "my-secret-token";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub api_secret: String,
    pub host: String,
    pub port: u16,
    pub max_connections: Option<u32>,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// A `.env` file is read first if present; variables already set in the
    /// environment win.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let database_url = validate_database_url(var("DATABASE_URL").ok_or_else(|| {
            AppError::ConfigError("DATABASE_URL environment variable not found".to_string())
        })?)?;

        let api_secret = var("API_SECRET").unwrap_or_else(|| {
            log_warn!("API_SECRET not set, falling back to the built-in default secret");
            DEFAULT_API_SECRET.to_string()
        });

        Ok(Self {
            database_url,
            api_secret,
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: try_load("PORT", DEFAULT_PORT)?,
            max_connections: var("DB_MAX_CONNECTIONS")
                .map(|raw| parse("DB_MAX_CONNECTIONS", &raw))
                .transpose()?,
        })
    }

    /// Apply command line overrides on top of the environment.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn try_load<T: FromStr>(key: &str, default: T) -> AppResult<T>
where
    T: Display,
    T::Err: Display,
{
    match var(key) {
        Some(raw) => parse(key, &raw),
        None => {
            log_info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}

fn parse<T: FromStr>(key: &str, raw: &str) -> AppResult<T>
where
    T::Err: Display,
{
    raw.trim()
        .parse()
        .map_err(|e| AppError::ConfigError(format!("Invalid {key} value '{raw}': {e}")))
}

fn validate_database_url(url: String) -> AppResult<String> {
    if !url.starts_with("postgres://") && !url.starts_with("postgresql://") {
        return Err(AppError::ConfigError(
            "Invalid database URL format. Must start with postgres:// or postgresql://"
                .to_string(),
        ));
    }

    // Log the target without exposing credentials
    log_info!(
        "Database target: {}",
        url.rsplit('@').next().unwrap_or("unknown_host")
    );

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_postgres_urls() {
        let err = validate_database_url("mysql://localhost/catalog".to_string()).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn accepts_both_postgres_schemes() {
        assert!(validate_database_url("postgres://u:p@localhost/catalog".to_string()).is_ok());
        assert!(validate_database_url("postgresql://u:p@localhost/catalog".to_string()).is_ok());
    }

    #[test]
    fn parse_reports_the_offending_key() {
        let err = parse::<u16>("PORT", "eighty").unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn overrides_replace_only_given_values() {
        let config = Config {
            database_url: "postgres://localhost/catalog".to_string(),
            api_secret: DEFAULT_API_SECRET.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_connections: None,
        }
        .with_overrides(None, Some(8080));

        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }
}
