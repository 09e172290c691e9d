use std::{net::SocketAddr, time::Duration};

use crate::server::error::config::ConfigError;

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub bind_addr: SocketAddr,
    pub token_ttl: Duration,
    pub request_timeout: Duration,
    pub secure_cookies: bool,
    /// Bootstrap administrator credentials, only used when both are set
    pub admin_credentials: Option<(String, String)>,
}

impl Config {
    const DEFAULT_BIND_ADDR: &'static str = "0.0.0.0:8080";
    const DEFAULT_TOKEN_TTL_HOURS: u64 = 24;
    const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = optional_var("BIND_ADDR")
            .unwrap_or_else(|| Self::DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "BIND_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        let token_ttl_hours = parse_var("TOKEN_TTL_HOURS", Self::DEFAULT_TOKEN_TTL_HOURS)?;
        if token_ttl_hours == 0 {
            return Err(ConfigError::InvalidEnvValue {
                var: "TOKEN_TTL_HOURS".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        let request_timeout_secs =
            parse_var("REQUEST_TIMEOUT_SECS", Self::DEFAULT_REQUEST_TIMEOUT_SECS)?;

        // Cookies are sent over plain HTTP in development builds
        let secure_cookies = parse_var("SECURE_COOKIES", !cfg!(debug_assertions))?;

        let admin_credentials = match (
            optional_var("ADMIN_USERNAME"),
            optional_var("ADMIN_PASSWORD"),
        ) {
            (Some(username), Some(password)) => Some((username, password)),
            _ => None,
        };

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            jwt_secret: required_var("JWT_SECRET")?,
            bind_addr,
            token_ttl: Duration::from_secs(token_ttl_hours * 60 * 60),
            request_timeout: Duration::from_secs(request_timeout_secs),
            secure_cookies,
            admin_credentials,
        })
    }
}

fn required_var(var: &str) -> Result<String, ConfigError> {
    optional_var(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

/// Reads a variable, treating an empty value the same as an unset one
fn optional_var(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|value| !value.is_empty())
}

fn parse_var<T>(var: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match optional_var(var) {
        None => Ok(default),
        Some(value) => value.parse::<T>().map_err(|e| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        }),
    }
}
