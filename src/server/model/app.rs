use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::server::{config::Config, service::auth::token::TokenService};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub tokens: TokenService,
    /// Whether the `jwt` cookie is marked `Secure`
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            tokens: TokenService::new(&config.jwt_secret, config.token_ttl),
            secure_cookies: config.secure_cookies,
        }
    }
}

/// Builds state from a database connection & signing secret using default token lifetime,
/// used by the test harness which cannot depend on this crate.
impl From<(DatabaseConnection, String)> for AppState {
    fn from((db, jwt_secret): (DatabaseConnection, String)) -> Self {
        Self {
            db,
            tokens: TokenService::new(&jwt_secret, Duration::from_secs(24 * 60 * 60)),
            secure_cookies: false,
        }
    }
}
