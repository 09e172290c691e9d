use std::time::Duration;

use chrono::{DateTime, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use crate::{
    model::user::Role,
    server::{
        error::{auth::AuthError, Error},
        model::auth::Claims,
    },
};

/// A signed token and the instant it stops being accepted
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Mints & verifies HS256 bearer tokens carrying identity and role.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Lifetime of issued tokens, also used as the cookie's Max-Age
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn issue(&self, user_id: i32, username: &str, role: Role) -> Result<IssuedToken, Error> {
        let now = Utc::now();
        let ttl = chrono::Duration::from_std(self.ttl)
            .map_err(|e| Error::InternalError(format!("Token lifetime out of range: {}", e)))?;
        let expires_at = now + ttl;

        let claims = Claims {
            user_id,
            username: username.to_string(),
            role,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Checks signature & expiry and returns the embedded claims
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is authentic and unexpired
    /// - `Err(AuthError::TokenExpired)` - Token is authentic but past its expiry
    /// - `Err(AuthError::InvalidToken)` - Malformed, tampered with, or signed with another key
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            })
    }
}
