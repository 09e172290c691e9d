use axum::{extract::FromRequestParts, http::request::Parts};

use crate::{
    model::user::Role,
    server::{
        controller::util::cookie::token_from_headers,
        error::{auth::AuthError, Error},
        model::{app::AppState, auth::Claims},
    },
};

/// Any caller presenting a valid token
pub struct AuthUser(pub Claims);

/// A caller presenting a valid token with the `admin` role
pub struct AdminUser(pub Claims);

impl AuthUser {
    /// Admins may act on any user's resources, users only on their own
    pub fn ensure_owner_or_admin(&self, owner_id: i32) -> Result<(), AuthError> {
        match self.0.role {
            Role::Admin => Ok(()),
            Role::User if self.0.user_id == owner_id => Ok(()),
            Role::User => Err(AuthError::Forbidden(format!(
                "user ID {} accessing resource of user ID {}",
                self.0.user_id, owner_id
            ))),
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Some(token) = token_from_headers(&parts.headers) else {
            return Err(AuthError::Unauthenticated.into());
        };

        let claims = state.tokens.verify(&token)?;

        Ok(Self(claims))
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let AuthUser(claims) = AuthUser::from_request_parts(parts, state).await?;

        match claims.role {
            Role::Admin => Ok(Self(claims)),
            Role::User => Err(AuthError::Forbidden(format!("user {:?}", claims.username)).into()),
        }
    }
}
