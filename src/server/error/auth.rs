use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Username {0:?} is already taken")]
    AlreadyExists(String),
    #[error("User {0:?} not found")]
    UserNotFound(String),
    #[error("User ID {0} not found")]
    UserIdNotFound(i32),
    #[error("Invalid username or password")]
    InvalidCredential,
    #[error("Username and password must not be empty")]
    EmptyCredential,
    #[error("Request carries no token")]
    Unauthenticated,
    #[error("Token failed verification")]
    InvalidToken,
    #[error("Token has expired")]
    TokenExpired,
    #[error("Forbidden: {0}")]
    Forbidden(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::AlreadyExists(_) => {
                error_response(StatusCode::CONFLICT, "ALREADY_EXISTS", "Username is already taken")
            }
            Self::UserNotFound(_) | Self::UserIdNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "NOT_FOUND", "User not found")
            }
            Self::InvalidCredential => error_response(
                StatusCode::UNAUTHORIZED,
                "INVALID_CREDENTIAL",
                "Invalid username or password",
            ),
            Self::EmptyCredential => error_response(
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                "Username and password are required",
            ),
            Self::Unauthenticated => error_response(
                StatusCode::UNAUTHORIZED,
                "UNAUTHENTICATED",
                "Authentication required",
            ),
            Self::InvalidToken => {
                error_response(StatusCode::UNAUTHORIZED, "INVALID_TOKEN", "Invalid token")
            }
            Self::TokenExpired => {
                error_response(StatusCode::UNAUTHORIZED, "TOKEN_EXPIRED", "Token has expired")
            }
            Self::Forbidden(_) => error_response(
                StatusCode::FORBIDDEN,
                "FORBIDDEN",
                "You do not have permission to perform this action",
            ),
        }
    }
}
