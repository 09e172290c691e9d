//! Error types for the marquee server.
//!
//! Each domain (authentication, configuration, catalog, reservations) owns an error enum that
//! knows its HTTP status and machine-readable code. They are aggregated into [`Error`], which is
//! what services and controllers return so `?` works across layers.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod reservation;
pub mod retry;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, catalog::CatalogError, config::ConfigError,
        reservation::ReservationError,
    },
};

/// Main error type for the marquee server.
///
/// Domain errors map to specific status codes through their own `IntoResponse`
/// implementations. Library errors are logged and reported as a generic 500.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication & identity error (credentials, tokens, roles).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Movie, hall or showtime management error.
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// Admission decision made by the reservation engine.
    #[error(transparent)]
    ReservationError(#[from] ReservationError),
    /// Internal error indicating a bug in marquee's code.
    #[error("Internal error with marquee's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Token encoding error.
    #[error(transparent)]
    JwtError(#[from] jsonwebtoken::errors::Error),
    /// Password hashing error.
    #[error("Password hashing failed: {0}")]
    PasswordHashError(argon2::password_hash::Error),
    /// I/O error (binding the listener, serving).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl From<argon2::password_hash::Error> for Error {
    fn from(err: argon2::password_hash::Error) -> Self {
        Self::PasswordHashError(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::AuthError(err) => err.into_response(),
            Self::CatalogError(err) => err.into_response(),
            Self::ReservationError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The detail is logged, the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "Internal server error",
        )
    }
}

/// Builds the JSON error envelope shared by every domain error.
pub(crate) fn error_response(status: StatusCode, code: &str, message: impl Into<String>) -> Response {
    (status, Json(ErrorDto::new(code, message))).into_response()
}
