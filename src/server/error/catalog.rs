use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Movie ID {0} not found")]
    MovieNotFound(i32),
    #[error("Movie titled {0:?} not found")]
    MovieTitleNotFound(String),
    #[error("Hall ID {0} not found")]
    HallNotFound(i32),
    #[error("Showtime ID {0} not found")]
    ShowtimeNotFound(i32),
    #[error("A movie titled {0:?} already exists")]
    MovieTitleTaken(String),
    #[error("A hall named {0:?} already exists")]
    HallNameTaken(String),
    #[error("{0} is still referenced and cannot be deleted")]
    InUse(String),
    #[error("Hall capacity {capacity} is below the {reserved} seats already reserved")]
    CapacityBelowReserved { capacity: i32, reserved: i32 },
    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MovieNotFound(_) | Self::MovieTitleNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "NOT_FOUND", "Movie not found")
            }
            Self::HallNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "NOT_FOUND", "Hall not found")
            }
            Self::ShowtimeNotFound(_) => error_response(
                StatusCode::NOT_FOUND,
                "SHOWTIME_NOT_FOUND",
                "Showtime not found",
            ),
            Self::MovieTitleTaken(_) => error_response(
                StatusCode::CONFLICT,
                "ALREADY_EXISTS",
                "A movie with this title already exists",
            ),
            Self::HallNameTaken(_) => error_response(
                StatusCode::CONFLICT,
                "ALREADY_EXISTS",
                "A hall with this name already exists",
            ),
            Self::InUse(_) => error_response(StatusCode::CONFLICT, "IN_USE", self.to_string()),
            Self::CapacityBelowReserved { .. } => error_response(
                StatusCode::CONFLICT,
                "CAPACITY_BELOW_RESERVED",
                self.to_string(),
            ),
            Self::BadRequest(message) => {
                error_response(StatusCode::BAD_REQUEST, "BAD_REQUEST", message)
            }
        }
    }
}
