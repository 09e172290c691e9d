use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Typed outcomes of the admission engine.
///
/// These are decisions rather than faults and are never retried.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReservationError {
    #[error("Showtime ID {0} not found")]
    ShowtimeNotFound(i32),
    #[error("No tickets remain for showtime ID {0}")]
    NoTicketsAvailable(i32),
    #[error("User ID {user_id} already holds a reservation for showtime ID {showtime_id}")]
    AlreadyReserved { user_id: i32, showtime_id: i32 },
    #[error("Reservation ID {0} not found")]
    NotFound(i32),
    #[error("User ID {0} no longer exists")]
    UserNotFound(i32),
}

impl IntoResponse for ReservationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::ShowtimeNotFound(_) => error_response(
                StatusCode::NOT_FOUND,
                "SHOWTIME_NOT_FOUND",
                "Showtime not found",
            ),
            Self::NoTicketsAvailable(_) => error_response(
                StatusCode::CONFLICT,
                "NO_TICKETS_AVAILABLE",
                "No tickets available for this showtime",
            ),
            Self::AlreadyReserved { .. } => error_response(
                StatusCode::CONFLICT,
                "ALREADY_RESERVED",
                "You already have a reservation for this showtime",
            ),
            Self::NotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "NOT_FOUND", "Reservation not found")
            }
            Self::UserNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "NOT_FOUND", "User not found")
            }
        }
    }
}
