use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        reservation::{CreateReservationDto, ReservationDto},
    },
    server::{
        controller::util::auth::AuthUser,
        error::Error,
        model::app::AppState,
        service::reservation::ReservationService,
    },
};

pub static RESERVATION_TAG: &str = "reservation";

/// Reserve one ticket of a showtime for the caller
#[utoipa::path(
    post,
    path = "/reservations",
    tag = RESERVATION_TAG,
    request_body = CreateReservationDto,
    responses(
        (status = 201, description = "Ticket reserved", body = ApiResponse<ReservationDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Showtime or user not found", body = ErrorDto),
        (status = 409, description = "Sold out or already reserved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(body): Json<CreateReservationDto>,
) -> Result<impl IntoResponse, Error> {
    let reservation = ReservationService::new(&state.db)
        .reserve(claims.user_id, body.showtime_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            ReservationDto::from(reservation),
            "Reservation successful",
        )),
    ))
}

/// Reservations held by the caller
#[utoipa::path(
    get,
    path = "/reservations/me",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "Caller's reservations", body = ApiResponse<Vec<ReservationDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_reservations(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<impl IntoResponse, Error> {
    let reservations: Vec<ReservationDto> = ReservationService::new(&state.db)
        .reservations_of(claims.user_id)
        .await?
        .into_iter()
        .map(ReservationDto::from)
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(reservations))))
}

#[utoipa::path(
    get,
    path = "/reservations/{id}",
    tag = RESERVATION_TAG,
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation found", body = ApiResponse<ReservationDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Reservation belongs to another user", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservation(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(reservation_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let reservation = ReservationService::new(&state.db)
        .get_by_id(reservation_id)
        .await?;

    caller.ensure_owner_or_admin(reservation.user_id)?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(ReservationDto::from(reservation)))))
}

/// Cancel a reservation, returning its seat to the showtime
#[utoipa::path(
    delete,
    path = "/reservations/{id}",
    tag = RESERVATION_TAG,
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation cancelled"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Reservation belongs to another user", body = ErrorDto),
        (status = 404, description = "Reservation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_reservation(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(reservation_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let reservation_service = ReservationService::new(&state.db);

    let reservation = reservation_service.get_by_id(reservation_id).await?;
    caller.ensure_owner_or_admin(reservation.user_id)?;

    reservation_service.cancel(reservation_id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::message("Reservation cancelled"))))
}
