use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        catalog::{AvailabilityDto, CreateShowtimeDto, ShowtimeDto, UpdateShowtimeDto},
    },
    server::{
        controller::util::auth::{AdminUser, AuthUser},
        error::Error,
        model::app::AppState,
        service::{catalog::showtime::ShowtimeService, reservation::ReservationService},
    },
};

pub static SHOWTIME_TAG: &str = "showtime";

#[utoipa::path(
    get,
    path = "/showtimes",
    tag = SHOWTIME_TAG,
    responses(
        (status = 200, description = "Showtimes ordered by start time", body = ApiResponse<Vec<ShowtimeDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_showtimes(
    State(state): State<AppState>,
    _: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let showtimes: Vec<ShowtimeDto> = ShowtimeService::new(&state.db)
        .list()
        .await?
        .into_iter()
        .map(ShowtimeDto::from)
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(showtimes))))
}

#[utoipa::path(
    get,
    path = "/showtimes/{id}",
    tag = SHOWTIME_TAG,
    params(("id" = i32, Path, description = "Showtime ID")),
    responses(
        (status = 200, description = "Showtime found", body = ApiResponse<ShowtimeDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Showtime not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_showtime(
    State(state): State<AppState>,
    _: AuthUser,
    Path(showtime_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let showtime = ShowtimeService::new(&state.db).get(showtime_id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(ShowtimeDto::from(showtime)))))
}

/// Capacity and remaining tickets of a showtime
///
/// The count is a snapshot, a later reservation attempt may still find the showtime sold out.
#[utoipa::path(
    get,
    path = "/showtimes/{id}/availability",
    tag = SHOWTIME_TAG,
    params(("id" = i32, Path, description = "Showtime ID")),
    responses(
        (status = 200, description = "Current availability", body = ApiResponse<AvailabilityDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Showtime not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_availability(
    State(state): State<AppState>,
    _: AuthUser,
    Path(showtime_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let availability = ReservationService::new(&state.db)
        .remaining_tickets(showtime_id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(availability))))
}

#[utoipa::path(
    post,
    path = "/showtimes",
    tag = SHOWTIME_TAG,
    request_body = CreateShowtimeDto,
    responses(
        (status = 201, description = "Showtime scheduled", body = ApiResponse<ShowtimeDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Movie or hall not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_showtime(
    State(state): State<AppState>,
    _: AdminUser,
    Json(body): Json<CreateShowtimeDto>,
) -> Result<impl IntoResponse, Error> {
    let showtime = ShowtimeService::new(&state.db)
        .create(body.movie_id, body.hall_id, body.start_at)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(ShowtimeDto::from(showtime)))))
}

/// Change the start time and/or hall of a showtime
#[utoipa::path(
    put,
    path = "/showtimes/{id}",
    tag = SHOWTIME_TAG,
    params(("id" = i32, Path, description = "Showtime ID")),
    request_body = UpdateShowtimeDto,
    responses(
        (status = 200, description = "Showtime updated", body = ApiResponse<ShowtimeDto>),
        (status = 400, description = "No field to update", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Showtime or hall not found", body = ErrorDto),
        (status = 409, description = "Target hall smaller than seats sold", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_showtime(
    State(state): State<AppState>,
    _: AdminUser,
    Path(showtime_id): Path<i32>,
    Json(body): Json<UpdateShowtimeDto>,
) -> Result<impl IntoResponse, Error> {
    let showtime = ShowtimeService::new(&state.db)
        .update(showtime_id, &body)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(ShowtimeDto::from(showtime)))))
}

#[utoipa::path(
    delete,
    path = "/showtimes/{id}",
    tag = SHOWTIME_TAG,
    params(("id" = i32, Path, description = "Showtime ID")),
    responses(
        (status = 200, description = "Showtime deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Showtime not found", body = ErrorDto),
        (status = 409, description = "Showtime still has reservations", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_showtime(
    State(state): State<AppState>,
    _: AdminUser,
    Path(showtime_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    ShowtimeService::new(&state.db).delete(showtime_id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::message("Showtime deleted"))))
}
