use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        catalog::{HallDto, UpsertHallDto},
    },
    server::{
        controller::util::auth::{AdminUser, AuthUser},
        error::Error,
        model::app::AppState,
        service::catalog::hall::HallService,
    },
};

pub static HALL_TAG: &str = "hall";

#[utoipa::path(
    get,
    path = "/halls",
    tag = HALL_TAG,
    responses(
        (status = 200, description = "Halls ordered by ID", body = ApiResponse<Vec<HallDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_halls(
    State(state): State<AppState>,
    _: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let halls: Vec<HallDto> = HallService::new(&state.db)
        .list()
        .await?
        .into_iter()
        .map(HallDto::from)
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(halls))))
}

#[utoipa::path(
    get,
    path = "/halls/{id}",
    tag = HALL_TAG,
    params(("id" = i32, Path, description = "Hall ID")),
    responses(
        (status = 200, description = "Hall found", body = ApiResponse<HallDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Hall not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hall(
    State(state): State<AppState>,
    _: AuthUser,
    Path(hall_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let hall = HallService::new(&state.db).get(hall_id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(HallDto::from(hall)))))
}

/// Create a hall, `seat_count` must fit in `rows` x `cols`
#[utoipa::path(
    post,
    path = "/halls",
    tag = HALL_TAG,
    request_body = UpsertHallDto,
    responses(
        (status = 201, description = "Hall created", body = ApiResponse<HallDto>),
        (status = 400, description = "Invalid layout", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 409, description = "Name already used", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_hall(
    State(state): State<AppState>,
    _: AdminUser,
    Json(body): Json<UpsertHallDto>,
) -> Result<impl IntoResponse, Error> {
    let hall = HallService::new(&state.db).create(&body).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(HallDto::from(hall)))))
}

/// Replace a hall's name & layout
///
/// Fails with `CAPACITY_BELOW_RESERVED` if a showtime in the hall has sold more seats than the
/// new `seat_count`.
#[utoipa::path(
    put,
    path = "/halls/{id}",
    tag = HALL_TAG,
    params(("id" = i32, Path, description = "Hall ID")),
    request_body = UpsertHallDto,
    responses(
        (status = 200, description = "Hall updated", body = ApiResponse<HallDto>),
        (status = 400, description = "Invalid layout", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Hall not found", body = ErrorDto),
        (status = 409, description = "Name taken or capacity below reserved seats", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_hall(
    State(state): State<AppState>,
    _: AdminUser,
    Path(hall_id): Path<i32>,
    Json(body): Json<UpsertHallDto>,
) -> Result<impl IntoResponse, Error> {
    let hall = HallService::new(&state.db).update(hall_id, &body).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(HallDto::from(hall)))))
}

#[utoipa::path(
    delete,
    path = "/halls/{id}",
    tag = HALL_TAG,
    params(("id" = i32, Path, description = "Hall ID")),
    responses(
        (status = 200, description = "Hall deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Hall not found", body = ErrorDto),
        (status = 409, description = "Hall still has showtimes", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_hall(
    State(state): State<AppState>,
    _: AdminUser,
    Path(hall_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    HallService::new(&state.db).delete(hall_id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::message("Hall deleted"))))
}
