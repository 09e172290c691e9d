use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        user::DeleteAccountDto,
    },
    server::{
        controller::util::{
            auth::{AdminUser, AuthUser},
            cookie::cleared_cookie,
        },
        error::Error,
        model::app::AppState,
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// Delete the caller's own account after confirming the password
///
/// All of the account's reservations are cancelled and the `jwt` cookie is cleared.
#[utoipa::path(
    delete,
    path = "/users/me",
    tag = USER_TAG,
    request_body = DeleteAccountDto,
    responses(
        (status = 200, description = "Account deleted"),
        (status = 401, description = "Not logged in or wrong password", body = ErrorDto),
        (status = 404, description = "Account no longer exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_me(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(body): Json<DeleteAccountDto>,
) -> Result<impl IntoResponse, Error> {
    UserService::new(&state.db)
        .delete_identity(&claims.username, &body.password)
        .await?;

    let cookie = cleared_cookie(state.secure_cookies)?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(ApiResponse::message("Account deleted")),
    ))
}

/// Delete any account by ID, cancelling its reservations
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Account deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    UserService::new(&state.db)
        .delete_identity_by_id(user_id)
        .await?;

    tracing::info!(admin_id = admin.user_id, user_id, "Admin deleted user");

    Ok((StatusCode::OK, Json(ApiResponse::message("User deleted"))))
}
