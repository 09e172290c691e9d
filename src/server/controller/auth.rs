use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        user::{LoginDto, LoginResponseDto, RegisterDto, UserDto},
    },
    server::{
        controller::util::{
            auth::AuthUser,
            cookie::{cleared_cookie, token_cookie},
        },
        error::Error,
        model::app::AppState,
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Register a new account with the `user` role
#[utoipa::path(
    post,
    path = "/users/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<UserDto>),
        (status = 400, description = "Empty username or password", body = ErrorDto),
        (status = 409, description = "Username already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterDto>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthService::new(&state.db, &state.tokens)
        .register(&body.username, &body.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(UserDto::from(user), "Registration successful")),
    ))
}

/// Log in, returning a token and setting it as the `jwt` cookie
#[utoipa::path(
    post,
    path = "/users/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = ApiResponse<LoginResponseDto>),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let (user, issued) = AuthService::new(&state.db, &state.tokens)
        .login(&body.username, &body.password)
        .await?;

    let max_age = i64::try_from(state.tokens.ttl().as_secs()).unwrap_or(i64::MAX);
    let cookie = token_cookie(&issued.token, max_age, state.secure_cookies)?;

    tracing::info!(user_id = user.id, "User {:?} logged in", user.name);

    let response = LoginResponseDto {
        user: user.into(),
        token: issued.token,
        expires_at: issued.expires_at,
    };

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(ApiResponse::with_message(response, "Login successful")),
    ))
}

/// Log out by expiring the `jwt` cookie
#[utoipa::path(
    post,
    path = "/users/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out"),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<impl IntoResponse, Error> {
    let cookie = cleared_cookie(state.secure_cookies)?;

    tracing::debug!(user_id = claims.user_id, "User {:?} logged out", claims.username);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(ApiResponse::message("Logout successful")),
    ))
}
