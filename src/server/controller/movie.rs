use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        catalog::{MovieDto, MovieQuery, ShowtimeDto, UpsertMovieDto},
    },
    server::{
        controller::util::auth::{AdminUser, AuthUser},
        error::{catalog::CatalogError, Error},
        model::app::AppState,
        service::catalog::{movie::MovieService, showtime::ShowtimeService},
    },
};

pub static MOVIE_TAG: &str = "movie";

/// List movies, optionally only the one with an exact title
#[utoipa::path(
    get,
    path = "/movies",
    tag = MOVIE_TAG,
    params(MovieQuery),
    responses(
        (status = 200, description = "Movies ordered by ID", body = ApiResponse<Vec<MovieDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_movies(
    State(state): State<AppState>,
    _: AuthUser,
    Query(query): Query<MovieQuery>,
) -> Result<impl IntoResponse, Error> {
    let movie_service = MovieService::new(&state.db);

    let movies = match query.title {
        Some(title) => match movie_service.get_by_title(&title).await {
            Ok(movie) => vec![movie],
            Err(Error::CatalogError(CatalogError::MovieTitleNotFound(_))) => Vec::new(),
            Err(err) => return Err(err),
        },
        None => movie_service.list().await?,
    };

    let movies: Vec<MovieDto> = movies.into_iter().map(MovieDto::from).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(movies))))
}

#[utoipa::path(
    get,
    path = "/movies/{id}",
    tag = MOVIE_TAG,
    params(("id" = i32, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Movie found", body = ApiResponse<MovieDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Movie not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_movie(
    State(state): State<AppState>,
    _: AuthUser,
    Path(movie_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let movie = MovieService::new(&state.db).get(movie_id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(MovieDto::from(movie)))))
}

/// Showtimes of a movie ordered by start time
#[utoipa::path(
    get,
    path = "/movies/{id}/showtimes",
    tag = MOVIE_TAG,
    params(("id" = i32, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Showtimes of the movie", body = ApiResponse<Vec<ShowtimeDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Movie not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_movie_showtimes(
    State(state): State<AppState>,
    _: AuthUser,
    Path(movie_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let showtimes: Vec<ShowtimeDto> = ShowtimeService::new(&state.db)
        .list_by_movie(movie_id)
        .await?
        .into_iter()
        .map(ShowtimeDto::from)
        .collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok(showtimes))))
}

#[utoipa::path(
    post,
    path = "/movies",
    tag = MOVIE_TAG,
    request_body = UpsertMovieDto,
    responses(
        (status = 201, description = "Movie created", body = ApiResponse<MovieDto>),
        (status = 400, description = "Empty title", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 409, description = "Title already used", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_movie(
    State(state): State<AppState>,
    _: AdminUser,
    Json(body): Json<UpsertMovieDto>,
) -> Result<impl IntoResponse, Error> {
    let movie = MovieService::new(&state.db)
        .create(&body.title, &body.description)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(MovieDto::from(movie)))))
}

#[utoipa::path(
    put,
    path = "/movies/{id}",
    tag = MOVIE_TAG,
    params(("id" = i32, Path, description = "Movie ID")),
    request_body = UpsertMovieDto,
    responses(
        (status = 200, description = "Movie updated", body = ApiResponse<MovieDto>),
        (status = 400, description = "Empty title", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Movie not found", body = ErrorDto),
        (status = 409, description = "Title already used by another movie", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_movie(
    State(state): State<AppState>,
    _: AdminUser,
    Path(movie_id): Path<i32>,
    Json(body): Json<UpsertMovieDto>,
) -> Result<impl IntoResponse, Error> {
    let movie = MovieService::new(&state.db)
        .update(movie_id, &body.title, &body.description)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok(MovieDto::from(movie)))))
}

#[utoipa::path(
    delete,
    path = "/movies/{id}",
    tag = MOVIE_TAG,
    params(("id" = i32, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Movie deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Movie not found", body = ErrorDto),
        (status = 409, description = "Movie still has showtimes", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    _: AdminUser,
    Path(movie_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    MovieService::new(&state.db).delete(movie_id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::message("Movie deleted"))))
}
