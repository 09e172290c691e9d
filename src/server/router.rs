//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered through utoipa-axum so its OpenAPI annotation is collected into
//! one document, served together with Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /users/register`, `POST /users/login`, `POST /users/logout`
/// - `DELETE /users/me`, `DELETE /users/{id}` (admin)
/// - `GET|POST /movies`, `GET|PUT|DELETE /movies/{id}`, `GET /movies/{id}/showtimes`
/// - `GET|POST /halls`, `GET|PUT|DELETE /halls/{id}`
/// - `GET|POST /showtimes`, `GET|PUT|DELETE /showtimes/{id}`, `GET /showtimes/{id}/availability`
/// - `POST /reservations`, `GET /reservations/me`, `GET|DELETE /reservations/{id}`
///
/// Write routes of the catalog require the `admin` role, everything except register & login
/// requires a valid token.
///
/// # Returns
/// A `Router<AppState>` without middleware, see [`crate::server::startup::build_app`].
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Marquee", description = "Marquee movie reservation API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Registration, login & logout"),
        (name = controller::user::USER_TAG, description = "Account deletion"),
        (name = controller::movie::MOVIE_TAG, description = "Movie catalog"),
        (name = controller::hall::HALL_TAG, description = "Halls & seating capacity"),
        (name = controller::showtime::SHOWTIME_TAG, description = "Showtimes & availability"),
        (name = controller::reservation::RESERVATION_TAG, description = "Ticket reservations"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::user::delete_me))
        .routes(routes!(controller::user::delete_user))
        .routes(routes!(
            controller::movie::list_movies,
            controller::movie::create_movie
        ))
        .routes(routes!(
            controller::movie::get_movie,
            controller::movie::update_movie,
            controller::movie::delete_movie
        ))
        .routes(routes!(controller::movie::get_movie_showtimes))
        .routes(routes!(
            controller::hall::list_halls,
            controller::hall::create_hall
        ))
        .routes(routes!(
            controller::hall::get_hall,
            controller::hall::update_hall,
            controller::hall::delete_hall
        ))
        .routes(routes!(
            controller::showtime::list_showtimes,
            controller::showtime::create_showtime
        ))
        .routes(routes!(
            controller::showtime::get_showtime,
            controller::showtime::update_showtime,
            controller::showtime::delete_showtime
        ))
        .routes(routes!(controller::showtime::get_availability))
        .routes(routes!(controller::reservation::create_reservation))
        .routes(routes!(controller::reservation::get_my_reservations))
        .routes(routes!(
            controller::reservation::get_reservation,
            controller::reservation::cancel_reservation
        ))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
