//! HTTP controller endpoints for the marquee API.
//!
//! Handlers extract the caller with [`util::auth::AuthUser`] or [`util::auth::AdminUser`], call
//! a service, and wrap the result in [`crate::model::api::ApiResponse`]. Every handler carries a
//! utoipa annotation so it shows up in the OpenAPI document served at `/api/docs`.

pub mod auth;
pub mod hall;
pub mod movie;
pub mod reservation;
pub mod showtime;
pub mod user;
pub mod util;
