//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, so these tests cover request handling,
//! status codes and response envelopes without going through the router.

mod auth;
mod hall;
mod movie;
mod reservation;
mod showtime;
mod user;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use marquee::server::model::app::AppState;
use marquee_test_utils::prelude::*;

use crate::util::{auth_user, body_json};
