//! Server-side models.
//!
//! Application state shared by handlers, verified token claims, and the conversions from
//! database entity models into the API DTOs.

pub mod app;
pub mod auth;
pub mod db;
