//! Server application core modules.
//!
//! This module contains the marquee backend: HTTP routing and token authentication, the movie
//! catalog, and the reservation engine that admits users to showtimes without ever selling more
//! seats than a hall holds.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
