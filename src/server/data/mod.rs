//! Data access layer repositories.
//!
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so the same queries run on the
//! pooled connection or inside a transaction opened by a service.

pub mod hall;
pub mod movie;
pub mod reservation;
pub mod showtime;
pub mod user;
