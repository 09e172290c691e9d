//! Catalog management for movies, halls and showtimes.
//!
//! Plain CRUD apart from two rules: titles and hall names are unique, and nothing that is still
//! referenced (a movie or hall with showtimes, a showtime with reservations) can be deleted.
//! Hall capacity changes are refused if they would drop below seats already sold.

pub mod hall;
pub mod movie;
pub mod showtime;

#[cfg(test)]
mod tests;

use sea_orm::{DbErr, SqlErr};

use crate::server::error::{catalog::CatalogError, Error};

/// Maps a foreign key violation on delete to [`CatalogError::InUse`]
fn in_use_on_fk_violation(err: DbErr, what: String) -> Error {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => CatalogError::InUse(what).into(),
        _ => err.into(),
    }
}
