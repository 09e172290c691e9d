//! Service layer for business rules and transactions.
//!
//! Services own transaction boundaries and retry policy, and translate repository results into
//! domain errors. Controllers only talk to services.

pub mod auth;
pub mod catalog;
pub mod reservation;
pub mod retry;
pub mod user;
