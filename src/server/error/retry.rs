use sea_orm::{DbErr, RuntimeErr};

use super::Error;

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Transient store fault, try again after a short backoff
    Retry,
    /// Permanent failure or domain decision
    Fail,
}

/// Database error codes reported for contention that resolves on retry.
///
/// Postgres: serialization failure, deadlock detected, lock not available.
/// SQLite: busy, locked, shared-cache locked, busy snapshot.
const TRANSIENT_DB_CODES: &[&str] = &["40001", "40P01", "55P03", "5", "6", "262", "517"];

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::DbErr(db_err) => match db_err {
                // Connection acquisition errors - transient, should retry
                DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                // Connection errors - transient, should retry
                DbErr::Conn(_) => ErrorRetryStrategy::Retry,
                // Lock contention surfaced by the database
                DbErr::Query(RuntimeErr::SqlxError(err)) | DbErr::Exec(RuntimeErr::SqlxError(err))
                    if err
                        .as_database_error()
                        .and_then(|d| d.code())
                        .is_some_and(|code| TRANSIENT_DB_CODES.iter().any(|c| code == *c)) =>
                {
                    ErrorRetryStrategy::Retry
                }
                // Constraint violations, type conversion, missing records, schema errors
                _ => ErrorRetryStrategy::Fail,
            },

            // Domain decisions - never retried
            Self::ReservationError(_) => ErrorRetryStrategy::Fail,
            Self::CatalogError(_) => ErrorRetryStrategy::Fail,
            Self::AuthError(_) => ErrorRetryStrategy::Fail,

            // Configuration errors - permanent failures, won't resolve with retry
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,

            Self::InternalError(_) => ErrorRetryStrategy::Fail,
            Self::JwtError(_) => ErrorRetryStrategy::Fail,
            Self::PasswordHashError(_) => ErrorRetryStrategy::Fail,
            Self::IoError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
