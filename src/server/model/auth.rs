use serde::{Deserialize, Serialize};

use crate::model::user::Role;

/// Claims embedded in every issued token.
///
/// `role` is typed so route guards match on it exhaustively instead of comparing strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i32,
    pub username: String,
    pub role: Role,
    /// Issued at, unix seconds
    pub iat: i64,
    /// Expiry, unix seconds
    pub exp: i64,
}
