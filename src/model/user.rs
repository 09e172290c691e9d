use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role carried in verified token claims
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub role: Role,
}

#[derive(Clone, Deserialize, ToSchema)]
pub struct RegisterDto {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Deserialize, ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

/// Returned on successful login, the same token is also set as the `jwt` cookie
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponseDto {
    pub user: UserDto,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Clone, Deserialize, ToSchema)]
pub struct DeleteAccountDto {
    pub password: String,
}
