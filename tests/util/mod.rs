//! Helpers shared by integration tests.

use axum::{body::to_bytes, response::Response};
use marquee::{
    model::user::Role,
    server::{controller::util::auth::AuthUser, model::auth::Claims},
};

/// Claims as the token extractor would produce them for a user
pub fn claims_for(entity: &entity::marquee_user::Model) -> Claims {
    let role = match entity.role {
        entity::marquee_user::UserRole::User => Role::User,
        entity::marquee_user::UserRole::Admin => Role::Admin,
    };

    Claims {
        user_id: entity.id,
        username: entity.name.clone(),
        role,
        iat: 0,
        exp: 0,
    }
}

pub fn auth_user(entity: &entity::marquee_user::Model) -> AuthUser {
    AuthUser(claims_for(entity))
}

/// Decodes a response body as JSON
pub async fn body_json(resp: Response) -> serde_json::Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
