use axum::http::header;
use marquee::{
    model::user::{LoginDto, RegisterDto},
    server::controller::auth::{login, logout, register},
};

use super::*;

fn register_dto(username: &str, password: &str) -> Json<RegisterDto> {
    Json(RegisterDto {
        username: username.to_string(),
        password: password.to_string(),
    })
}

fn login_dto(username: &str, password: &str) -> Json<LoginDto> {
    Json(LoginDto {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Expect 201 with the new account in the envelope
#[tokio::test]
async fn register_returns_created() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let state: AppState = test.to_app_state();

    let resp = register(State(state), register_dto("alice", "hunter2"))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["username"], "alice");
    assert_eq!(body["data"]["role"], "user");

    Ok(())
}

/// Expect 409 ALREADY_EXISTS when registering a taken username
#[tokio::test]
async fn register_rejects_taken_username() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    test.user().insert_user("alice").await?;
    let state: AppState = test.to_app_state();

    let resp = register(State(state), register_dto("alice", "hunter2"))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error_code"], "ALREADY_EXISTS");

    Ok(())
}

/// Expect 400 BAD_REQUEST for an empty password
#[tokio::test]
async fn register_rejects_empty_password() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let state: AppState = test.to_app_state();

    let resp = register(State(state), register_dto("alice", ""))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 200 with a token in the body and the same token set as an HttpOnly cookie
#[tokio::test]
async fn login_sets_token_cookie() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let state: AppState = test.to_app_state();
    register(State(state.clone()), register_dto("alice", "hunter2"))
        .await
        .unwrap();

    let resp = login(State(state.clone()), login_dto("alice", "hunter2"))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap();
    let body = body_json(resp).await;
    let token = body["data"]["token"].as_str().unwrap();
    assert!(cookie.starts_with(&format!("jwt={}", token)));
    assert!(cookie.contains("HttpOnly"));

    let claims = state.tokens.verify(token).unwrap();
    assert_eq!(claims.username, "alice");

    Ok(())
}

/// Expect 401 INVALID_CREDENTIAL for a wrong password or unknown user
#[tokio::test]
async fn login_rejects_invalid_credentials() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let state: AppState = test.to_app_state();
    register(State(state.clone()), register_dto("alice", "hunter2"))
        .await
        .unwrap();

    for (username, password) in [("alice", "wrong"), ("bob", "hunter2")] {
        let resp = login(State(state.clone()), login_dto(username, password))
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(resp).await;
        assert_eq!(body["error_code"], "INVALID_CREDENTIAL");
    }

    Ok(())
}

/// Expect logout to expire the cookie
#[tokio::test]
async fn logout_clears_cookie() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user_model = test.user().insert_user("alice").await?;
    let state: AppState = test.to_app_state();

    let resp = logout(State(state), auth_user(&user_model))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(cookie.contains("Max-Age=0"));

    Ok(())
}
