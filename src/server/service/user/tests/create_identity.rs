use super::*;

/// Expect an account to be created with a hashed password
#[tokio::test]
async fn creates_identity() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::MarqueeUser)?;

    let user_service = UserService::new(&test.state.db);
    let result = user_service
        .create_identity("alice", "hunter22", Role::User)
        .await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.name, "alice");
    assert_ne!(user.password_hash, "hunter22");
    assert!(user.password_hash.starts_with("$argon2id$"));

    Ok(())
}

/// Expect AlreadyExists when the username is taken
#[tokio::test]
async fn fails_for_taken_username() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::MarqueeUser)?;
    test.user().insert_user("alice").await?;

    let user_service = UserService::new(&test.state.db);
    let result = user_service
        .create_identity("alice", "hunter22", Role::User)
        .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::AlreadyExists(_)))
    ));

    Ok(())
}

/// Expect EmptyCredential for a blank username
#[tokio::test]
async fn fails_for_blank_username() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::MarqueeUser)?;

    let user_service = UserService::new(&test.state.db);
    let result = user_service.create_identity("  ", "hunter22", Role::User).await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::EmptyCredential))
    ));

    Ok(())
}

/// Expect the bootstrap administrator to be created once
#[tokio::test]
async fn ensures_admin_once() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::MarqueeUser)?;

    let user_service = UserService::new(&test.state.db);
    let first = user_service.ensure_admin("root", "hunter22").await.unwrap();
    let second = user_service.ensure_admin("root", "hunter22").await.unwrap();

    assert!(first.is_some());
    assert!(second.is_none());
    assert_eq!(user_service.role_of("root").await.unwrap(), Role::Admin);

    Ok(())
}
