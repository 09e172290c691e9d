use marquee::{
    model::user::{DeleteAccountDto, RegisterDto},
    server::controller::{
        auth::register,
        user::{delete_me, delete_user},
        util::auth::AdminUser,
    },
};
use sea_orm::EntityTrait;

use super::*;
use crate::util::claims_for;

/// Expect an admin deleting a user to cancel the user's reservations
#[tokio::test]
async fn admin_deletes_user_and_releases_seats() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let admin = test.user().insert_admin("root").await?;
    let user_model = test.user().insert_user("alice").await?;
    let showtime_model = test.catalog().insert_mock_showtime(1).await?;
    test.reservation()
        .insert_reservation(showtime_model.id, user_model.id)
        .await?;
    let state: AppState = test.to_app_state();

    let resp = delete_user(State(state), AdminUser(claims_for(&admin)), Path(user_model.id))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let showtime = entity::prelude::Showtime::find_by_id(showtime_model.id)
        .one(&test.state.db)
        .await?
        .ok_or(TestError::Missing("showtime"))?;
    assert_eq!(showtime.reserved_seats, 0);
    let reservations = entity::prelude::Reservation::find()
        .all(&test.state.db)
        .await?;
    assert!(reservations.is_empty());

    Ok(())
}

/// Expect 404 when an admin deletes a user that does not exist
#[tokio::test]
async fn admin_delete_unknown_user_is_not_found() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let admin = test.user().insert_admin("root").await?;
    let state: AppState = test.to_app_state();

    let resp = delete_user(State(state), AdminUser(claims_for(&admin)), Path(admin.id + 1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect self-deletion to require the correct password
#[tokio::test]
async fn delete_me_checks_password() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let state: AppState = test.to_app_state();
    register(
        State(state.clone()),
        Json(RegisterDto {
            username: "alice".to_string(),
            password: "hunter2".to_string(),
        }),
    )
    .await
    .unwrap();
    let user_model = entity::prelude::MarqueeUser::find()
        .one(&test.state.db)
        .await?
        .ok_or(TestError::Missing("user"))?;

    let wrong = delete_me(
        State(state.clone()),
        auth_user(&user_model),
        Json(DeleteAccountDto {
            password: "wrong".to_string(),
        }),
    )
    .await
    .into_response();

    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);

    let right = delete_me(
        State(state),
        auth_user(&user_model),
        Json(DeleteAccountDto {
            password: "hunter2".to_string(),
        }),
    )
    .await
    .into_response();

    assert_eq!(right.status(), StatusCode::OK);
    let remaining = entity::prelude::MarqueeUser::find_by_id(user_model.id)
        .one(&test.state.db)
        .await?;
    assert!(remaining.is_none());

    Ok(())
}
