use marquee::{
    model::catalog::UpdateShowtimeDto,
    server::controller::{
        showtime::{get_availability, update_showtime},
        util::auth::AdminUser,
    },
};

use super::*;
use crate::util::claims_for;

/// Expect capacity and remaining tickets reflecting reservations held
#[tokio::test]
async fn availability_counts_reservations() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user_model = test.user().insert_user("alice").await?;
    let showtime_model = test.catalog().insert_mock_showtime(3).await?;
    test.reservation()
        .insert_reservation(showtime_model.id, user_model.id)
        .await?;
    let state: AppState = test.to_app_state();

    let resp = get_availability(State(state), auth_user(&user_model), Path(showtime_model.id))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["capacity"], 3);
    assert_eq!(body["data"]["remaining_tickets"], 2);

    Ok(())
}

/// Expect 404 SHOWTIME_NOT_FOUND for availability of an unknown showtime
#[tokio::test]
async fn availability_of_unknown_showtime() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user_model = test.user().insert_user("alice").await?;
    let state: AppState = test.to_app_state();

    let resp = get_availability(State(state), auth_user(&user_model), Path(99))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["error_code"], "SHOWTIME_NOT_FOUND");

    Ok(())
}

/// Expect 400 when the update carries no field
#[tokio::test]
async fn update_showtime_requires_a_field() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let admin = test.user().insert_admin("root").await?;
    let showtime_model = test.catalog().insert_mock_showtime(3).await?;
    let state: AppState = test.to_app_state();

    let resp = update_showtime(
        State(state),
        AdminUser(claims_for(&admin)),
        Path(showtime_model.id),
        Json(UpdateShowtimeDto::default()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
