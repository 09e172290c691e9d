use marquee::{
    model::catalog::UpsertHallDto,
    server::controller::{
        hall::{create_hall, update_hall},
        util::auth::AdminUser,
    },
};

use super::*;
use crate::util::claims_for;

/// Expect 400 BAD_REQUEST when the seats do not fit the layout
#[tokio::test]
async fn create_hall_rejects_impossible_layout() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let admin = test.user().insert_admin("root").await?;
    let state: AppState = test.to_app_state();

    let resp = create_hall(
        State(state),
        AdminUser(claims_for(&admin)),
        Json(UpsertHallDto {
            name: "Hall 1".to_string(),
            seat_count: 101,
            rows: 10,
            cols: 10,
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error_code"], "BAD_REQUEST");

    Ok(())
}

/// Expect 409 CAPACITY_BELOW_RESERVED when shrinking a hall below seats sold
#[tokio::test]
async fn update_hall_refuses_capacity_below_reserved() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let admin = test.user().insert_admin("root").await?;
    let showtime_model = test.catalog().insert_mock_showtime(5).await?;
    for name in ["alice", "bob"] {
        let user_model = test.user().insert_user(name).await?;
        test.reservation()
            .insert_reservation(showtime_model.id, user_model.id)
            .await?;
    }
    let state: AppState = test.to_app_state();

    let resp = update_hall(
        State(state),
        AdminUser(claims_for(&admin)),
        Path(showtime_model.hall_id),
        Json(UpsertHallDto {
            name: "Shrunk".to_string(),
            seat_count: 1,
            rows: 1,
            cols: 1,
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body = body_json(resp).await;
    assert_eq!(body["error_code"], "CAPACITY_BELOW_RESERVED");

    Ok(())
}
