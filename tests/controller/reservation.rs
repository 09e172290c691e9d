use marquee::{
    model::reservation::CreateReservationDto,
    server::controller::reservation::{
        cancel_reservation, create_reservation, get_my_reservations, get_reservation,
    },
};

use super::*;

/// Expect 201 for the first ticket and 409 NO_TICKETS_AVAILABLE once sold out
#[tokio::test]
async fn create_reservation_until_sold_out() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let alice = test.user().insert_user("alice").await?;
    let bob = test.user().insert_user("bob").await?;
    let showtime_model = test.catalog().insert_mock_showtime(1).await?;
    let state: AppState = test.to_app_state();
    let body = CreateReservationDto {
        showtime_id: showtime_model.id,
    };

    let first = create_reservation(State(state.clone()), auth_user(&alice), Json(body.clone()))
        .await
        .into_response();
    let second = create_reservation(State(state), auth_user(&bob), Json(body))
        .await
        .into_response();

    assert_eq!(first.status(), StatusCode::CREATED);
    let first = body_json(first).await;
    assert_eq!(first["data"]["user_id"], alice.id);
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let second = body_json(second).await;
    assert_eq!(second["error_code"], "NO_TICKETS_AVAILABLE");

    Ok(())
}

/// Expect 409 ALREADY_RESERVED for a second ticket to the same showtime
#[tokio::test]
async fn create_reservation_rejects_double_booking() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let alice = test.user().insert_user("alice").await?;
    let showtime_model = test.catalog().insert_mock_showtime(5).await?;
    let state: AppState = test.to_app_state();
    let body = CreateReservationDto {
        showtime_id: showtime_model.id,
    };

    create_reservation(State(state.clone()), auth_user(&alice), Json(body.clone()))
        .await
        .unwrap();
    let resp = create_reservation(State(state), auth_user(&alice), Json(body))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body = body_json(resp).await;
    assert_eq!(body["error_code"], "ALREADY_RESERVED");

    Ok(())
}

/// Expect only the caller's reservations
#[tokio::test]
async fn lists_own_reservations() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let alice = test.user().insert_user("alice").await?;
    let bob = test.user().insert_user("bob").await?;
    let showtime_model = test.catalog().insert_mock_showtime(5).await?;
    test.reservation()
        .insert_reservation(showtime_model.id, alice.id)
        .await?;
    test.reservation()
        .insert_reservation(showtime_model.id, bob.id)
        .await?;
    let state: AppState = test.to_app_state();

    let resp = get_my_reservations(State(state), auth_user(&alice))
        .await
        .into_response();

    let body = body_json(resp).await;
    let reservations = body["data"].as_array().unwrap();
    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0]["user_id"], alice.id);

    Ok(())
}

/// Expect 403 when another user reads or cancels a reservation
#[tokio::test]
async fn other_user_cannot_access_reservation() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let alice = test.user().insert_user("alice").await?;
    let mallory = test.user().insert_user("mallory").await?;
    let showtime_model = test.catalog().insert_mock_showtime(5).await?;
    let reservation = test
        .reservation()
        .insert_reservation(showtime_model.id, alice.id)
        .await?;
    let state: AppState = test.to_app_state();

    let read = get_reservation(State(state.clone()), auth_user(&mallory), Path(reservation.id))
        .await
        .into_response();
    let cancel = cancel_reservation(State(state), auth_user(&mallory), Path(reservation.id))
        .await
        .into_response();

    assert_eq!(read.status(), StatusCode::FORBIDDEN);
    assert_eq!(cancel.status(), StatusCode::FORBIDDEN);
    let body = body_json(cancel).await;
    assert_eq!(body["error_code"], "FORBIDDEN");

    Ok(())
}

/// Expect the owner and an admin to be able to cancel, restoring the seat
#[tokio::test]
async fn owner_and_admin_can_cancel() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let alice = test.user().insert_user("alice").await?;
    let bob = test.user().insert_user("bob").await?;
    let admin = test.user().insert_admin("root").await?;
    let showtime_model = test.catalog().insert_mock_showtime(2).await?;
    let alice_reservation = test
        .reservation()
        .insert_reservation(showtime_model.id, alice.id)
        .await?;
    let bob_reservation = test
        .reservation()
        .insert_reservation(showtime_model.id, bob.id)
        .await?;
    let state: AppState = test.to_app_state();

    let by_owner = cancel_reservation(
        State(state.clone()),
        auth_user(&alice),
        Path(alice_reservation.id),
    )
    .await
    .into_response();
    let by_admin = cancel_reservation(
        State(state.clone()),
        auth_user(&admin),
        Path(bob_reservation.id),
    )
    .await
    .into_response();
    let again = cancel_reservation(State(state), auth_user(&alice), Path(alice_reservation.id))
        .await
        .into_response();

    assert_eq!(by_owner.status(), StatusCode::OK);
    assert_eq!(by_admin.status(), StatusCode::OK);
    assert_eq!(again.status(), StatusCode::NOT_FOUND);

    Ok(())
}
