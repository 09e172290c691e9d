use axum::extract::Query;
use marquee::{
    model::catalog::{MovieQuery, UpsertMovieDto},
    server::controller::{
        movie::{create_movie, delete_movie, get_movie, list_movies},
        util::auth::AdminUser,
    },
};

use super::*;
use crate::util::claims_for;

/// Expect 201 when an admin creates a movie, and 409 for the same title again
#[tokio::test]
async fn create_movie_rejects_duplicate_title() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let admin = test.user().insert_admin("root").await?;
    let state: AppState = test.to_app_state();
    let body = UpsertMovieDto {
        title: "Metropolis".to_string(),
        description: "Silent classic".to_string(),
    };

    let created = create_movie(
        State(state.clone()),
        AdminUser(claims_for(&admin)),
        Json(body.clone()),
    )
    .await
    .into_response();
    let duplicate = create_movie(State(state), AdminUser(claims_for(&admin)), Json(body))
        .await
        .into_response();

    assert_eq!(created.status(), StatusCode::CREATED);
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);
    let body = body_json(duplicate).await;
    assert_eq!(body["error_code"], "ALREADY_EXISTS");

    Ok(())
}

/// Expect the title filter to return the matching movie only, or nothing
#[tokio::test]
async fn list_movies_filters_by_title() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user_model = test.user().insert_user("alice").await?;
    test.catalog().insert_movie("Metropolis").await?;
    test.catalog().insert_movie("Nosferatu").await?;
    let state: AppState = test.to_app_state();

    let all = list_movies(
        State(state.clone()),
        auth_user(&user_model),
        Query(MovieQuery::default()),
    )
    .await
    .into_response();
    let filtered = list_movies(
        State(state.clone()),
        auth_user(&user_model),
        Query(MovieQuery {
            title: Some("Nosferatu".to_string()),
        }),
    )
    .await
    .into_response();
    let missing = list_movies(
        State(state),
        auth_user(&user_model),
        Query(MovieQuery {
            title: Some("Vertigo".to_string()),
        }),
    )
    .await
    .into_response();

    assert_eq!(body_json(all).await["data"].as_array().map(Vec::len), Some(2));
    let filtered = body_json(filtered).await;
    assert_eq!(filtered["data"][0]["title"], "Nosferatu");
    assert_eq!(filtered["data"].as_array().map(Vec::len), Some(1));
    assert_eq!(body_json(missing).await["data"].as_array().map(Vec::len), Some(0));

    Ok(())
}

/// Expect 404 for a movie that does not exist
#[tokio::test]
async fn get_movie_not_found() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user_model = test.user().insert_user("alice").await?;
    let state: AppState = test.to_app_state();

    let resp = get_movie(State(state), auth_user(&user_model), Path(1))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 409 IN_USE when deleting a movie with showtimes
#[tokio::test]
async fn delete_movie_in_use() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let admin = test.user().insert_admin("root").await?;
    let showtime_model = test.catalog().insert_mock_showtime(10).await?;
    let state: AppState = test.to_app_state();

    let resp = delete_movie(
        State(state),
        AdminUser(claims_for(&admin)),
        Path(showtime_model.movie_id),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body = body_json(resp).await;
    assert_eq!(body["error_code"], "IN_USE");

    Ok(())
}
