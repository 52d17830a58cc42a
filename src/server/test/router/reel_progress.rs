use super::*;

/// Tests updating a reel entry with a body that has no rating key.
///
/// Expected: 400 "Rating is required"
#[tokio::test]
async fn update_without_rating_key_is_rejected() -> Result<(), AppError> {
    let (test, app, tokens) = test_app().await;
    let bearer = bearer_for(&test, &tokens, false).await?;

    let request = Request::builder()
        .method("PATCH")
        .uri("/api/reel-progress/1")
        .header(header::AUTHORIZATION, bearer)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"is_watched": true}"#))
        .unwrap();

    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_body(response).await.error, "Rating is required");

    Ok(())
}

/// Tests the admin removal without both query parameters.
///
/// Expected: 400 for a missing movie_id, a missing user_id and no parameters at all
#[tokio::test]
async fn admin_delete_requires_both_query_params() -> Result<(), AppError> {
    let (test, app, tokens) = test_app().await;
    let bearer = bearer_for(&test, &tokens, true).await?;

    for uri in [
        "/api/reel-progress/admin/queries?user_id=1",
        "/api/reel-progress/admin/queries?movie_id=1",
        "/api/reel-progress/admin/queries",
    ] {
        let request = Request::builder()
            .method("DELETE")
            .uri(uri)
            .header(header::AUTHORIZATION, &bearer)
            .body(Body::empty())
            .unwrap();

        let response = send(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(
            error_body(response).await.error,
            "Both user_id and movie_id query parameters required"
        );
    }

    Ok(())
}

/// Tests the admin removal called by a regular user.
///
/// Expected: 403 before the query parameters are looked at
#[tokio::test]
async fn admin_delete_denies_regular_users() -> Result<(), AppError> {
    let (test, app, tokens) = test_app().await;
    let bearer = bearer_for(&test, &tokens, false).await?;

    let request = Request::builder()
        .method("DELETE")
        .uri("/api/reel-progress/admin/queries")
        .header(header::AUTHORIZATION, bearer)
        .body(Body::empty())
        .unwrap();

    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    Ok(())
}
