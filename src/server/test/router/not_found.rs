use super::*;

/// Tests a path under /api that no route handles.
///
/// Expected: 404 with the JSON error body
#[tokio::test]
async fn unknown_api_path_returns_json_404() {
    let (_test, app, _tokens) = test_app().await;

    for uri in ["/api/nope", "/api/movies/reel-canon/extra/segments"] {
        let response = send(&app, get(uri)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(
            error_body(response).await,
            ErrorDto::new("No route with that path found!")
        );
    }
}

/// Tests that known routes and the API docs still resolve next to the catch-all.
///
/// Expected: 200 for the leaderboard and the OpenAPI document, 401 for a protected route
#[tokio::test]
async fn catch_all_leaves_registered_routes_reachable() {
    let (_test, app, _tokens) = test_app().await;

    let leaderboard = send(&app, get("/api/leaderboard")).await;
    assert_eq!(leaderboard.status(), StatusCode::OK);

    let openapi = send(&app, get("/api/openapi.json")).await;
    assert_eq!(openapi.status(), StatusCode::OK);

    let users = send(&app, get("/api/users")).await;
    assert_eq!(users.status(), StatusCode::UNAUTHORIZED);
}
