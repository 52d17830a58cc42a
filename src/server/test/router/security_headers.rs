use super::*;

fn assert_security_headers(response: &Response) {
    let headers = response.headers();

    assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY");
    assert_eq!(headers[header::CONTENT_SECURITY_POLICY], "default-src 'self'");
}

/// Tests response headers on a successful API call.
///
/// Expected: nosniff, DENY and the default-src CSP are all present
#[tokio::test]
async fn sets_security_headers_on_success() {
    let (_test, app, _tokens) = test_app().await;

    let response = send(&app, get("/api/leaderboard")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_security_headers(&response);
}

/// Tests response headers on error responses.
///
/// Expected: the same headers on a 404 and a 401
#[tokio::test]
async fn sets_security_headers_on_errors() {
    let (_test, app, _tokens) = test_app().await;

    assert_security_headers(&send(&app, get("/api/nope")).await);
    assert_security_headers(&send(&app, get("/api/reel-progress")).await);
}
