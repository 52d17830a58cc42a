use axum::http::{header, HeaderMap, HeaderValue};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    model::user::User,
    service::token::TokenService,
};
use test_utils::{builder::TestBuilder, factory};

mod require;

fn token_service(expiry_hours: i64) -> TokenService {
    TokenService::new("k3P9!x-test-secret", "Authorization", expiry_hours)
}

fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
