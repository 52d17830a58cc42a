use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{AuthDto, LoginDto, RegisterUserDto},
    },
    server::{
        error::AppError, middleware::json::AppJson, model::user::RegisterUserParam,
        service::auth::AuthService, state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates a regular (non-admin) user and returns a bearer token for them, so the
/// client is logged in straight away.
///
/// # Returns
/// - `201 Created` - User created, token issued
/// - `400 Bad Request` - Username, email or password failed validation
/// - `409 Conflict` - Username or email already taken
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "User registered", body = AuthDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 409, description = "Email or username already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .register(RegisterUserParam::from_dto(payload))
        .await?;

    let token = state.tokens.issue(&user)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthDto {
            message: "User registered successfully".to_string(),
            token,
            user: user.into_dto(),
        }),
    ))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - Credentials valid, token issued
/// - `400 Bad Request` - Email or password missing
/// - `401 Unauthorized` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AuthDto),
        (status = 400, description = "Email and password are required", body = ErrorDto),
        (status = 401, description = "Incorrect email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login(&payload.email, payload.password)
        .await?;

    let token = state.tokens.issue(&user)?;

    Ok((
        StatusCode::OK,
        Json(AuthDto {
            message: "Login successful".to_string(),
            token,
            user: user.into_dto(),
        }),
    ))
}

/// Log out.
///
/// Tokens are stateless; the client discards its token.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto)
    ),
)]
pub async fn logout() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(MessageDto {
            message: "Logout successful. Please discard your token.".to_string(),
        }),
    )
}
