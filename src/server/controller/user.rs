use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{DeletedUserDto, UpdatePasswordDto, UpdateProfileDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            json::AppJson,
        },
        model::user::{UpdatePasswordParam, UpdateProfileParam},
        service::user::UserService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List every user.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Every user, without password hashes
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `404 Not Found` - No users registered
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No users found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_all_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let users = UserService::new(&state.db).get_all().await?;
    let users_dto: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

/// Get the caller's own profile.
#[utoipa::path(
    get,
    path = "/api/users/my-profile",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Caller's profile", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_my_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update the caller's username and/or email.
///
/// # Returns
/// - `200 OK` - Updated profile
/// - `400 Bad Request` - A provided field failed validation
/// - `409 Conflict` - Username or email already taken
#[utoipa::path(
    put,
    path = "/api/users/my-profile",
    tag = USER_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = UserDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 409, description = "Duplicate key violation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_my_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let updated = UserService::new(&state.db)
        .update_profile(UpdateProfileParam::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

/// Delete the caller's own account and reel progress.
#[utoipa::path(
    delete,
    path = "/api/users/my-profile",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Account deleted", body = DeletedUserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_my_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let deleted = UserService::new(&state.db).delete(user.id).await?;

    Ok((StatusCode::OK, Json(deleted_user_dto(deleted))))
}

/// Change the caller's password.
///
/// Regular users must send their current password; admins may omit it.
///
/// # Returns
/// - `200 OK` - Password changed
/// - `400 Bad Request` - New password too weak
/// - `403 Forbidden` - Current password missing or wrong
#[utoipa::path(
    put,
    path = "/api/users/my-profile/update-password",
    tag = USER_TAG,
    request_body = UpdatePasswordDto,
    responses(
        (status = 200, description = "Password updated", body = MessageDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Invalid current password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_my_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<UpdatePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    UserService::new(&state.db)
        .update_password(UpdatePasswordParam {
            user_id: user.id,
            acting_as_admin: user.is_admin,
            current_password: payload.current_password,
            new_password: payload.new_password,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Password updated successfully".to_string(),
        }),
    ))
}

/// Get any user's profile.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = UserDto),
        (status = 400, description = "Malformed user id", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user_id = parse_id(&user_id, "user_id")?;
    let user = UserService::new(&state.db).get_profile(user_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update any user's username and/or email.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = UserDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Duplicate key violation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
    AppJson(payload): AppJson<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user_id = parse_id(&user_id, "user_id")?;
    let updated = UserService::new(&state.db)
        .update_profile(UpdateProfileParam::from_dto(user_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

/// Delete any user.
///
/// Their reel progress goes with them; friendships are left in place.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = DeletedUserDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user_id = parse_id(&user_id, "user_id")?;
    let deleted = UserService::new(&state.db).delete(user_id).await?;

    Ok((StatusCode::OK, Json(deleted_user_dto(deleted))))
}

fn deleted_user_dto(user: crate::server::model::user::User) -> DeletedUserDto {
    DeletedUserDto {
        message: "User profile deleted successfully".to_string(),
        deleted_user: user.into_dto(),
    }
}
