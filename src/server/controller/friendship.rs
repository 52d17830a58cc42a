use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        friendship::{AcceptFriendshipDto, FriendshipDto, RemoveFriendshipDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            json::AppJson,
        },
        model::friendship::Friendship,
        service::friendship::FriendshipService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping friendship endpoints in OpenAPI documentation
pub static FRIENDSHIP_TAG: &str = "friendship";

fn into_dtos(friendships: Vec<Friendship>) -> Vec<FriendshipDto> {
    friendships.into_iter().map(|f| f.into_dto()).collect()
}

/// List every friendship.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/friendships",
    tag = FRIENDSHIP_TAG,
    responses(
        (status = 200, description = "All friendships", body = Vec<FriendshipDto>),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_all_friendships(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let friendships = FriendshipService::new(&state.db).list_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(friendships))))
}

/// List the caller's friendships and pending requests, sent or received.
#[utoipa::path(
    get,
    path = "/api/friendships/my-friends",
    tag = FRIENDSHIP_TAG,
    responses(
        (status = 200, description = "Caller's friendships", body = Vec<FriendshipDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_my_friendships(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let friendships = FriendshipService::new(&state.db)
        .list_for_user(user.id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(friendships))))
}

/// List any user's friendships.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/friendships/{user_id}",
    tag = FRIENDSHIP_TAG,
    params(
        ("user_id" = i32, Path, description = "User whose friendships to list")
    ),
    responses(
        (status = 200, description = "User's friendships", body = Vec<FriendshipDto>),
        (status = 400, description = "Malformed user id", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user_friendships(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user_id = parse_id(&user_id, "user_id")?;
    let friendships = FriendshipService::new(&state.db)
        .list_for_user(user_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(friendships))))
}

/// Send a friend request to the user in the path.
///
/// # Returns
/// - `201 Created` - The pending request
/// - `400 Bad Request` - Request to oneself, or recipient does not exist
/// - `409 Conflict` - The two users already have a friendship or pending request
#[utoipa::path(
    post,
    path = "/api/friendships/{user_id}",
    tag = FRIENDSHIP_TAG,
    params(
        ("user_id" = i32, Path, description = "Recipient of the friend request")
    ),
    responses(
        (status = 201, description = "Friend request sent", body = FriendshipDto),
        (status = 400, description = "Invalid recipient", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 409, description = "Duplicate key violation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_friendship(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(recipient_user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let recipient_user_id = parse_id(&recipient_user_id, "recipient_user_id")?;
    let friendship = FriendshipService::new(&state.db)
        .create(user.id, recipient_user_id)
        .await?;

    Ok((StatusCode::CREATED, Json(friendship.into_dto())))
}

/// Accept a friend request the user in the path sent to the caller.
#[utoipa::path(
    put,
    path = "/api/friendships/my-friends/{user_id}",
    tag = FRIENDSHIP_TAG,
    params(
        ("user_id" = i32, Path, description = "User who sent the request")
    ),
    responses(
        (status = 200, description = "Friend request accepted", body = FriendshipDto),
        (status = 400, description = "No pending request from that user", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn accept_my_friendship(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(requester_user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let requester_user_id = parse_id(&requester_user_id, "requester_user_id")?;
    let friendship = FriendshipService::new(&state.db)
        .accept(requester_user_id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(friendship.into_dto())))
}

/// Accept a pending friend request on behalf of its recipient.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/friendships",
    tag = FRIENDSHIP_TAG,
    request_body = AcceptFriendshipDto,
    responses(
        (status = 200, description = "Friend request accepted", body = FriendshipDto),
        (status = 400, description = "No such pending request", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn accept_friendship(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<AcceptFriendshipDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let friendship = FriendshipService::new(&state.db)
        .accept(payload.requester_user_id, payload.recipient_user_id)
        .await?;

    Ok((StatusCode::OK, Json(friendship.into_dto())))
}

/// Remove the caller's friendship or pending request with the user in the path.
#[utoipa::path(
    delete,
    path = "/api/friendships/my-friends/{user_id}",
    tag = FRIENDSHIP_TAG,
    params(
        ("user_id" = i32, Path, description = "The other user of the friendship")
    ),
    responses(
        (status = 200, description = "Friendship removed", body = FriendshipDto),
        (status = 400, description = "Friendship not found", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn remove_my_friendship(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(other_user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let other_user_id = parse_id(&other_user_id, "other_user_id")?;
    let friendship = FriendshipService::new(&state.db)
        .remove(user.id, other_user_id)
        .await?;

    Ok((StatusCode::OK, Json(friendship.into_dto())))
}

/// Remove the friendship between any two users.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/friendships",
    tag = FRIENDSHIP_TAG,
    request_body = RemoveFriendshipDto,
    responses(
        (status = 200, description = "Friendship removed", body = FriendshipDto),
        (status = 400, description = "Friendship not found", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn remove_friendship(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<RemoveFriendshipDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let friendship = FriendshipService::new(&state.db)
        .remove(payload.user_id, payload.other_user_id)
        .await?;

    Ok((StatusCode::OK, Json(friendship.into_dto())))
}
