use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        reel_progress::{
            AddReelProgressDto, AddedReelProgressDto, ReelProgressDto, UpdateReelProgressDto,
            UserReelProgressDto, REEL_PROGRESS_FIELDS,
        },
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            json::{from_restricted_value, AppJson},
        },
        model::reel_progress::{AddReelProgressParam, UpdateReelProgressParam},
        service::reel_progress::ReelProgressService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping reel progress endpoints in OpenAPI documentation
pub static REEL_PROGRESS_TAG: &str = "reel-progress";

/// Query parameters for removing any user's record.
#[derive(Deserialize, IntoParams)]
pub struct AdminRemoveParams {
    pub user_id: Option<String>,
    pub movie_id: Option<String>,
}

/// Get the caller's reel progress.
///
/// # Returns
/// - `200 OK` - The caller's entries
/// - `404 Not Found` - The caller has no entries yet
#[utoipa::path(
    get,
    path = "/api/reel-progress",
    tag = REEL_PROGRESS_TAG,
    responses(
        (status = 200, description = "Caller's reel progress", body = Vec<ReelProgressDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "No Reel Progress records found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_reel_progress(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let entries = ReelProgressService::new(&state.db).list(user.id).await?;
    let entries_dto: Vec<ReelProgressDto> = entries.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(entries_dto)))
}

/// Add a movie to the caller's reel.
///
/// The body may only carry `movie`, `rating` and `is_watched`.
///
/// # Returns
/// - `201 Created` - Movie added
/// - `400 Bad Request` - Unexpected fields, or rating outside 1 to 5
/// - `404 Not Found` - No movie with that id
/// - `409 Conflict` - Movie already in the caller's reel
#[utoipa::path(
    post,
    path = "/api/reel-progress",
    tag = REEL_PROGRESS_TAG,
    request_body = AddReelProgressDto,
    responses(
        (status = 201, description = "Movie added to reel", body = AddedReelProgressDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Movie not found", body = ErrorDto),
        (status = 409, description = "Movie already in your reel", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn add_reel_progress(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(body): AppJson<Value>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let payload: AddReelProgressDto = from_restricted_value(body, &REEL_PROGRESS_FIELDS)?;

    let movie = ReelProgressService::new(&state.db)
        .add(AddReelProgressParam {
            user_id: user.id,
            movie_id: payload.movie,
            rating: payload.rating,
            is_watched: payload.is_watched.unwrap_or(false),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AddedReelProgressDto {
            message: format!("{} added to your Reel Progress", movie.title),
            added_movie_id: movie.id,
        }),
    ))
}

/// Set or clear the caller's rating for a movie.
///
/// `rating` must be present; `null` clears it.
///
/// # Returns
/// - `200 OK` - Updated entry
/// - `400 Bad Request` - Rating missing or out of range, or unexpected fields
/// - `404 Not Found` - Movie not in the caller's reel
#[utoipa::path(
    patch,
    path = "/api/reel-progress/{movie_id}",
    tag = REEL_PROGRESS_TAG,
    params(
        ("movie_id" = i32, Path, description = "Movie ID")
    ),
    request_body = UpdateReelProgressDto,
    responses(
        (status = 200, description = "Rating updated", body = ReelProgressDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Movie not found in your Reel Progress", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_reel_progress(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(movie_id): Path<String>,
    AppJson(body): AppJson<Value>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let movie_id = parse_id(&movie_id, "movie_id")?;
    let payload: UpdateReelProgressDto = from_restricted_value(body, &REEL_PROGRESS_FIELDS)?;

    let Some(rating) = payload.rating else {
        return Err(AppError::bad_request("Rating is required"));
    };

    let entry = ReelProgressService::new(&state.db)
        .update(UpdateReelProgressParam {
            user_id: user.id,
            movie_id,
            rating,
            is_watched: payload.is_watched,
        })
        .await?;

    Ok((StatusCode::OK, Json(entry.into_dto())))
}

/// Remove a movie from the caller's reel.
#[utoipa::path(
    delete,
    path = "/api/reel-progress/{movie_id}",
    tag = REEL_PROGRESS_TAG,
    params(
        ("movie_id" = i32, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Record deleted", body = MessageDto),
        (status = 400, description = "Malformed movie id", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Movie not found in your Reel Progress", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_reel_progress(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(movie_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let movie_id = parse_id(&movie_id, "movie_id")?;
    ReelProgressService::new(&state.db)
        .remove(user.id, movie_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Reel Progress record deleted successfully".to_string(),
        }),
    ))
}

/// Get every user's reel progress with movie titles and years.
///
/// Users without records, and records whose movie no longer exists, are left out.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/reel-progress/admin",
    tag = REEL_PROGRESS_TAG,
    responses(
        (status = 200, description = "Reel progress grouped by user", body = Vec<UserReelProgressDto>),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn admin_get_all_reel_progress(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let groups = ReelProgressService::new(&state.db).admin_all().await?;
    let groups_dto: Vec<UserReelProgressDto> = groups.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(groups_dto)))
}

/// Remove any user's record.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Record deleted
/// - `400 Bad Request` - A query parameter is missing or not an integer
/// - `404 Not Found` - No such user, or no record for that movie
#[utoipa::path(
    delete,
    path = "/api/reel-progress/admin/queries",
    tag = REEL_PROGRESS_TAG,
    params(AdminRemoveParams),
    responses(
        (status = 200, description = "Record deleted", body = MessageDto),
        (status = 400, description = "Both user_id and movie_id query parameters required", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "User or record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn admin_delete_reel_progress(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<AdminRemoveParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let (Some(user_id), Some(movie_id)) = (params.user_id, params.movie_id) else {
        return Err(AppError::bad_request(
            "Both user_id and movie_id query parameters required",
        ));
    };

    let user_id = parse_id(&user_id, "user_id")?;
    let movie_id = parse_id(&movie_id, "movie_id")?;

    ReelProgressService::new(&state.db)
        .admin_remove(user_id, movie_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "User Reel Progress record deleted successfully".to_string(),
        }),
    ))
}
