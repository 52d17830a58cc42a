use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, leaderboard::LeaderboardDto},
    server::{error::AppError, service::leaderboard::LeaderboardService, state::AppState},
};

/// Tag for grouping leaderboard endpoints in OpenAPI documentation
pub static LEADERBOARD_TAG: &str = "leaderboard";

/// Get the leaderboard.
///
/// Public. Users ranked by number of reel progress entries.
#[utoipa::path(
    get,
    path = "/api/leaderboard",
    tag = LEADERBOARD_TAG,
    responses(
        (status = 200, description = "Leaderboard", body = LeaderboardDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_leaderboard(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let leaderboard = LeaderboardService::new(&state.db).get().await?;

    Ok((StatusCode::OK, Json(leaderboard.into_dto())))
}
