use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::leaderboard::LeaderboardDto,
};

pub async fn get_leaderboard() -> Result<LeaderboardDto, ApiError> {
    let response = send_request(get("/api/leaderboard")).await?;
    parse_response(response).await
}
