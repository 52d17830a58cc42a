use crate::{
    client::{
        api::helper::{
            authorized, delete, get, parse_response, patch, post, send_request, serialize_json,
        },
        model::error::ApiError,
    },
    model::{
        api::MessageDto,
        reel_progress::{
            AddReelProgressDto, AddedReelProgressDto, ReelProgressDto, UpdateReelProgressDto,
        },
    },
};

/// Fetches the caller's reel. The server answers 404 for an empty reel, which is
/// reported here as an empty list.
pub async fn get_reel_progress(token: &str) -> Result<Vec<ReelProgressDto>, ApiError> {
    let response = send_request(authorized(get("/api/reel-progress"), token)).await?;
    match parse_response(response).await {
        Err(err) if err.is_not_found() => Ok(Vec::new()),
        result => result,
    }
}

pub async fn add_reel_progress(
    token: &str,
    payload: AddReelProgressDto,
) -> Result<AddedReelProgressDto, ApiError> {
    let body = serialize_json(&payload)?;
    let request = authorized(post("/api/reel-progress"), token).body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn update_reel_progress(
    token: &str,
    movie_id: i32,
    payload: UpdateReelProgressDto,
) -> Result<ReelProgressDto, ApiError> {
    let url = format!("/api/reel-progress/{}", movie_id);
    let body = serialize_json(&payload)?;
    let response = send_request(authorized(patch(&url), token).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_reel_progress(token: &str, movie_id: i32) -> Result<MessageDto, ApiError> {
    let url = format!("/api/reel-progress/{}", movie_id);
    let response = send_request(authorized(delete(&url), token)).await?;
    parse_response(response).await
}
