use crate::{
    client::{
        api::helper::{authorized, delete, get, parse_response, post, put, send_request},
        model::error::ApiError,
    },
    model::friendship::FriendshipDto,
};

pub async fn get_my_friendships(token: &str) -> Result<Vec<FriendshipDto>, ApiError> {
    let response = send_request(authorized(get("/api/friendships/my-friends"), token)).await?;
    parse_response(response).await
}

pub async fn send_friend_request(token: &str, user_id: i32) -> Result<FriendshipDto, ApiError> {
    let url = format!("/api/friendships/{}", user_id);
    let response = send_request(authorized(post(&url), token)).await?;
    parse_response(response).await
}

pub async fn accept_friend_request(token: &str, user_id: i32) -> Result<FriendshipDto, ApiError> {
    let url = format!("/api/friendships/my-friends/{}", user_id);
    let response = send_request(authorized(put(&url), token)).await?;
    parse_response(response).await
}

pub async fn remove_friendship(token: &str, user_id: i32) -> Result<FriendshipDto, ApiError> {
    let url = format!("/api/friendships/my-friends/{}", user_id);
    let response = send_request(authorized(delete(&url), token)).await?;
    parse_response(response).await
}
