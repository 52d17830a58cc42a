use crate::{
    client::{
        api::helper::{authorized, get, parse_response, put, send_request, serialize_json},
        model::error::ApiError,
    },
    model::{
        api::MessageDto,
        user::{UpdatePasswordDto, UpdateProfileDto, UserDto},
    },
};

pub async fn get_all_users(token: &str) -> Result<Vec<UserDto>, ApiError> {
    let response = send_request(authorized(get("/api/users"), token)).await?;
    parse_response(response).await
}

pub async fn get_my_profile(token: &str) -> Result<UserDto, ApiError> {
    let response = send_request(authorized(get("/api/users/my-profile"), token)).await?;
    parse_response(response).await
}

pub async fn update_my_profile(token: &str, payload: UpdateProfileDto) -> Result<UserDto, ApiError> {
    let body = serialize_json(&payload)?;
    let request = authorized(put("/api/users/my-profile"), token).body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn update_my_password(
    token: &str,
    payload: UpdatePasswordDto,
) -> Result<MessageDto, ApiError> {
    let body = serialize_json(&payload)?;
    let request = authorized(put("/api/users/my-profile/update-password"), token).body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}
