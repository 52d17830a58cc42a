use crate::{
    client::{
        api::helper::{authorized, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::{
        api::MessageDto,
        user::{AuthDto, LoginDto, RegisterUserDto},
    },
};

pub async fn register(payload: RegisterUserDto) -> Result<AuthDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/auth/register").body(body)).await?;
    parse_response(response).await
}

pub async fn login(payload: LoginDto) -> Result<AuthDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/auth/login").body(body)).await?;
    parse_response(response).await
}

pub async fn logout(token: &str) -> Result<MessageDto, ApiError> {
    let response = send_request(authorized(post("/api/auth/logout"), token)).await?;
    parse_response(response).await
}
