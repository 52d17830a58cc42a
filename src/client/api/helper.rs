use crate::{client::model::error::ApiError, model::api::ErrorDto};
use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Parses a JSON response, turning non-2xx statuses into an [`ApiError`] carrying
/// the server's `error` message.
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        response.json::<T>().await.map_err(|e| ApiError {
            status: 500,
            message: format!("Failed to parse response: {}", e),
        })
    } else {
        let message = if let Ok(error_dto) = response.json::<ErrorDto>().await {
            match error_dto.errors.is_empty() {
                true => error_dto.error,
                false => format!("{}: {}", error_dto.error, error_dto.errors.join(", ")),
            }
        } else {
            response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string())
        };

        Err(ApiError { status, message })
    }
}

pub fn get(url: &str) -> Request {
    Request::get(url)
}

pub fn post(url: &str) -> Request {
    Request::post(url).header("Content-Type", "application/json")
}

pub fn put(url: &str) -> Request {
    Request::put(url).header("Content-Type", "application/json")
}

pub fn patch(url: &str) -> Request {
    Request::patch(url).header("Content-Type", "application/json")
}

pub fn delete(url: &str) -> Request {
    Request::delete(url)
}

/// Attaches the session's bearer token.
pub fn authorized(request: Request, token: &str) -> Request {
    request.header("Authorization", &format!("Bearer {}", token))
}

/// Send a request and handle common errors
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to send request: {}", e),
    })
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to serialize request: {}", e),
    })
}
