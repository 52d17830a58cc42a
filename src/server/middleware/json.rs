use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::server::error::{validation::ValidationError, AppError};

/// JSON body extractor whose rejections use the application's error format.
///
/// Malformed bodies and bodies with missing or mistyped fields become a 400
/// "Schema validation failed" carrying the parser's message.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ValidationError::Schema(vec![rejection.body_text()]).into()),
        }
    }
}

/// Deserializes a JSON object whose keys must all be in `allowed`.
///
/// # Returns
/// - `Ok(T)` - The body, deserialized
/// - `Err(ValidationError::UnexpectedFields)` - The body carried other keys, listed sorted
/// - `Err(ValidationError::Schema)` - Not an object, or a field had the wrong type
pub fn from_restricted_value<T: DeserializeOwned>(
    body: Value,
    allowed: &[&str],
) -> Result<T, ValidationError> {
    let Value::Object(fields) = &body else {
        return Err(ValidationError::Schema(vec![
            "Request body must be a JSON object".to_string(),
        ]));
    };

    let mut unexpected: Vec<String> = fields
        .keys()
        .filter(|key| !allowed.contains(&key.as_str()))
        .cloned()
        .collect();

    if !unexpected.is_empty() {
        unexpected.sort();
        return Err(ValidationError::UnexpectedFields(unexpected));
    }

    serde_json::from_value(body).map_err(|e| ValidationError::Schema(vec![e.to_string()]))
}
