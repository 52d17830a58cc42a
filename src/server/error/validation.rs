use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{api::ErrorDto, reel_progress::REEL_PROGRESS_FIELDS};

/// Request data rejected before reaching the database. Always a 400.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// One or more field rules failed; each entry is a user facing message.
    #[error("Schema validation failed")]
    Schema(Vec<String>),

    /// A path or query value could not be converted to its expected type.
    #[error("Cast error: value ({value}) is not valid for {path}")]
    Cast { value: String, path: String },

    /// Friend request where requester and recipient are the same user.
    #[error("A user cannot send a friend request to themselves.")]
    SelfFriendship,

    /// Reel progress body carried keys outside the accepted set.
    #[error("Unexpected field(s) in reelProgress: {}", .0.join(", "))]
    UnexpectedFields(Vec<String>),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let body = match &self {
            Self::Schema(errors) => ErrorDto::with_errors(self.to_string(), errors.clone()),
            Self::Cast { value, path } => ErrorDto::with_errors(
                self.to_string(),
                vec![format!("Expected an integer id for {}, received \"{}\"", path, value)],
            ),
            Self::SelfFriendship => ErrorDto::new(self.to_string()),
            Self::UnexpectedFields(_) => ErrorDto::with_errors(
                self.to_string(),
                vec![format!("Expected fields: {}", REEL_PROGRESS_FIELDS.join(", "))],
            ),
        };

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Flattens field errors into user facing messages, sorted by field name.
impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let messages = fields
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("Invalid value for {}", field),
                })
            })
            .collect();

        Self::Schema(messages)
    }
}

impl From<validator::ValidationErrors> for super::AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::ValidationErr(errors.into())
    }
}
