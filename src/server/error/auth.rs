use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No bearer token was present in the configured header.
    #[error("Access denied. No token provided.")]
    MissingToken,

    /// The token failed signature or format verification.
    #[error("Token is invalid. Please log in again.")]
    InvalidToken,

    /// The token's expiry has passed.
    #[error("Your session has expired. Please log in again to refresh.")]
    TokenExpired,

    /// The token is valid but its user has since been deleted.
    #[error("User {0} referenced by token no longer exists")]
    UserNotInDatabase(i32),

    /// The user lacks the permission required for the operation.
    ///
    /// # Fields
    /// - ID of the user who was denied
    /// - Description of what was attempted, logged only
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Login attempted without an email or password.
    #[error("Email and password are required")]
    MissingCredentials,

    /// Unknown email or wrong password at login.
    #[error("Authentication failed: Incorrect email or password")]
    InvalidCredentials,

    /// Wrong current password supplied while changing password.
    #[error("Invalid current password")]
    IncorrectPassword,
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `TokenExpired` / `UserNotInDatabase` / `InvalidCredentials` → 401
/// - `AccessDenied` / `IncorrectPassword` → 403
/// - `MissingCredentials` → 400
///
/// All errors are logged at debug level; access denial details stay server-side.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken | Self::InvalidToken | Self::TokenExpired | Self::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "User no longer exists".to_string())
            }
            Self::AccessDenied(_, _) => {
                (StatusCode::FORBIDDEN, "Admin access required".to_string())
            }
            Self::IncorrectPassword => (StatusCode::FORBIDDEN, self.to_string()),
            Self::MissingCredentials => (StatusCode::BAD_REQUEST, self.to_string()),
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
