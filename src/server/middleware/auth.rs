use axum::http::HeaderMap;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::token::TokenService,
};

const BEARER_PREFIX: &str = "Bearer ";

pub enum Permission {
    Admin,
}

/// Resolves the caller from the bearer token in the request headers.
///
/// The token only proves who the caller was when it was issued, so the user is
/// always re-read from the database before any permission check.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self { db, tokens, headers }
    }

    /// Verifies the token and checks the requested permissions.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user, freshly loaded from the database
    /// - `Err(AuthError::MissingToken)` - No token in the configured header
    /// - `Err(AuthError::InvalidToken | TokenExpired)` - Token failed verification
    /// - `Err(AuthError::UserNotInDatabase)` - The token's user has been deleted
    /// - `Err(AuthError::AccessDenied)` - The user lacks a requested permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let token = self.bearer_token().ok_or(AuthError::MissingToken)?;
        let claims = self.tokens.verify(token)?;

        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(claims.user_id).await? else {
            return Err(AuthError::UserNotInDatabase(claims.user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User attempted an admin only operation without admin permissions"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    fn bearer_token(&self) -> Option<&'a str> {
        let value = self.headers.get(self.tokens.header_key())?.to_str().ok()?;
        let token = value.strip_prefix(BEARER_PREFIX).unwrap_or(value).trim();

        if token.is_empty() {
            None
        } else {
            Some(token)
        }
    }
}
