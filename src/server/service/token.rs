//! Bearer token issuance and verification.
//!
//! Tokens are HS256 JWTs signed with the configured secret. They carry the user's
//! id, username and admin flag, but the auth guard still re-reads the user from the
//! database on every request, so a deleted user's token stops working immediately.

use chrono::{Duration, Utc};
use jsonwebtoken::{errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{
    config::Config,
    error::{auth::AuthError, internal::InternalError},
    model::user::User,
};

/// Claims embedded in every issued token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i32,
    pub username: String,
    pub is_admin: bool,
    /// Issued-at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
}

/// Signs and verifies tokens with a shared secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    header_key: String,
    expiry_hours: i64,
}

impl TokenService {
    pub fn new(secret: &str, header_key: impl Into<String>, expiry_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            header_key: header_key.into(),
            expiry_hours,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.jwt_secret_key,
            config.token_header_key.clone(),
            config.jwt_expiry_hours,
        )
    }

    /// Name of the request header carrying the bearer token.
    pub fn header_key(&self) -> &str {
        &self.header_key
    }

    /// Issues a token for the user, valid for the configured number of hours.
    ///
    /// # Returns
    /// - `Ok(String)` - The encoded token
    /// - `Err(InternalError::TokenEncode)` - Signing failed
    pub fn issue(&self, user: &User) -> Result<String, InternalError> {
        let now = Utc::now();
        let claims = Claims {
            user_id: user.id,
            username: user.username.clone(),
            is_admin: user.is_admin,
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.expiry_hours)).timestamp(),
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(InternalError::TokenEncode)
    }

    /// Verifies a token's signature and expiry.
    ///
    /// # Returns
    /// - `Ok(Claims)` - The verified claims
    /// - `Err(AuthError::TokenExpired)` - The token is past its expiry
    /// - `Err(AuthError::InvalidToken)` - Any other verification failure
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            })
    }
}
