//! User domain models and parameters.
//!
//! Field rules mirror the registration form: usernames of at least two characters,
//! a valid email address stored lower-cased, and a strong password that is only ever
//! persisted as a bcrypt hash.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use validator::{Validate, ValidationError as FieldError};

use crate::model::user::{RegisterUserDto, UpdateProfileDto, UserDto};

/// Minimum password length accepted at registration and password change.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Message attached to every password strength failure.
pub const PASSWORD_RULE_MESSAGE: &str = "Password must be at least 8 characters long, and contain: one lowercase letter, one uppercase letter, one number and one special character.";

/// Registered user, including the stored password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    /// bcrypt hash, never exposed through a DTO
    pub password_hash: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user to its public DTO, dropping the password hash.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            is_admin: self.is_admin,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password_hash,
            is_admin: entity.is_admin,
            created_at: entity.created_at,
        }
    }
}

/// Registration input, normalized and validated before hashing.
#[derive(Debug, Clone, Validate)]
pub struct RegisterUserParam {
    #[validate(length(min = 2, message = "Username must be at least 2 characters long"))]
    pub username: String,
    #[validate(email(message = "Please enter a valid email"))]
    pub email: String,
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,
}

impl RegisterUserParam {
    /// Trims the username and trims and lower-cases the email.
    pub fn from_dto(dto: RegisterUserDto) -> Self {
        Self {
            username: dto.username.trim().to_string(),
            email: normalize_email(&dto.email),
            password: dto.password,
        }
    }
}

/// Row values for inserting a user; the password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
}

/// Profile update. Only provided fields change.
#[derive(Debug, Clone, Validate)]
pub struct UpdateProfileParam {
    pub user_id: i32,
    #[validate(length(min = 2, message = "Username must be at least 2 characters long"))]
    pub username: Option<String>,
    #[validate(email(message = "Please enter a valid email"))]
    pub email: Option<String>,
}

impl UpdateProfileParam {
    pub fn from_dto(user_id: i32, dto: UpdateProfileDto) -> Self {
        Self {
            user_id,
            username: dto.username.map(|u| u.trim().to_string()),
            email: dto.email.as_deref().map(normalize_email),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none()
    }
}

/// Password change request.
#[derive(Debug, Clone, Validate)]
pub struct UpdatePasswordParam {
    pub user_id: i32,
    /// Whether the caller is an admin, who may skip the current password check
    pub acting_as_admin: bool,
    pub current_password: Option<String>,
    #[validate(custom(function = "validate_password_strength"))]
    pub new_password: String,
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Requires at least eight characters with one lowercase letter, one uppercase
/// letter, one digit and one symbol.
pub fn validate_password_strength(password: &str) -> Result<(), FieldError> {
    let long_enough = password.chars().count() >= MIN_PASSWORD_LENGTH;
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password
        .chars()
        .any(|c| !c.is_alphanumeric() && !c.is_whitespace());

    if long_enough && has_lower && has_upper && has_digit && has_symbol {
        Ok(())
    } else {
        Err(FieldError::new("weak_password").with_message(Cow::Borrowed(PASSWORD_RULE_MESSAGE)))
    }
}
