//! Registration and credential checks.

use sea_orm::DatabaseConnection;
use validator::Validate;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{normalize_email, CreateUserParam, RegisterUserParam, User},
    service::password::{hash_password, verify_password},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a regular user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::ValidationErr)` - Username, email or password rules failed
    /// - `Err(AppError::Conflict)` - Username or email already taken
    pub async fn register(&self, param: RegisterUserParam) -> Result<User, AppError> {
        param.validate()?;

        let user_repo = UserRepository::new(self.db);

        if user_repo
            .find_by_username_or_email(&param.username, &param.email)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Email or username already exists"));
        }

        let password_hash = hash_password(param.password).await?;

        let user = user_repo
            .create(CreateUserParam {
                username: param.username,
                email: param.email,
                password_hash,
                is_admin: false,
            })
            .await?;

        Ok(user)
    }

    /// Checks an email and password pair.
    ///
    /// Unknown emails and wrong passwords produce the same error.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AuthError::MissingCredentials)` - Email or password is blank
    /// - `Err(AuthError::InvalidCredentials)` - No match
    pub async fn login(&self, email: &str, password: String) -> Result<User, AppError> {
        let email = normalize_email(email);
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials.into());
        }

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, user.password_hash.clone()).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}
