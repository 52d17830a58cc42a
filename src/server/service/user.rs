//! User service for profile management.
//!
//! Controllers decide whose profile is targeted (the caller's own, or any user's
//! for admins); this service only applies the profile rules.

use sea_orm::DatabaseConnection;
use validator::Validate;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{UpdatePasswordParam, UpdateProfileParam, User},
    service::password::{hash_password, verify_password},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every user ordered by id.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - At least one user
    /// - `Err(AppError::NotFound)` - No users registered
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;

        if users.is_empty() {
            return Err(AppError::not_found("No users found"));
        }

        Ok(users)
    }

    pub async fn get_profile(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User with id {} not found", user_id)))
    }

    /// Updates the provided profile fields.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::ValidationErr)` - A provided field failed validation
    /// - `Err(AppError::NotFound)` - No such user
    /// - `Err(AppError::DbErr)` - Includes a unique violation when the username or email is taken
    pub async fn update_profile(&self, param: UpdateProfileParam) -> Result<User, AppError> {
        param.validate()?;

        if param.is_empty() {
            return self.get_profile(param.user_id).await;
        }

        UserRepository::new(self.db)
            .update_profile(param)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Replaces a user's password.
    ///
    /// Non-admin callers must present the correct current password.
    ///
    /// # Returns
    /// - `Ok(())` - Password updated
    /// - `Err(AppError::NotFound)` - No such user
    /// - `Err(AuthError::IncorrectPassword)` - Current password missing or wrong
    /// - `Err(AppError::ValidationErr)` - New password too weak
    pub async fn update_password(&self, param: UpdatePasswordParam) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(param.user_id).await? else {
            return Err(AppError::not_found("User not found"));
        };

        if !param.acting_as_admin {
            let current = param.current_password.clone().unwrap_or_default();
            if !verify_password(current, user.password_hash).await? {
                return Err(AuthError::IncorrectPassword.into());
            }
        }

        param.validate()?;

        let password_hash = hash_password(param.new_password).await?;

        if !user_repo.update_password_hash(user.id, password_hash).await? {
            return Err(AppError::not_found("User not found"));
        }

        Ok(())
    }

    /// Deletes a user along with their reel progress, returning the deleted user.
    pub async fn delete(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .delete(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
