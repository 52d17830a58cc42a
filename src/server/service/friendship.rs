//! Friendship service: requests, acceptance and removal between user pairs.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{friendship::FriendshipRepository, user::UserRepository},
    error::AppError,
    model::friendship::{FriendPair, Friendship},
};

pub struct FriendshipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FriendshipService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_all(&self) -> Result<Vec<Friendship>, AppError> {
        Ok(FriendshipRepository::new(self.db).get_all().await?)
    }

    /// Lists the user's friendships, pending and accepted, from either side.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<Friendship>, AppError> {
        Ok(FriendshipRepository::new(self.db)
            .get_for_user(user_id)
            .await?)
    }

    /// Sends a friend request from `requester` to `recipient`.
    ///
    /// # Returns
    /// - `Ok(Friendship)` - The pending request
    /// - `Err(AppError::ValidationErr)` - Requester and recipient are the same user
    /// - `Err(AppError::BadRequest)` - Recipient does not exist
    /// - `Err(AppError::DbErr)` - Unique violation when the pair already has a friendship
    pub async fn create(&self, requester: i32, recipient: i32) -> Result<Friendship, AppError> {
        let pair = FriendPair::new(requester, recipient)?;

        if UserRepository::new(self.db)
            .find_by_id(recipient)
            .await?
            .is_none()
        {
            return Err(AppError::bad_request(
                "Provided recipient user does not exist",
            ));
        }

        Ok(FriendshipRepository::new(self.db)
            .create(pair, requester)
            .await?)
    }

    /// Accepts the pending request `requester` sent to `recipient`.
    ///
    /// Because the stored requester must match, nobody can accept a request they sent.
    pub async fn accept(&self, requester: i32, recipient: i32) -> Result<Friendship, AppError> {
        let pair = FriendPair::new(requester, recipient)?;

        FriendshipRepository::new(self.db)
            .accept(pair, requester)
            .await?
            .ok_or_else(|| {
                AppError::bad_request(
                    "Pending friendship document not found with provided parameters",
                )
            })
    }

    /// Removes the friendship between two users, pending or accepted.
    pub async fn remove(&self, user_id: i32, other_user_id: i32) -> Result<Friendship, AppError> {
        let pair = FriendPair::new(user_id, other_user_id)?;

        FriendshipRepository::new(self.db)
            .delete(pair)
            .await?
            .ok_or_else(|| {
                AppError::bad_request("Friendship document not found with provided parameters")
            })
    }

    /// Whether two users have an accepted friendship.
    pub async fn are_friends(&self, a: i32, b: i32) -> Result<bool, AppError> {
        let Ok(pair) = FriendPair::new(a, b) else {
            return Ok(false);
        };

        Ok(FriendshipRepository::new(self.db).are_friends(pair).await?)
    }
}
