//! Friendship factory for creating test friendships.
//!
//! The factory stores pairs in canonical order itself, so callers may pass the
//! two users in any order.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating a friendship requested by `requester` towards `recipient`.
pub struct FriendshipFactory<'a> {
    db: &'a DatabaseConnection,
    requester: i32,
    recipient: i32,
    accepted: bool,
}

impl<'a> FriendshipFactory<'a> {
    /// Creates a new factory for a pending request.
    pub fn new(db: &'a DatabaseConnection, requester: i32, recipient: i32) -> Self {
        Self {
            db,
            requester,
            recipient,
            accepted: false,
        }
    }

    pub fn accepted(mut self, accepted: bool) -> Self {
        self.accepted = accepted;
        self
    }

    /// Builds and inserts the friendship into the database.
    pub async fn build(self) -> Result<entity::friendship::Model, DbErr> {
        let now = Utc::now();
        let (user1, user2) = if self.requester < self.recipient {
            (self.requester, self.recipient)
        } else {
            (self.recipient, self.requester)
        };

        entity::friendship::ActiveModel {
            user1: ActiveValue::Set(user1),
            user2: ActiveValue::Set(user2),
            requester_user_id: ActiveValue::Set(self.requester),
            friend_request_accepted: ActiveValue::Set(self.accepted),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending friend request.
pub async fn create_friendship(
    db: &DatabaseConnection,
    requester: i32,
    recipient: i32,
) -> Result<entity::friendship::Model, DbErr> {
    FriendshipFactory::new(db, requester, recipient).build().await
}

/// Creates an accepted friendship.
pub async fn create_accepted_friendship(
    db: &DatabaseConnection,
    requester: i32,
    recipient: i32,
) -> Result<entity::friendship::Model, DbErr> {
    FriendshipFactory::new(db, requester, recipient)
        .accepted(true)
        .build()
        .await
}
