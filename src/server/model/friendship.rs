//! Friendship domain models.
//!
//! Friendships are stored under their canonical pair: the smaller user id is
//! always `user1`. Every lookup goes through [`FriendPair`] so argument order
//! never matters.

use chrono::{DateTime, Utc};

use crate::{model::friendship::FriendshipDto, server::error::validation::ValidationError};

/// Two distinct user ids in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FriendPair {
    user1: i32,
    user2: i32,
}

impl FriendPair {
    /// Orders the two ids, rejecting a pair of the same user.
    pub fn new(a: i32, b: i32) -> Result<Self, ValidationError> {
        if a == b {
            return Err(ValidationError::SelfFriendship);
        }

        let (user1, user2) = if a < b { (a, b) } else { (b, a) };

        Ok(Self { user1, user2 })
    }

    pub fn user1(&self) -> i32 {
        self.user1
    }

    pub fn user2(&self) -> i32 {
        self.user2
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Friendship {
    pub id: i32,
    pub user1: i32,
    pub user2: i32,
    pub requester_user_id: i32,
    pub friend_request_accepted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Friendship {
    pub fn into_dto(self) -> FriendshipDto {
        FriendshipDto {
            id: self.id,
            user1: self.user1,
            user2: self.user2,
            requester_user_id: self.requester_user_id,
            friend_request_accepted: self.friend_request_accepted,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::friendship::Model) -> Self {
        Self {
            id: entity.id,
            user1: entity.user1,
            user2: entity.user2,
            requester_user_id: entity.requester_user_id,
            friend_request_accepted: entity.friend_request_accepted,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
