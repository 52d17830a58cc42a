use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct FriendshipDto {
    pub id: i32,
    pub user1: i32,
    pub user2: i32,
    pub requester_user_id: i32,
    pub friend_request_accepted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FriendshipDto {
    /// The member of the pair that is not `user_id`.
    pub fn other_user(&self, user_id: i32) -> i32 {
        if self.user1 == user_id {
            self.user2
        } else {
            self.user1
        }
    }
}

/// Admin body for accepting a request on behalf of its recipient.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AcceptFriendshipDto {
    pub requester_user_id: i32,
    pub recipient_user_id: i32,
}

/// Admin body for removing any friendship.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct RemoveFriendshipDto {
    pub user_id: i32,
    pub other_user_id: i32,
}
