//! Friendship data repository for database operations.
//!
//! Every lookup by user pair takes a [`FriendPair`], so rows are always found under
//! their canonical (ascending) key no matter which user is passed first.

use crate::server::model::friendship::{FriendPair, Friendship};
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, QueryOrder,
};

/// Repository providing database operations for friendships.
pub struct FriendshipRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FriendshipRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every friendship ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Friendship>, DbErr> {
        let entities = entity::prelude::Friendship::find()
            .order_by_asc(entity::friendship::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Friendship::from_entity).collect())
    }

    /// Gets every friendship, pending or accepted, that involves the user.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Friendship>, DbErr> {
        let entities = entity::prelude::Friendship::find()
            .filter(
                Condition::any()
                    .add(entity::friendship::Column::User1.eq(user_id))
                    .add(entity::friendship::Column::User2.eq(user_id)),
            )
            .order_by_asc(entity::friendship::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Friendship::from_entity).collect())
    }

    /// Finds the friendship stored under the pair, if any.
    pub async fn find_between(&self, pair: FriendPair) -> Result<Option<Friendship>, DbErr> {
        let entity = entity::prelude::Friendship::find()
            .filter(entity::friendship::Column::User1.eq(pair.user1()))
            .filter(entity::friendship::Column::User2.eq(pair.user2()))
            .one(self.db)
            .await?;

        Ok(entity.map(Friendship::from_entity))
    }

    /// Whether the pair has an accepted friendship. Pending requests do not count.
    pub async fn are_friends(&self, pair: FriendPair) -> Result<bool, DbErr> {
        Ok(self
            .find_between(pair)
            .await?
            .is_some_and(|f| f.friend_request_accepted))
    }

    /// Inserts a pending request from `requester_user_id`.
    ///
    /// # Returns
    /// - `Ok(Friendship)` - The created request
    /// - `Err(DbErr)` - Database error, including a unique violation when the pair exists
    pub async fn create(
        &self,
        pair: FriendPair,
        requester_user_id: i32,
    ) -> Result<Friendship, DbErr> {
        let now = Utc::now();
        let entity = entity::friendship::ActiveModel {
            user1: ActiveValue::Set(pair.user1()),
            user2: ActiveValue::Set(pair.user2()),
            requester_user_id: ActiveValue::Set(requester_user_id),
            friend_request_accepted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Friendship::from_entity(entity))
    }

    /// Accepts the pending request sent by `requester_user_id` for this pair.
    ///
    /// Runs as a single conditional update so a request is only ever accepted once.
    ///
    /// # Returns
    /// - `Ok(Some(Friendship))` - The accepted friendship
    /// - `Ok(None)` - No pending request from that requester exists for the pair
    pub async fn accept(
        &self,
        pair: FriendPair,
        requester_user_id: i32,
    ) -> Result<Option<Friendship>, DbErr> {
        let result = entity::prelude::Friendship::update_many()
            .col_expr(
                entity::friendship::Column::FriendRequestAccepted,
                Expr::value(true),
            )
            .col_expr(entity::friendship::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::friendship::Column::User1.eq(pair.user1()))
            .filter(entity::friendship::Column::User2.eq(pair.user2()))
            .filter(entity::friendship::Column::RequesterUserId.eq(requester_user_id))
            .filter(entity::friendship::Column::FriendRequestAccepted.eq(false))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_between(pair).await
    }

    /// Deletes the friendship for the pair in any state, returning the deleted row.
    pub async fn delete(&self, pair: FriendPair) -> Result<Option<Friendship>, DbErr> {
        let Some(friendship) = self.find_between(pair).await? else {
            return Ok(None);
        };

        entity::prelude::Friendship::delete_by_id(friendship.id)
            .exec(self.db)
            .await?;

        Ok(Some(friendship))
    }
}
