use sea_orm::entity::prelude::*;

/// Relationship between two users stored under its canonical pair.
///
/// `user1 < user2` always holds; the pair is unique. User references are not
/// foreign keys, deleting a user leaves their friendships in place.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "friendships")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user1: i32,
    pub user2: i32,
    pub requester_user_id: i32,
    pub friend_request_accepted: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
