use crate::server::{data::friendship::FriendshipRepository, model::friendship::FriendPair};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod are_friends;
mod delete;
mod find_between;
mod get_for_user;
