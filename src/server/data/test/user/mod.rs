use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParam, UpdateProfileParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_username_or_email;
mod update_profile;
