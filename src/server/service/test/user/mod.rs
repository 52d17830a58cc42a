use crate::server::{
    error::{auth::AuthError, validation::ValidationError, AppError},
    model::user::{UpdatePasswordParam, UpdateProfileParam},
    service::user::UserService,
};
use test_utils::{builder::TestBuilder, factory};

mod update_password;
mod update_profile;
