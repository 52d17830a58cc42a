use crate::{
    model::user::RegisterUserDto,
    server::{
        error::{auth::AuthError, validation::ValidationError, AppError},
        model::user::RegisterUserParam,
        service::auth::AuthService,
    },
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod login;

fn registration(username: &str, email: &str, password: &str) -> RegisterUserParam {
    RegisterUserParam::from_dto(RegisterUserDto {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    })
}
