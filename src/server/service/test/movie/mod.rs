use crate::{
    model::movie::CreateMovieDto,
    server::{
        error::{validation::ValidationError, AppError},
        model::{movie::CreateMovieParam, user::User},
        service::movie::MovieService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod search;
mod update_poster;
