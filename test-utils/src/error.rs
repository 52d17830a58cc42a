use sea_orm::DbErr;
use thiserror::Error;

/// Errors raised while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to the in-memory database or creating the schema failed.
    #[error(transparent)]
    Database(#[from] DbErr),
}
