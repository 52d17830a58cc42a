use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs.
///
/// All variants result in a 500 Internal Server Error with a generic message
/// returned to the client.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Signing a JWT failed.
    #[error("Failed to encode JWT: {0}")]
    TokenEncode(#[source] jsonwebtoken::errors::Error),

    /// bcrypt hashing or verification failed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// A blocking task panicked or was cancelled.
    #[error("Blocking task failed: {0}")]
    BlockingTask(#[from] tokio::task::JoinError),
}
