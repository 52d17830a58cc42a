//! bcrypt hashing on the blocking thread pool.

use crate::server::error::internal::InternalError;

#[cfg(not(test))]
const BCRYPT_COST: u32 = 12;
#[cfg(test)]
const BCRYPT_COST: u32 = 4;

pub async fn hash_password(password: String) -> Result<String, InternalError> {
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, BCRYPT_COST)).await??;

    Ok(hash)
}

/// Checks a plaintext password against a stored hash.
///
/// A malformed stored hash counts as a mismatch.
pub async fn verify_password(password: String, hash: String) -> Result<bool, InternalError> {
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash).unwrap_or(false))
        .await?;

    Ok(matches)
}
