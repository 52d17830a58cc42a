use crate::server::error::{validation::ValidationError, AppError};

/// Parses an integer id from a path or query value.
///
/// # Arguments
/// - `value` - The raw value taken from the request
/// - `path` - Name of the parameter, reported in the cast error
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed id
/// - `Err(AppError::ValidationErr(Cast))` - Value is not an integer
pub fn parse_id(value: &str, path: &str) -> Result<i32, AppError> {
    let id = value
        .trim()
        .parse::<i32>()
        .map_err(|_| ValidationError::Cast {
            value: value.to_string(),
            path: path.to_string(),
        })?;

    Ok(id)
}
