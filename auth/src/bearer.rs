use thiserror::Error;

/// Error type for `Authorization` header parsing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BearerError {
    #[error("Authorization header is missing")]
    Missing,

    #[error("Authorization header is malformed, expected: <scheme> <token>")]
    Malformed,
}

/// Extract the token from an `Authorization` header value.
///
/// The value is split on its first space and the remainder is the token.
/// The scheme text itself is not checked.
///
/// # Errors
/// * `Missing` - Header value is absent or empty
/// * `Malformed` - No space-delimited token segment, or the segment is empty
pub fn extract_token(header: Option<&str>) -> Result<&str, BearerError> {
    let value = match header {
        Some(value) if !value.is_empty() => value,
        _ => return Err(BearerError::Missing),
    };

    match value.split_once(' ') {
        Some((_, token)) if !token.is_empty() => Ok(token),
        _ => Err(BearerError::Malformed),
    }
}
