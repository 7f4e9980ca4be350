use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("user_id is empty")]
    Empty,

    #[error("user id is not a positive integer: {0}")]
    InvalidFormat(String),
}

/// Error for Name validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("name is empty")]
    Empty,

    #[error("name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for Login validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoginError {
    #[error("login is empty")]
    Empty,

    #[error("login too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("login must not contain whitespace")]
    ContainsWhitespace,
}

/// Error for plaintext password field validation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordFieldError {
    #[error("password is empty")]
    Empty,
}

/// Top-level error for all user-related operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("{0}")]
    InvalidUserId(#[from] UserIdError),

    #[error("{0}")]
    InvalidName(#[from] NameError),

    #[error("{0}")]
    InvalidLogin(#[from] LoginError),

    #[error("{0}")]
    InvalidPassword(#[from] PasswordFieldError),

    #[error("user not found: {0}")]
    NotFound(String),

    #[error("login already exists: {0}")]
    AlreadyExists(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    // Infrastructure errors
    #[error("password hashing error: {0}")]
    Hashing(String),

    #[error("token error: {0}")]
    Token(String),

    #[error("database error: {0}")]
    DatabaseError(String),

    #[error("unknown error: {0}")]
    Unknown(String),
}
