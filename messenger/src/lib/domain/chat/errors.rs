use thiserror::Error;

use crate::domain::user::errors::UserIdError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChatIdError {
    #[error("chat_id is empty")]
    Empty,

    #[error("chat id is not a positive integer: {0}")]
    InvalidFormat(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChatKindError {
    #[error("unknown chat kind: {0}")]
    Unknown(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("address is empty")]
    Empty,

    #[error("address too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("role is empty")]
    Empty,

    #[error("role too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for chat and membership operations
#[derive(Debug, Clone, Error)]
pub enum ChatError {
    #[error("{0}")]
    InvalidChatId(#[from] ChatIdError),

    #[error("{0}")]
    InvalidUserId(#[from] UserIdError),

    #[error("{0}")]
    InvalidKind(#[from] ChatKindError),

    #[error("{0}")]
    InvalidAddress(#[from] AddressError),

    #[error("{0}")]
    InvalidRole(#[from] RoleError),

    #[error("{0}")]
    NotFound(String),

    #[error("address already exists: {0}")]
    AlreadyExists(String),

    #[error("user {user_id} is already a member of chat {chat_id}")]
    AlreadyMember { user_id: i64, chat_id: i64 },

    #[error("user {user_id} is not a member of chat {chat_id}")]
    NotMember { user_id: i64, chat_id: i64 },

    #[error("database error: {0}")]
    DatabaseError(String),
}
