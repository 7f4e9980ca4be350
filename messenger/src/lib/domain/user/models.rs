use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::user::errors::LoginError;
use crate::domain::user::errors::NameError;
use crate::domain::user::errors::PasswordFieldError;
use crate::domain::user::errors::UserIdError;

/// User aggregate entity.
///
/// Represents a registered identity and its stored credential.
#[derive(Clone)]
pub struct User {
    pub id: UserId,
    pub name: Name,
    pub login: Login,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("login", &self.login)
            .field("password_hash", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// User unique identifier, assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl UserId {
    /// Parse a user ID from a path segment.
    ///
    /// # Errors
    /// * `Empty` - String is empty
    /// * `InvalidFormat` - String is not a positive integer
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        if s.is_empty() {
            return Err(UserIdError::Empty);
        }

        match s.parse::<i64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(UserIdError::InvalidFormat(s.to_string())),
        }
    }
}

impl TryFrom<i64> for UserId {
    type Error = UserIdError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Err(UserIdError::Empty),
            id if id < 0 => Err(UserIdError::InvalidFormat(id.to_string())),
            id => Ok(Self(id)),
        }
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display name value type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    const MAX_LENGTH: usize = 128;

    /// Create a new valid name.
    ///
    /// # Errors
    /// * `Empty` - Name is empty or only whitespace
    /// * `TooLong` - Name longer than 128 characters
    pub fn new(name: String) -> Result<Self, NameError> {
        if name.trim().is_empty() {
            return Err(NameError::Empty);
        }

        let length = name.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(NameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Login value type
///
/// Unique across users. Non-empty, at most 64 characters, no whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Login(String);

impl Login {
    const MAX_LENGTH: usize = 64;

    /// Create a new valid login.
    ///
    /// # Errors
    /// * `Empty` - Login is empty
    /// * `TooLong` - Login longer than 64 characters
    /// * `ContainsWhitespace` - Login contains any whitespace character
    pub fn new(login: String) -> Result<Self, LoginError> {
        if login.is_empty() {
            return Err(LoginError::Empty);
        }

        let length = login.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(LoginError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        if login.chars().any(char::is_whitespace) {
            return Err(LoginError::ContainsWhitespace);
        }

        Ok(Self(login))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password as received from a client.
///
/// Only lives for the duration of a request; `Debug` never prints it.
#[derive(Clone)]
pub struct Password(String);

impl Password {
    /// # Errors
    /// * `Empty` - Password is empty
    pub fn new(password: String) -> Result<Self, PasswordFieldError> {
        if password.is_empty() {
            return Err(PasswordFieldError::Empty);
        }
        Ok(Self(password))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// User fields ready to be persisted; the store assigns id and timestamp.
#[derive(Clone)]
pub struct NewUser {
    pub name: Name,
    pub login: Login,
    pub password_hash: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("login", &self.login)
            .finish_non_exhaustive()
    }
}

/// Command to register a new user with validated fields
#[derive(Debug)]
pub struct RegisterCommand {
    pub name: Name,
    pub login: Login,
    pub password: Password,
}

impl RegisterCommand {
    pub fn new(name: Name, login: Login, password: Password) -> Self {
        Self {
            name,
            login,
            password,
        }
    }
}

/// Command to exchange credentials for an access token
#[derive(Debug)]
pub struct LoginCommand {
    pub login: Login,
    pub password: Password,
}
