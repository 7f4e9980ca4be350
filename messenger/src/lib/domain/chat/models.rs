use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::chat::errors::AddressError;
use crate::domain::chat::errors::ChatIdError;
use crate::domain::chat::errors::ChatKindError;
use crate::domain::chat::errors::RoleError;
use crate::domain::user::models::UserId;

/// Chat aggregate entity.
#[derive(Debug, Clone)]
pub struct Chat {
    pub id: ChatId,
    pub kind: ChatKind,
    pub address: Address,
    pub created_at: DateTime<Utc>,
}

/// Chat unique identifier, assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChatId(pub i64);

impl TryFrom<i64> for ChatId {
    type Error = ChatIdError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Err(ChatIdError::Empty),
            id if id < 0 => Err(ChatIdError::InvalidFormat(id.to_string())),
            id => Ok(Self(id)),
        }
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatKind {
    Channel,
    Group,
    Private,
}

impl ChatKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatKind::Channel => "channel",
            ChatKind::Group => "group",
            ChatKind::Private => "private",
        }
    }
}

impl FromStr for ChatKind {
    type Err = ChatKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "channel" => Ok(ChatKind::Channel),
            "group" => Ok(ChatKind::Group),
            "private" => Ok(ChatKind::Private),
            other => Err(ChatKindError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for ChatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Public chat address value type, unique across chats.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    const MAX_LENGTH: usize = 255;

    /// # Errors
    /// * `Empty` - Address is empty or only whitespace
    /// * `TooLong` - Address longer than 255 characters
    pub fn new(address: String) -> Result<Self, AddressError> {
        if address.trim().is_empty() {
            return Err(AddressError::Empty);
        }

        let length = address.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(AddressError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(address))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Member role inside a chat (free-form, e.g. `owner`, `admin`, `member`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role(String);

impl Role {
    const MAX_LENGTH: usize = 32;

    /// # Errors
    /// * `Empty` - Role is empty or only whitespace
    /// * `TooLong` - Role longer than 32 characters
    pub fn new(role: String) -> Result<Self, RoleError> {
        if role.trim().is_empty() {
            return Err(RoleError::Empty);
        }

        let length = role.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(RoleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(role))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Chat fields ready to be persisted; the store assigns id and timestamp.
#[derive(Debug, Clone)]
pub struct NewChat {
    pub kind: ChatKind,
    pub address: Address,
}

#[derive(Debug, Clone)]
pub struct JoinChatCommand {
    pub user_id: UserId,
    pub chat_id: ChatId,
    pub role: Role,
}

#[derive(Debug, Clone)]
pub struct LeaveChatCommand {
    pub user_id: UserId,
    pub chat_id: ChatId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_kind_round_trips_through_text() {
        for kind in [ChatKind::Channel, ChatKind::Group, ChatKind::Private] {
            assert_eq!(kind.as_str().parse::<ChatKind>(), Ok(kind));
        }
        assert_eq!(
            "broadcast".parse::<ChatKind>(),
            Err(ChatKindError::Unknown("broadcast".to_string()))
        );
    }

    #[test]
    fn test_chat_id_zero_is_empty() {
        assert_eq!(ChatId::try_from(0), Err(ChatIdError::Empty));
        assert!(matches!(
            ChatId::try_from(-1),
            Err(ChatIdError::InvalidFormat(_))
        ));
        assert_eq!(ChatId::try_from(3), Ok(ChatId(3)));
    }

    #[test]
    fn test_address_validation() {
        assert_eq!(Address::new("rust-news".to_string()).unwrap().as_str(), "rust-news");
        assert_eq!(Address::new(" ".to_string()), Err(AddressError::Empty));
        assert!(matches!(
            Address::new("x".repeat(256)),
            Err(AddressError::TooLong { max: 255, actual: 256 })
        ));
    }

    #[test]
    fn test_role_validation() {
        assert!(Role::new("admin".to_string()).is_ok());
        assert_eq!(Role::new(String::new()), Err(RoleError::Empty));
    }
}
