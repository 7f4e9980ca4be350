use async_trait::async_trait;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::models::Address;
use crate::domain::chat::models::Chat;
use crate::domain::chat::models::ChatId;
use crate::domain::chat::models::ChatKind;
use crate::domain::chat::models::JoinChatCommand;
use crate::domain::chat::models::LeaveChatCommand;
use crate::domain::chat::models::NewChat;
use crate::domain::chat::models::Role;
use crate::domain::user::models::UserId;

/// Port for chat domain service operations.
#[async_trait]
pub trait ChatServicePort: Send + Sync + 'static {
    /// Create a chat of the given kind under a unique address.
    ///
    /// # Errors
    /// * `AlreadyExists` - Address is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create_chat(&self, kind: ChatKind, address: Address) -> Result<ChatId, ChatError>;

    /// Add a user to a chat with a role.
    ///
    /// # Errors
    /// * `NotFound` - Chat or user does not exist
    /// * `AlreadyMember` - User is already in the chat
    /// * `DatabaseError` - Database operation failed
    async fn join_chat(&self, command: JoinChatCommand) -> Result<(), ChatError>;

    /// Remove a user from a chat.
    ///
    /// # Errors
    /// * `NotMember` - User is not in the chat
    /// * `DatabaseError` - Database operation failed
    async fn leave_chat(&self, command: LeaveChatCommand) -> Result<(), ChatError>;
}

/// Persistence operations for chats and their memberships.
#[async_trait]
pub trait ChatRepository: Send + Sync + 'static {
    /// # Errors
    /// * `AlreadyExists` - Address is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, chat: NewChat) -> Result<Chat, ChatError>;

    async fn find_by_id(&self, id: &ChatId) -> Result<Option<Chat>, ChatError>;

    async fn find_by_address(&self, address: &Address) -> Result<Option<Chat>, ChatError>;

    /// # Errors
    /// * `NotFound` - Chat or user row is missing
    /// * `AlreadyMember` - Membership row already exists
    /// * `DatabaseError` - Database operation failed
    async fn add_member(
        &self,
        chat_id: &ChatId,
        user_id: &UserId,
        role: &Role,
    ) -> Result<(), ChatError>;

    /// # Errors
    /// * `NotMember` - No membership row was deleted
    /// * `DatabaseError` - Database operation failed
    async fn remove_member(&self, chat_id: &ChatId, user_id: &UserId) -> Result<(), ChatError>;
}
