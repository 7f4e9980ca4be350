use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::models::Address;
use crate::domain::chat::models::ChatId;
use crate::domain::chat::models::ChatKind;
use crate::domain::chat::models::JoinChatCommand;
use crate::domain::chat::models::LeaveChatCommand;
use crate::domain::chat::models::NewChat;
use crate::domain::chat::ports::ChatRepository;
use crate::domain::chat::ports::ChatServicePort;

/// Domain service implementation for chats and memberships.
pub struct ChatService<CR>
where
    CR: ChatRepository,
{
    repository: Arc<CR>,
}

impl<CR> ChatService<CR>
where
    CR: ChatRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> ChatServicePort for ChatService<CR>
where
    CR: ChatRepository,
{
    async fn create_chat(&self, kind: ChatKind, address: Address) -> Result<ChatId, ChatError> {
        if self.repository.find_by_address(&address).await?.is_some() {
            tracing::warn!(address = %address, "Chat creation rejected: address taken");
            return Err(ChatError::AlreadyExists(address.to_string()));
        }

        let chat = self.repository.create(NewChat { kind, address }).await?;

        tracing::info!(
            chat_id = %chat.id,
            kind = %chat.kind,
            address = %chat.address,
            "Chat created"
        );

        Ok(chat.id)
    }

    async fn join_chat(&self, command: JoinChatCommand) -> Result<(), ChatError> {
        if self.repository.find_by_id(&command.chat_id).await?.is_none() {
            return Err(ChatError::NotFound(format!(
                "chat not found: {}",
                command.chat_id
            )));
        }

        self.repository
            .add_member(&command.chat_id, &command.user_id, &command.role)
            .await?;

        tracing::info!(
            chat_id = %command.chat_id,
            user_id = %command.user_id,
            role = command.role.as_str(),
            "User joined chat"
        );

        Ok(())
    }

    async fn leave_chat(&self, command: LeaveChatCommand) -> Result<(), ChatError> {
        self.repository
            .remove_member(&command.chat_id, &command.user_id)
            .await?;

        tracing::info!(
            chat_id = %command.chat_id,
            user_id = %command.user_id,
            "User left chat"
        );

        Ok(())
    }
}
