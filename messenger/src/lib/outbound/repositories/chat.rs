use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::models::Address;
use crate::domain::chat::models::Chat;
use crate::domain::chat::models::ChatId;
use crate::domain::chat::models::NewChat;
use crate::domain::chat::models::Role;
use crate::domain::chat::ports::ChatRepository;
use crate::domain::user::models::UserId;

const ADDRESS_UNIQUE_CONSTRAINT: &str = "chats_address_key";
const MEMBER_PRIMARY_KEY: &str = "chat_members_pkey";
const MEMBER_CHAT_FOREIGN_KEY: &str = "chat_members_chat_id_fkey";
const MEMBER_USER_FOREIGN_KEY: &str = "chat_members_user_id_fkey";

pub struct PostgresChatRepository {
    pool: PgPool,
}

impl PostgresChatRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ChatRow {
    id: i64,
    kind: String,
    address: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ChatRow> for Chat {
    type Error = ChatError;

    fn try_from(row: ChatRow) -> Result<Self, Self::Error> {
        Ok(Chat {
            id: ChatId(row.id),
            kind: row.kind.parse()?,
            address: Address::new(row.address)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ChatRepository for PostgresChatRepository {
    async fn create(&self, chat: NewChat) -> Result<Chat, ChatError> {
        let row = sqlx::query_as::<_, ChatRow>(
            r#"
            INSERT INTO chats (kind, address)
            VALUES ($1, $2)
            RETURNING id, kind, address, created_at
            "#,
        )
        .bind(chat.kind.as_str())
        .bind(chat.address.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some(ADDRESS_UNIQUE_CONSTRAINT)
                {
                    return ChatError::AlreadyExists(chat.address.to_string());
                }
            }
            ChatError::DatabaseError(e.to_string())
        })?;

        row.try_into()
    }

    async fn find_by_id(&self, id: &ChatId) -> Result<Option<Chat>, ChatError> {
        let row = sqlx::query_as::<_, ChatRow>(
            r#"
            SELECT id, kind, address, created_at
            FROM chats
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ChatError::DatabaseError(e.to_string()))?;

        row.map(Chat::try_from).transpose()
    }

    async fn find_by_address(&self, address: &Address) -> Result<Option<Chat>, ChatError> {
        let row = sqlx::query_as::<_, ChatRow>(
            r#"
            SELECT id, kind, address, created_at
            FROM chats
            WHERE address = $1
            "#,
        )
        .bind(address.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ChatError::DatabaseError(e.to_string()))?;

        row.map(Chat::try_from).transpose()
    }

    async fn add_member(
        &self,
        chat_id: &ChatId,
        user_id: &UserId,
        role: &Role,
    ) -> Result<(), ChatError> {
        sqlx::query(
            r#"
            INSERT INTO chat_members (chat_id, user_id, role)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(chat_id.0)
        .bind(user_id.0)
        .bind(role.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                match db_err.constraint() {
                    Some(MEMBER_PRIMARY_KEY) if db_err.is_unique_violation() => {
                        return ChatError::AlreadyMember {
                            user_id: user_id.0,
                            chat_id: chat_id.0,
                        };
                    }
                    Some(MEMBER_CHAT_FOREIGN_KEY) if db_err.is_foreign_key_violation() => {
                        return ChatError::NotFound(format!("chat not found: {}", chat_id));
                    }
                    Some(MEMBER_USER_FOREIGN_KEY) if db_err.is_foreign_key_violation() => {
                        return ChatError::NotFound(format!("user not found: {}", user_id));
                    }
                    _ => {}
                }
            }
            ChatError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    async fn remove_member(&self, chat_id: &ChatId, user_id: &UserId) -> Result<(), ChatError> {
        let result = sqlx::query(
            r#"
            DELETE FROM chat_members
            WHERE chat_id = $1 AND user_id = $2
            "#,
        )
        .bind(chat_id.0)
        .bind(user_id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ChatError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ChatError::NotMember {
                user_id: user_id.0,
                chat_id: chat_id.0,
            });
        }

        Ok(())
    }
}
