use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::models::ChatId;
use crate::domain::chat::models::JoinChatCommand;
use crate::domain::chat::models::Role;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::router::AppState;

pub async fn join_chat(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<JoinChatRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .chat_service
        .join_chat(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct JoinChatRequest {
    user_id: i64,
    chat_id: i64,
    role: String,
}

impl JoinChatRequest {
    fn try_into_command(self) -> Result<JoinChatCommand, ChatError> {
        let role = Role::new(self.role)?;
        Ok(JoinChatCommand {
            user_id: UserId::try_from(self.user_id)?,
            chat_id: ChatId::try_from(self.chat_id)?,
            role,
        })
    }
}
