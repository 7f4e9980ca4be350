use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::models::ChatId;
use crate::domain::chat::models::LeaveChatCommand;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::router::AppState;

pub async fn leave_chat(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<LeaveChatRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .chat_service
        .leave_chat(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LeaveChatRequest {
    user_id: i64,
    chat_id: i64,
}

impl LeaveChatRequest {
    fn try_into_command(self) -> Result<LeaveChatCommand, ChatError> {
        Ok(LeaveChatCommand {
            user_id: UserId::try_from(self.user_id)?,
            chat_id: ChatId::try_from(self.chat_id)?,
        })
    }
}
