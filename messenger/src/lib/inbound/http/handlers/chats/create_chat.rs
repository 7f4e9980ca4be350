use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::models::Address;
use crate::domain::chat::models::ChatKind;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::CreatedResponseData;
use crate::inbound::http::router::AppState;

pub async fn create_channel(
    state: State<AppState>,
    body: ApiJson<CreateChatRequest>,
) -> Result<ApiSuccess<CreatedResponseData>, ApiError> {
    create_chat(ChatKind::Channel, state, body).await
}

pub async fn create_group(
    state: State<AppState>,
    body: ApiJson<CreateChatRequest>,
) -> Result<ApiSuccess<CreatedResponseData>, ApiError> {
    create_chat(ChatKind::Group, state, body).await
}

pub async fn create_private(
    state: State<AppState>,
    body: ApiJson<CreateChatRequest>,
) -> Result<ApiSuccess<CreatedResponseData>, ApiError> {
    create_chat(ChatKind::Private, state, body).await
}

async fn create_chat(
    kind: ChatKind,
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateChatRequest>,
) -> Result<ApiSuccess<CreatedResponseData>, ApiError> {
    let address = Address::new(body.address).map_err(ChatError::from)?;

    state
        .chat_service
        .create_chat(kind, address)
        .await
        .map_err(ApiError::from)
        .map(|id| ApiSuccess::new(StatusCode::CREATED, CreatedResponseData { id: id.0 }))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateChatRequest {
    address: String,
}
