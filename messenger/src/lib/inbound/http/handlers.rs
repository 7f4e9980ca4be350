use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::header;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::chat::errors::ChatError;
use crate::domain::user::errors::UserError;

pub mod chats;
pub mod delete_user;
pub mod login;
pub mod register;

const INTERNAL_SERVER_ERROR_MESSAGE: &str = "internal server error";
const INVALID_CREDENTIALS_MESSAGE: &str = "invalid credentials";
pub const INVALID_TOKEN_MESSAGE: &str = "invalid token";

/// JSON body extractor whose rejection is rendered as an [`ApiError`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Request failed with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_SERVER_ERROR_MESSAGE.to_string(),
                )
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        };

        let envelope = ApiErrorData {
            message,
            time: Utc::now(),
        };
        match serde_json::to_string_pretty(&envelope) {
            Ok(body) => (status, [(header::CONTENT_TYPE, "application/json")], body).into_response(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize error envelope");
                status.into_response()
            }
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidUserId(_)
            | UserError::InvalidName(_)
            | UserError::InvalidLogin(_)
            | UserError::InvalidPassword(_)
            | UserError::NotFound(_) => ApiError::BadRequest(err.to_string()),
            UserError::AlreadyExists(_) => ApiError::Conflict(err.to_string()),
            UserError::InvalidCredentials => {
                ApiError::BadRequest(INVALID_CREDENTIALS_MESSAGE.to_string())
            }
            UserError::Hashing(_)
            | UserError::Token(_)
            | UserError::DatabaseError(_)
            | UserError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::InvalidChatId(_)
            | ChatError::InvalidUserId(_)
            | ChatError::InvalidKind(_)
            | ChatError::InvalidAddress(_)
            | ChatError::InvalidRole(_)
            | ChatError::NotFound(_)
            | ChatError::AlreadyMember { .. }
            | ChatError::NotMember { .. } => ApiError::BadRequest(err.to_string()),
            ChatError::AlreadyExists(_) => ApiError::Conflict(err.to_string()),
            ChatError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

/// Error envelope returned for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
    pub time: DateTime<Utc>,
}

/// Response body carrying a store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedResponseData {
    pub id: i64,
}
