use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::ApiJson;
use super::ApiSuccess;
use super::CreatedResponseData;
use crate::domain::user::errors::LoginError;
use crate::domain::user::errors::NameError;
use crate::domain::user::errors::PasswordFieldError;
use crate::domain::user::models::Login;
use crate::domain::user::models::Name;
use crate::domain::user::models::Password;
use crate::domain::user::models::RegisterCommand;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RegisterRequest>,
) -> Result<ApiSuccess<CreatedResponseData>, ApiError> {
    state
        .user_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|id| ApiSuccess::new(StatusCode::CREATED, CreatedResponseData { id: id.0 }))
}

/// HTTP request body for registering a user (raw JSON)
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    name: String,
    login: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterRequestError {
    #[error(transparent)]
    Name(#[from] NameError),

    #[error(transparent)]
    Login(#[from] LoginError),

    #[error(transparent)]
    Password(#[from] PasswordFieldError),
}

impl RegisterRequest {
    fn try_into_command(self) -> Result<RegisterCommand, ParseRegisterRequestError> {
        let login = Login::new(self.login)?;
        let name = Name::new(self.name)?;
        let password = Password::new(self.password)?;
        Ok(RegisterCommand::new(name, login, password))
    }
}

impl From<ParseRegisterRequestError> for ApiError {
    fn from(err: ParseRegisterRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
