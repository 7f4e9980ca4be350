use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiJson;
use super::ApiSuccess;
use crate::domain::user::errors::LoginError;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::Login;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::Password;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    if body.login.is_empty() {
        return Err(UserError::from(LoginError::Empty).into());
    }
    let password = Password::new(body.password).map_err(UserError::from)?;

    // A login that could never have been registered is just bad credentials
    let login = Login::new(body.login).map_err(|_| UserError::InvalidCredentials)?;

    state
        .user_service
        .login(LoginCommand { login, password })
        .await
        .map_err(ApiError::from)
        .map(|token| ApiSuccess::new(StatusCode::OK, LoginResponseData { token }))
}

#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    login: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
}
