use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::INVALID_TOKEN_MESSAGE;
use crate::inbound::http::router::AppState;

/// Extension type to store the authenticated identity in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub login: String,
}

/// Middleware that validates bearer tokens and adds the caller to request extensions.
///
/// Every failure is reported as the same 401 so callers learn nothing about why
/// a token was refused; the reason is only logged.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let caller = {
        let header = match req.headers().get(header::AUTHORIZATION) {
            Some(value) => Some(value.to_str().map_err(|_| {
                tracing::warn!("Authorization header is not visible ASCII");
                invalid_token()
            })?),
            None => None,
        };

        let token = auth::bearer::extract_token(header).map_err(|e| {
            tracing::warn!(reason = %e, "Rejected request without usable bearer token");
            invalid_token()
        })?;

        let claims = state.authenticator.validate_token(token).map_err(|e| {
            tracing::warn!(reason = %e, "JWT validation failed");
            invalid_token()
        })?;

        let user_id = UserId::try_from(claims.uid).map_err(|e| {
            tracing::warn!(reason = %e, "Token carries an unusable user id");
            invalid_token()
        })?;

        AuthenticatedUser {
            user_id,
            login: claims.login,
        }
    };

    tracing::debug!(user_id = %caller.user_id, login = %caller.login, "Request authenticated");
    req.extensions_mut().insert(caller);

    Ok(next.run(req).await)
}

fn invalid_token() -> ApiError {
    ApiError::Unauthorized(INVALID_TOKEN_MESSAGE.to_string())
}
