use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Password hashing and verification run on the blocking thread pool so a
/// slow Argon2 computation never stalls the async workers.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Hasher and token issuer shared with the access gate
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<UserId, UserError> {
        // Fast path only; the unique constraint in the store is authoritative
        if self
            .repository
            .find_by_login(&command.login)
            .await?
            .is_some()
        {
            tracing::warn!(login = %command.login, "Registration rejected: login taken");
            return Err(UserError::AlreadyExists(command.login.to_string()));
        }

        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password.into_inner();
        let password_hash =
            tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
                .await
                .map_err(|e| UserError::Unknown(format!("Hashing task failed: {}", e)))?
                .map_err(|e| UserError::Hashing(e.to_string()))?;

        let user = self
            .repository
            .create(NewUser {
                name: command.name,
                login: command.login,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, login = %user.login, "User registered");

        Ok(user.id)
    }

    async fn login(&self, command: LoginCommand) -> Result<String, UserError> {
        let user = match self.repository.find_by_login(&command.login).await? {
            Some(user) => user,
            None => {
                tracing::debug!(login = %command.login, "Login failed: unknown login");
                return Err(UserError::InvalidCredentials);
            }
        };

        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password.into_inner();
        let user_id = user.id;
        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(
                &password,
                &user.password_hash,
                user.id.0,
                user.name.as_str(),
                user.login.as_str(),
            )
        })
        .await
        .map_err(|e| UserError::Unknown(format!("Verification task failed: {}", e)))?;

        match result {
            Ok(authentication) => {
                tracing::info!(user_id = %user_id, "User logged in");
                Ok(authentication.access_token)
            }
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::debug!(user_id = %user_id, "Login failed: password mismatch");
                Err(UserError::InvalidCredentials)
            }
            Err(AuthenticationError::PasswordError(e)) => Err(UserError::Hashing(e.to_string())),
            Err(AuthenticationError::JwtError(e)) => Err(UserError::Token(e.to_string())),
        }
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), UserError> {
        self.repository.delete(id).await?;

        tracing::info!(user_id = %id, "User deleted");

        Ok(())
    }
}
