//! Authentication utilities library
//!
//! Provides the authentication building blocks used by the messenger service:
//! - Password hashing (Argon2id)
//! - JWT token generation and validation (HS256)
//! - `Authorization` header parsing
//! - Authentication coordination
//!
//! Everything here is synchronous and free of I/O; the service decides where
//! to run the CPU-heavy parts.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//! use chrono::Duration;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::for_identity(1, "Alice", "alice", Duration::hours(24)).unwrap();
//! let token = handler.encode(&claims).unwrap();
//! let decoded = handler.decode(&token).unwrap();
//! assert_eq!(decoded.login, "alice");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{bearer, Authenticator};
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(24));
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let result = auth.authenticate("password123", &hash, 1, "Alice", "alice").unwrap();
//!
//! // Protected request: parse header and validate token
//! let header = format!("Bearer {}", result.access_token);
//! let token = bearer::extract_token(Some(&header)).unwrap();
//! let claims = auth.validate_token(token).unwrap();
//! assert_eq!(claims.uid, 1);
//! ```

pub mod authenticator;
pub mod bearer;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use bearer::BearerError;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::HashingCost;
pub use password::PasswordError;
pub use password::PasswordHasher;
