#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Claims;
use auth::HashingCost;
use auth::JwtHandler;
use auth::PasswordHasher;
use chrono::Duration;
use chrono::Utc;
use messenger::domain::chat::errors::ChatError;
use messenger::domain::chat::models::Address;
use messenger::domain::chat::models::Chat;
use messenger::domain::chat::models::ChatId;
use messenger::domain::chat::models::NewChat;
use messenger::domain::chat::models::Role;
use messenger::domain::chat::ports::ChatRepository;
use messenger::domain::chat::service::ChatService;
use messenger::domain::user::errors::UserError;
use messenger::domain::user::models::Login;
use messenger::domain::user::models::NewUser;
use messenger::domain::user::models::User;
use messenger::domain::user::models::UserId;
use messenger::domain::user::ports::UserRepository;
use messenger::domain::user::service::UserService;
use messenger::inbound::http::router::create_router;
use serde_json::json;
use sqlx::postgres::PgConnectOptions;
use sqlx::postgres::PgPoolOptions;
use sqlx::Connection;
use sqlx::Executor;
use sqlx::PgConnection;
use sqlx::PgPool;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const FOREIGN_SECRET: &[u8] = b"some-other-deployment-secret-at-least-32-bytes";

/// In-memory user store with the same uniqueness rules as the `users` table
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<i64, User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.login == user.login) {
            return Err(UserError::AlreadyExists(user.login.to_string()));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let created = User {
            id: UserId(id),
            name: user.name,
            login: user.login,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        users.insert(id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.lock().unwrap().get(&id.0).cloned())
    }

    async fn find_by_login(&self, login: &Login) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| &u.login == login)
            .cloned())
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        match self.users.lock().unwrap().remove(&id.0) {
            Some(_) => Ok(()),
            None => Err(UserError::NotFound(id.to_string())),
        }
    }
}

/// In-memory chat store; membership checks the user store like a foreign key would
pub struct InMemoryChatRepository {
    users: Arc<InMemoryUserRepository>,
    chats: Mutex<HashMap<i64, Chat>>,
    members: Mutex<HashMap<(i64, i64), String>>,
    next_id: AtomicI64,
}

impl InMemoryChatRepository {
    pub fn new(users: Arc<InMemoryUserRepository>) -> Self {
        Self {
            users,
            chats: Mutex::new(HashMap::new()),
            members: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(0),
        }
    }

    pub fn chat_count(&self) -> usize {
        self.chats.lock().unwrap().len()
    }

    pub fn role_of(&self, chat_id: i64, user_id: i64) -> Option<String> {
        self.members
            .lock()
            .unwrap()
            .get(&(chat_id, user_id))
            .cloned()
    }
}

#[async_trait]
impl ChatRepository for InMemoryChatRepository {
    async fn create(&self, chat: NewChat) -> Result<Chat, ChatError> {
        let mut chats = self.chats.lock().unwrap();
        if chats.values().any(|c| c.address == chat.address) {
            return Err(ChatError::AlreadyExists(chat.address.to_string()));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let created = Chat {
            id: ChatId(id),
            kind: chat.kind,
            address: chat.address,
            created_at: Utc::now(),
        };
        chats.insert(id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: &ChatId) -> Result<Option<Chat>, ChatError> {
        Ok(self.chats.lock().unwrap().get(&id.0).cloned())
    }

    async fn find_by_address(&self, address: &Address) -> Result<Option<Chat>, ChatError> {
        Ok(self
            .chats
            .lock()
            .unwrap()
            .values()
            .find(|c| &c.address == address)
            .cloned())
    }

    async fn add_member(
        &self,
        chat_id: &ChatId,
        user_id: &UserId,
        role: &Role,
    ) -> Result<(), ChatError> {
        if !self.chats.lock().unwrap().contains_key(&chat_id.0) {
            return Err(ChatError::NotFound(format!("chat not found: {}", chat_id)));
        }
        if self
            .users
            .find_by_id(user_id)
            .await
            .map_err(|e| ChatError::DatabaseError(e.to_string()))?
            .is_none()
        {
            return Err(ChatError::NotFound(format!("user not found: {}", user_id)));
        }

        let mut members = self.members.lock().unwrap();
        if members.contains_key(&(chat_id.0, user_id.0)) {
            return Err(ChatError::AlreadyMember {
                user_id: user_id.0,
                chat_id: chat_id.0,
            });
        }
        members.insert((chat_id.0, user_id.0), role.as_str().to_string());
        Ok(())
    }

    async fn remove_member(&self, chat_id: &ChatId, user_id: &UserId) -> Result<(), ChatError> {
        match self.members.lock().unwrap().remove(&(chat_id.0, user_id.0)) {
            Some(_) => Ok(()),
            None => Err(ChatError::NotMember {
                user_id: user_id.0,
                chat_id: chat_id.0,
            }),
        }
    }
}

static DATABASE_COUNTER: AtomicI64 = AtomicI64::new(0);

/// Throwaway PostgreSQL database with migrations applied
pub struct TestDb {
    pub pool: PgPool,
    pub db_name: String,
    server_url: String,
}

impl TestDb {
    /// Create a fresh database on the server named by `DATABASE_URL`.
    ///
    /// Returns `None` when `DATABASE_URL` is not set, so the PostgreSQL suite
    /// is skipped on machines without a database.
    pub async fn try_new() -> Option<Self> {
        let server_url = match std::env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                eprintln!("DATABASE_URL is not set, skipping PostgreSQL test");
                return None;
            }
        };

        let db_name = format!(
            "test_messenger_{}_{}_{}",
            std::process::id(),
            Utc::now().timestamp_micros(),
            DATABASE_COUNTER.fetch_add(1, Ordering::SeqCst)
        );

        let mut conn = PgConnection::connect(&server_url)
            .await
            .expect("Failed to connect to Postgres");
        conn.execute(format!(r#"CREATE DATABASE "{}";"#, db_name).as_str())
            .await
            .expect("Failed to create test database");

        let options = server_url
            .parse::<PgConnectOptions>()
            .expect("Failed to parse DATABASE_URL")
            .database(&db_name);

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .expect("Failed to connect to test database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        Some(Self {
            pool,
            db_name,
            server_url,
        })
    }

    /// Close the pool and drop the database
    pub async fn drop_database(self) {
        self.pool.close().await;

        if let Ok(mut conn) = PgConnection::connect(&self.server_url).await {
            let _ = conn
                .execute(
                    format!(
                        r#"SELECT pg_terminate_backend(pid) FROM pg_stat_activity WHERE datname = '{}';"#,
                        self.db_name
                    )
                    .as_str(),
                )
                .await;
            let _ = conn
                .execute(format!(r#"DROP DATABASE IF EXISTS "{}";"#, self.db_name).as_str())
                .await;
        }
    }
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub users: Arc<InMemoryUserRepository>,
    pub chats: Arc<InMemoryChatRepository>,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        // Cheap Argon2 parameters keep the suite fast
        let hasher = PasswordHasher::with_cost(HashingCost {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        })
        .expect("Failed to build password hasher");
        let authenticator = Arc::new(Authenticator::with_hasher(
            JWT_SECRET,
            Duration::hours(24),
            hasher,
        ));

        let users = Arc::new(InMemoryUserRepository::default());
        let chats = Arc::new(InMemoryChatRepository::new(Arc::clone(&users)));

        let user_service = Arc::new(UserService::new(
            Arc::clone(&users),
            Arc::clone(&authenticator),
        ));
        let chat_service = Arc::new(ChatService::new(Arc::clone(&chats)));

        let router = create_router(user_service, chat_service, authenticator);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            users,
            chats,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(JWT_SECRET),
        }
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.delete(path).bearer_auth(token)
    }

    /// Register a user and return the assigned id
    pub async fn register(&self, name: &str, login: &str, password: &str) -> i64 {
        let response = self
            .post("/user/register")
            .json(&json!({ "name": name, "login": login, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["id"].as_i64().expect("Missing id")
    }

    /// Log in and return the issued token
    pub async fn login(&self, login: &str, password: &str) -> String {
        let response = self
            .post("/user/login")
            .json(&json!({ "login": login, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["token"].as_str().expect("Missing token").to_string()
    }

    /// Register and log in, returning `(id, token)`
    pub async fn signed_in(&self, name: &str, login: &str, password: &str) -> (i64, String) {
        let id = self.register(name, login, password).await;
        let token = self.login(login, password).await;
        (id, token)
    }

    /// Token for `uid` signed with an arbitrary secret and issue time
    pub fn token_for(&self, secret: &[u8], uid: i64, issued_at: chrono::DateTime<Utc>) -> String {
        let claims = Claims::issued_at(uid, "Someone", "someone", Duration::hours(24), issued_at)
            .expect("Failed to build claims");
        JwtHandler::new(secret)
            .encode(&claims)
            .expect("Failed to encode token")
    }
}

/// Assert the JSON error envelope and return its message
pub async fn error_message(response: reqwest::Response) -> String {
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    assert_eq!(content_type.as_deref(), Some("application/json"));

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let time = body["time"].as_str().expect("Missing time");
    assert!(
        chrono::DateTime::parse_from_rfc3339(time).is_ok(),
        "time is not RFC 3339: {}",
        time
    );
    body["message"].as_str().expect("Missing message").to_string()
}
