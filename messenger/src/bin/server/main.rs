use std::sync::Arc;

use auth::Authenticator;
use auth::HashingCost;
use auth::PasswordHasher;
use messenger::config::Config;
use messenger::domain::chat::service::ChatService;
use messenger::domain::user::service::UserService;
use messenger::inbound::http::router::create_router;
use messenger::outbound::repositories::PostgresChatRepository;
use messenger::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const MIN_SECRET_BYTES: usize = 32;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "messenger=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "messenger",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_address = %config.server.http_address,
        max_connections = config.database.max_connections,
        token_ttl_hours = config.jwt.expiration_hours,
        argon2_memory_kib = config.password.memory_kib,
        argon2_iterations = config.password.iterations,
        "Configuration loaded"
    );

    if config.jwt.secret.len() < MIN_SECRET_BYTES {
        tracing::warn!(
            length = config.jwt.secret.len(),
            recommended = MIN_SECRET_BYTES,
            "JWT secret is shorter than recommended for HS256"
        );
    }

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let hasher = PasswordHasher::with_cost(HashingCost::from(&config.password))?;
    let authenticator = Arc::new(Authenticator::with_hasher(
        config.jwt.secret.as_bytes(),
        config.jwt.token_ttl(),
        hasher,
    ));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let chat_repository = Arc::new(PostgresChatRepository::new(pg_pool));

    let user_service = Arc::new(UserService::new(
        user_repository,
        Arc::clone(&authenticator),
    ));
    let chat_service = Arc::new(ChatService::new(chat_repository));

    let http_listener = tokio::net::TcpListener::bind(&config.server.http_address).await?;
    tracing::info!(
        address = %config.server.http_address,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, chat_service, authenticator);

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");

    Ok(())
}
