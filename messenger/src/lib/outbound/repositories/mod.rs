pub mod chat;
pub mod user;

pub use chat::PostgresChatRepository;
pub use user::PostgresUserRepository;
