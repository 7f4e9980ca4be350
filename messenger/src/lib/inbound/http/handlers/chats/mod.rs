pub mod create_chat;
pub mod join_chat;
pub mod leave_chat;

pub use create_chat::create_channel;
pub use create_chat::create_group;
pub use create_chat::create_private;
pub use join_chat::join_chat;
pub use leave_chat::leave_chat;
