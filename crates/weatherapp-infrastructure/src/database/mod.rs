//! Database module (PostgreSQL and in-memory adapters)

pub mod connection;
pub mod memory;
pub mod postgres;

pub use connection::{create_pool, run_migrations};
pub use memory::{MemoryChatRepository, MemoryCommentRepository, MemoryUserRepository};
pub use postgres::{PgChatRepository, PgCommentRepository, PgUserRepository};
