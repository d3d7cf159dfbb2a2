//! # WeatherApp Infrastructure
//! 
//! Database and session-store implementations (adapters).

pub mod database;
pub mod cache;

pub use database::{
    create_pool, run_migrations, MemoryChatRepository, MemoryCommentRepository,
    MemoryUserRepository, PgChatRepository, PgCommentRepository, PgUserRepository,
};
pub use cache::{MemoryRefreshTokenStore, RedisRefreshTokenStore};
