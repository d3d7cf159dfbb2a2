//! Refresh-token store implementations

pub mod memory_store;
pub mod redis_store;

pub use memory_store::MemoryRefreshTokenStore;
pub use redis_store::RedisRefreshTokenStore;
