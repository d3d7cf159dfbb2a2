//! PostgreSQL repository implementations

pub mod chat_repo_impl;
pub mod comment_repo_impl;
pub mod user_repo_impl;

pub use chat_repo_impl::PgChatRepository;
pub use comment_repo_impl::PgCommentRepository;
pub use user_repo_impl::PgUserRepository;

use tracing::error;
use weatherapp_core::error::DomainError;

fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", context, e);
    DomainError::DatabaseError(e.to_string())
}
