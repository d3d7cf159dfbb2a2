//! Repository traits (ports)

pub mod user_repository;
pub mod refresh_token_store;
pub mod comment_repository;
pub mod chat_repository;

pub use user_repository::UserRepository;
pub use refresh_token_store::RefreshTokenStore;
pub use comment_repository::CommentRepository;
pub use chat_repository::ChatRepository;

#[cfg(test)]
pub use user_repository::MockUserRepository;
#[cfg(test)]
pub use refresh_token_store::MockRefreshTokenStore;
#[cfg(test)]
pub use comment_repository::MockCommentRepository;
#[cfg(test)]
pub use chat_repository::MockChatRepository;
