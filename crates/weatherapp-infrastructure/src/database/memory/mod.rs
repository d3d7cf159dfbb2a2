//! In-process repository implementations (tests and local development)

pub mod chat_repo_impl;
pub mod comment_repo_impl;
pub mod user_repo_impl;

pub use chat_repo_impl::MemoryChatRepository;
pub use comment_repo_impl::MemoryCommentRepository;
pub use user_repo_impl::MemoryUserRepository;

use weatherapp_core::domain::Page;

/// Slice an already ordered listing the way LIMIT/OFFSET would.
fn paginate<T>(rows: impl IntoIterator<Item = T>, page: Page) -> Vec<T> {
    rows.into_iter()
        .skip(page.offset as usize)
        .take(page.limit as usize)
        .collect()
}
