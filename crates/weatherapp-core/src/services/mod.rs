//! Domain services (business logic)

pub mod auth_service;
pub mod chat_service;
pub mod comment_service;
pub mod profile_service;
pub mod token_service;

pub use auth_service::{AuthResult, AuthService, RegisterCommand};
pub use chat_service::ChatService;
pub use comment_service::{CommentService, CreateCommentCommand};
pub use profile_service::{ProfileService, UpdateProfileCommand};
pub use token_service::{RefreshResult, TokenService};
