//! # WeatherApp Core - Domain Module
//! 
//! Domain entities for the WeatherApp backend.

pub mod user;
pub mod refresh_token;
pub mod comment;
pub mod chat_message;
pub mod page;

pub use user::{NewUser, User, UserProfile};
pub use refresh_token::{RefreshTokenEntry, TokenPair};
pub use comment::{Comment, NewComment};
pub use chat_message::{ChatMessage, NewChatMessage};
pub use page::Page;
