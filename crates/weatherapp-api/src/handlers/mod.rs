pub mod auth;
pub mod chat;
pub mod comments;
pub mod health;
pub mod profile;
