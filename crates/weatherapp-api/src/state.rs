use std::sync::Arc;

use weatherapp_core::services::{
    AuthService, ChatService, CommentService, ProfileService, TokenService,
};

/// Shared handler state. Cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub profiles: Arc<ProfileService>,
    pub comments: Arc<CommentService>,
    pub chat: Arc<ChatService>,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(
        auth: Arc<AuthService>,
        profiles: Arc<ProfileService>,
        comments: Arc<CommentService>,
        chat: Arc<ChatService>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            auth,
            profiles,
            comments,
            chat,
            tokens,
        }
    }
}
