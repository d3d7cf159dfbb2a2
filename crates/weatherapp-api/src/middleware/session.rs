//! Bearer-token session propagation.
//!
//! Every request passes through [`session_middleware`]. A valid
//! `Authorization: Bearer <jwt>` header attaches a [`CurrentUser`] to the
//! request extensions; a missing or invalid one leaves the request
//! anonymous; rejection is left to the handlers that need an identity.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use weatherapp_security::Claims;
use weatherapp_shared::constants::TOKEN_TYPE_BEARER;
use weatherapp_shared::UserId;

use crate::state::AppState;

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
}

impl CurrentUser {
    fn from_claims(claims: Claims) -> Option<Self> {
        let user_id = claims.user_id().ok()?;
        Some(Self {
            user_id,
            username: claims.name,
            email: claims.email,
        })
    }
}

/// The token part of `Authorization: Bearer <token>`, scheme matched case-insensitively.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    if scheme.eq_ignore_ascii_case(TOKEN_TYPE_BEARER) && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}

pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let current = bearer_token(request.headers()).and_then(|token| {
        match state.tokens.validate_access_token(token) {
            Ok(claims) => CurrentUser::from_claims(claims),
            Err(e) => {
                debug!("Ignoring bearer token: {}", e);
                None
            }
        }
    });

    if let Some(user) = current {
        debug!("Request authenticated as user {}", user.user_id);
        request.extensions_mut().insert(user);
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token(&headers("Bearer abc.def.ghi")), Some("abc.def.ghi"));
        assert_eq!(bearer_token(&headers("bearer abc")), Some("abc"));
        assert_eq!(bearer_token(&headers("Basic abc")), None);
        assert_eq!(bearer_token(&headers("Bearer ")), None);
        assert_eq!(bearer_token(&headers("Bearer")), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }
}
