//! Router assembly

use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::warn;

use weatherapp_shared::constants::REQUEST_TIMEOUT_SECS;

use crate::handlers::{auth, chat, comments, health, profile};
use crate::middleware::session_middleware;
use crate::state::AppState;

pub fn build_router(state: AppState, allowed_origins: &[String]) -> Router {
    // Public routes
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh))
        .route("/revoke", post(auth::revoke))
        .route("/validate", post(auth::validate));

    let profile_routes = Router::new()
        .route(
            "/",
            get(profile::get_profile)
                .put(profile::update_profile)
                .delete(profile::delete_profile),
        )
        .route("/change-password", post(profile::change_password));

    let comment_routes = Router::new()
        .route("/", post(comments::create))
        .route("/location/{location}", get(comments::list_for_location))
        .route("/location/{location}/count", get(comments::count_for_location))
        .route("/user", get(comments::list_mine))
        .route("/{id}", put(comments::update).delete(comments::delete));

    let chat_routes = Router::new()
        .route("/messages", get(chat::recent).post(chat::send))
        .route("/messages/count", get(chat::count))
        .route("/messages/user", get(chat::list_mine))
        .route("/messages/{id}", delete(chat::delete));

    Router::new()
        .merge(health_routes)
        .nest("/api/auth", auth_routes)
        .nest("/api/profile", profile_routes)
        .nest("/api/comments", comment_routes)
        .nest("/api/chat", chat_routes)
        .layer(middleware::from_fn_with_state(state.clone(), session_middleware))
        .with_state(state)
        .layer(cors_layer(allowed_origins))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(REQUEST_TIMEOUT_SECS),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(false)),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// `*` (or nothing configured) allows any origin.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let allow_origin = if allowed_origins.is_empty() || allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
