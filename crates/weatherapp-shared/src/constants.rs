//! Application-wide constants

pub const TOKEN_TYPE_BEARER: &str = "Bearer";
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 3600;
pub const DEFAULT_REFRESH_TOKEN_EXPIRY: i64 = 604800;
pub const REFRESH_TOKEN_BYTES: usize = 64;
pub const MIN_JWT_SECRET_LENGTH: usize = 32;
pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_PASSWORD_LENGTH: usize = 128;
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Listings
pub const DEFAULT_PAGE_LIMIT: i64 = 50;
pub const MAX_PAGE_LIMIT: i64 = 100;

// Community content
pub const MAX_LOCATION_NAME_LENGTH: usize = 100;
pub const MAX_COMMENT_LENGTH: usize = 1000;
pub const MAX_CHAT_MESSAGE_LENGTH: usize = 500;
