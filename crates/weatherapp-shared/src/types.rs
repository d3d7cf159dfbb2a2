//! Common types

/// Store-assigned user identifier.
pub type UserId = i64;
