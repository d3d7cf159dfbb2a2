//! Opaque refresh-token generation

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use rand::RngCore;
use weatherapp_shared::constants::REFRESH_TOKEN_BYTES;

/// Random, claim-free refresh token. The caller is responsible for registering it.
pub fn generate_refresh_token() -> String {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_refresh_tokens_are_url_safe() {
        let token = generate_refresh_token();
        // 64 bytes -> 86 base64 chars without padding
        assert_eq!(token.len(), 86);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_refresh_tokens_do_not_repeat() {
        let tokens: HashSet<String> = (0..256).map(|_| generate_refresh_token()).collect();
        assert_eq!(tokens.len(), 256);
    }
}
