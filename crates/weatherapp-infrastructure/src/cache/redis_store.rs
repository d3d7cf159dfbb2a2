//! Redis-backed refresh-token table. Survives server restarts and can be
//! shared by several server instances. Requires Redis >= 6.2 for `GETDEL`.

use async_trait::async_trait;
use chrono::Utc;
use redis::aio::ConnectionManager;
use tracing::{error, info};

use weatherapp_core::domain::RefreshTokenEntry;
use weatherapp_core::error::DomainError;
use weatherapp_core::repositories::RefreshTokenStore;

#[derive(Clone)]
pub struct RedisRefreshTokenStore {
    conn: ConnectionManager,
    key_prefix: String,
}

fn cache_error(context: &str, e: impl std::fmt::Display) -> DomainError {
    error!("Redis error {}: {}", context, e);
    DomainError::CacheError(e.to_string())
}

fn encode_entry(entry: &RefreshTokenEntry) -> Result<String, DomainError> {
    serde_json::to_string(entry).map_err(|e| cache_error("encoding entry", e))
}

fn decode_entry(raw: &str) -> Result<RefreshTokenEntry, DomainError> {
    serde_json::from_str(raw).map_err(|e| cache_error("decoding entry", e))
}

/// Milliseconds until `entry` lapses, at least 1 so Redis accepts it.
fn ttl_millis(entry: &RefreshTokenEntry) -> i64 {
    (entry.expires_at - Utc::now()).num_milliseconds().max(1)
}

impl RedisRefreshTokenStore {
    pub async fn connect(url: &str, key_prefix: impl Into<String>) -> Result<Self, DomainError> {
        let client = redis::Client::open(url).map_err(|e| cache_error("opening client", e))?;
        let conn = ConnectionManager::new(client)
            .await
            .map_err(|e| cache_error("connecting", e))?;
        info!("Connected to Redis refresh-token store");

        Ok(Self {
            conn,
            key_prefix: key_prefix.into(),
        })
    }

    fn key(&self, token: &str) -> String {
        format!("{}{}", self.key_prefix, token)
    }
}

#[async_trait]
impl RefreshTokenStore for RedisRefreshTokenStore {
    async fn put(&self, token: &str, entry: RefreshTokenEntry) -> Result<(), DomainError> {
        let mut conn = self.conn.clone();
        redis::cmd("SET")
            .arg(self.key(token))
            .arg(encode_entry(&entry)?)
            .arg("PX")
            .arg(ttl_millis(&entry))
            .query_async::<()>(&mut conn)
            .await
            .map_err(|e| cache_error("storing refresh token", e))
    }

    async fn get(&self, token: &str) -> Result<Option<RefreshTokenEntry>, DomainError> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = redis::cmd("GET")
            .arg(self.key(token))
            .query_async(&mut conn)
            .await
            .map_err(|e| cache_error("reading refresh token", e))?;

        raw.as_deref().map(decode_entry).transpose()
    }

    async fn remove(&self, token: &str) -> Result<bool, DomainError> {
        let mut conn = self.conn.clone();
        let removed: i64 = redis::cmd("DEL")
            .arg(self.key(token))
            .query_async(&mut conn)
            .await
            .map_err(|e| cache_error("removing refresh token", e))?;

        Ok(removed > 0)
    }

    async fn take(&self, token: &str) -> Result<Option<RefreshTokenEntry>, DomainError> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = redis::cmd("GETDEL")
            .arg(self.key(token))
            .query_async(&mut conn)
            .await
            .map_err(|e| cache_error("taking refresh token", e))?;

        raw.as_deref().map(decode_entry).transpose()
    }
}
