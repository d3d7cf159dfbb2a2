//! Process-local refresh-token table.
//!
//! Entries do not survive a restart: every outstanding refresh token becomes
//! unknown and clients have to log in again.

use async_trait::async_trait;
use dashmap::DashMap;

use weatherapp_core::domain::RefreshTokenEntry;
use weatherapp_core::error::DomainError;
use weatherapp_core::repositories::RefreshTokenStore;

#[derive(Default)]
pub struct MemoryRefreshTokenStore {
    tokens: DashMap<String, RefreshTokenEntry>,
}

impl MemoryRefreshTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[async_trait]
impl RefreshTokenStore for MemoryRefreshTokenStore {
    async fn put(&self, token: &str, entry: RefreshTokenEntry) -> Result<(), DomainError> {
        self.tokens.insert(token.to_string(), entry);
        Ok(())
    }

    async fn get(&self, token: &str) -> Result<Option<RefreshTokenEntry>, DomainError> {
        Ok(self.tokens.get(token).map(|e| e.value().clone()))
    }

    async fn remove(&self, token: &str) -> Result<bool, DomainError> {
        Ok(self.tokens.remove(token).is_some())
    }

    async fn take(&self, token: &str) -> Result<Option<RefreshTokenEntry>, DomainError> {
        // shard write lock held for the whole removal
        Ok(self.tokens.remove(token).map(|(_, entry)| entry))
    }
}
