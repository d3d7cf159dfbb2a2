//! In-memory chat room

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;

use weatherapp_core::domain::{ChatMessage, NewChatMessage, Page};
use weatherapp_core::error::DomainError;
use weatherapp_core::repositories::ChatRepository;
use weatherapp_shared::UserId;

use super::paginate;

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, ChatMessage>,
}

#[derive(Default)]
pub struct MemoryChatRepository {
    table: RwLock<Table>,
}

impl MemoryChatRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn newest_first<F>(&self, pred: F) -> Vec<ChatMessage>
    where
        F: Fn(&ChatMessage) -> bool,
    {
        let mut rows: Vec<ChatMessage> = self
            .table
            .read()
            .rows
            .values()
            .filter(|m| m.is_active && pred(m))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        rows
    }
}

#[async_trait]
impl ChatRepository for MemoryChatRepository {
    async fn find_recent(&self, page: Page) -> Result<Vec<ChatMessage>, DomainError> {
        Ok(paginate(self.newest_first(|_| true), page))
    }

    async fn find_by_user(&self, user_id: UserId, page: Page) -> Result<Vec<ChatMessage>, DomainError> {
        Ok(paginate(self.newest_first(|m| m.user_id == user_id), page))
    }

    async fn count(&self) -> Result<i64, DomainError> {
        let count = self.table.read().rows.values().filter(|m| m.is_active).count();
        Ok(count as i64)
    }

    async fn create(&self, message: &NewChatMessage) -> Result<ChatMessage, DomainError> {
        let mut table = self.table.write();
        table.next_id += 1;
        let created = message.clone().into_message(table.next_id);
        table.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn delete(&self, id: i64, user_id: UserId) -> Result<bool, DomainError> {
        let mut table = self.table.write();
        match table.rows.get_mut(&id) {
            Some(row) if row.is_active && row.user_id == user_id => {
                row.is_active = false;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
