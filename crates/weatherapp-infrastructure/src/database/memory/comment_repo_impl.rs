//! In-memory location comments

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;

use weatherapp_core::domain::{Comment, NewComment, Page};
use weatherapp_core::error::DomainError;
use weatherapp_core::repositories::CommentRepository;
use weatherapp_shared::UserId;

use super::paginate;

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, Comment>,
}

#[derive(Default)]
pub struct MemoryCommentRepository {
    table: RwLock<Table>,
}

impl MemoryCommentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn newest_first<F>(&self, pred: F) -> Vec<Comment>
    where
        F: Fn(&Comment) -> bool,
    {
        let mut rows: Vec<Comment> = self
            .table
            .read()
            .rows
            .values()
            .filter(|c| c.is_active && pred(c))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        rows
    }
}

#[async_trait]
impl CommentRepository for MemoryCommentRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, DomainError> {
        Ok(self
            .table
            .read()
            .rows
            .get(&id)
            .filter(|c| c.is_active)
            .cloned())
    }

    async fn find_by_location(&self, location_name: &str, page: Page) -> Result<Vec<Comment>, DomainError> {
        Ok(paginate(self.newest_first(|c| c.location_name == location_name), page))
    }

    async fn find_by_user(&self, user_id: UserId, page: Page) -> Result<Vec<Comment>, DomainError> {
        Ok(paginate(self.newest_first(|c| c.user_id == user_id), page))
    }

    async fn count_by_location(&self, location_name: &str) -> Result<i64, DomainError> {
        let count = self
            .table
            .read()
            .rows
            .values()
            .filter(|c| c.is_active && c.location_name == location_name)
            .count();
        Ok(count as i64)
    }

    async fn create(&self, comment: &NewComment) -> Result<Comment, DomainError> {
        let mut table = self.table.write();
        table.next_id += 1;
        let created = comment.clone().into_comment(table.next_id);
        table.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, comment: &Comment) -> Result<Comment, DomainError> {
        let mut table = self.table.write();
        let row = table
            .rows
            .get_mut(&comment.id)
            .filter(|c| c.is_active)
            .ok_or(DomainError::CommentNotFound)?;

        row.content = comment.content.clone();
        row.updated_at = comment.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: i64, user_id: UserId) -> Result<bool, DomainError> {
        let mut table = self.table.write();
        match table.rows.get_mut(&id) {
            Some(row) if row.is_active && row.is_owned_by(user_id) => {
                row.is_active = false;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
