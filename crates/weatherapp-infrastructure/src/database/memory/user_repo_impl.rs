//! In-memory user store with the same uniqueness rules as the `users` table

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use tracing::info;

use weatherapp_core::domain::{NewUser, User};
use weatherapp_core::error::DomainError;
use weatherapp_core::repositories::UserRepository;
use weatherapp_shared::UserId;

#[derive(Default)]
struct Table {
    next_id: UserId,
    rows: BTreeMap<UserId, User>,
}

/// Rows are never physically removed; uniqueness also covers soft-deleted users.
#[derive(Default)]
pub struct MemoryUserRepository {
    table: RwLock<Table>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn find_active<F>(&self, pred: F) -> Option<User>
    where
        F: Fn(&User) -> bool,
    {
        self.table
            .read()
            .rows
            .values()
            .find(|u| u.is_active && pred(u))
            .cloned()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        Ok(self.find_active(|u| u.id == id))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        Ok(self.find_active(|u| u.username == username))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self.find_active(|u| u.email.eq_ignore_ascii_case(email)))
    }

    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        let mut table = self.table.write();

        if table.rows.values().any(|u| u.username == user.username) {
            return Err(DomainError::UsernameAlreadyExists(user.username.clone()));
        }
        if table.rows.values().any(|u| u.email.eq_ignore_ascii_case(&user.email)) {
            return Err(DomainError::EmailAlreadyExists(user.email.clone()));
        }

        table.next_id += 1;
        let created = user.clone().into_user(table.next_id);
        table.rows.insert(created.id, created.clone());

        info!("User created successfully: {}", created.id);
        Ok(created)
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let mut table = self.table.write();
        let row = table
            .rows
            .get_mut(&user.id)
            .filter(|u| u.is_active)
            .ok_or(DomainError::UserNotFound)?;

        row.password_hash = user.password_hash.clone();
        row.first_name = user.first_name.clone();
        row.last_name = user.last_name.clone();
        row.avatar = user.avatar.clone();
        row.updated_at = user.updated_at;
        Ok(row.clone())
    }

    async fn delete(&self, id: UserId) -> Result<bool, DomainError> {
        let mut table = self.table.write();
        match table.rows.get_mut(&id) {
            Some(row) if row.is_active => {
                row.deactivate();
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
