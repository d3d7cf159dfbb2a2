// ============================================================================
// WeatherApp Infrastructure - PostgreSQL User Repository
// File: crates/weatherapp-infrastructure/src/database/postgres/user_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::info;

use weatherapp_core::domain::{NewUser, User};
use weatherapp_core::error::DomainError;
use weatherapp_core::repositories::UserRepository;
use weatherapp_shared::utils::mask_email;
use weatherapp_shared::UserId;

use super::db_error;

const UNIQUE_VIOLATION: &str = "23505";
const USERNAME_CONSTRAINT: &str = "users_username_key";
const EMAIL_CONSTRAINT: &str = "users_email_key";

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct UserRow {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            username: row.username,
            email: row.email,
            password_hash: row.password_hash,
            first_name: row.first_name,
            last_name: row.last_name,
            avatar: row.avatar,
            created_at: row.created_at,
            updated_at: row.updated_at,
            is_active: row.is_active,
        }
    }
}

/// Translate unique violations on insert into the matching conflict error.
fn map_insert_error(user: &NewUser, e: sqlx::Error) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            return match db_err.constraint() {
                Some(EMAIL_CONSTRAINT) => DomainError::EmailAlreadyExists(user.email.clone()),
                Some(USERNAME_CONSTRAINT) => {
                    DomainError::UsernameAlreadyExists(user.username.clone())
                }
                _ => DomainError::DatabaseError(db_err.message().to_string()),
            };
        }
    }
    db_error("creating user", e)
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT
                id, username, email, password_hash,
                first_name, last_name, avatar,
                created_at, updated_at, is_active
            FROM users
            WHERE id = $1 AND is_active
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding user by id", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT
                id, username, email, password_hash,
                first_name, last_name, avatar,
                created_at, updated_at, is_active
            FROM users
            WHERE username = $1 AND is_active
            "#
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding user by username", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT
                id, username, email, password_hash,
                first_name, last_name, avatar,
                created_at, updated_at, is_active
            FROM users
            WHERE LOWER(email) = LOWER($1) AND is_active
            "#
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("finding user by email", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        info!("Creating user with email: {}", mask_email(&user.email));

        let row: UserRow = sqlx::query_as(
            r#"
            INSERT INTO users (
                username, email, password_hash,
                first_name, last_name, avatar,
                created_at, updated_at, is_active
            )
            VALUES ($1, $2, $3, $4, $5, NULL, $6, $6, TRUE)
            RETURNING
                id, username, email, password_hash,
                first_name, last_name, avatar,
                created_at, updated_at, is_active
            "#
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(user, e))?;

        info!("User created successfully: {}", row.id);
        Ok(row.into())
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            UPDATE users
            SET
                password_hash = $2,
                first_name = $3,
                last_name = $4,
                avatar = $5,
                updated_at = $6
            WHERE id = $1 AND is_active
            RETURNING
                id, username, email, password_hash,
                first_name, last_name, avatar,
                created_at, updated_at, is_active
            "#
        )
        .bind(user.id)
        .bind(&user.password_hash)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.avatar)
        .bind(user.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("updating user", e))?;

        row.map(|r| r.into()).ok_or(DomainError::UserNotFound)
    }

    async fn delete(&self, id: UserId) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET is_active = FALSE, updated_at = NOW()
            WHERE id = $1 AND is_active
            "#
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("deleting user", e))?;

        Ok(result.rows_affected() > 0)
    }
}
