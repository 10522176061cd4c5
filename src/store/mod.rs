use async_trait::async_trait;

use crate::{
    auth::repo_types::{NewUser, User},
    tasks::repo_types::{Task, TaskFields},
};

#[cfg(test)]
pub mod memory;

pub type UserId = i64;
pub type TaskId = i64;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("email already exists: {0}")]
    DuplicateEmail(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<User>>;

    /// Fails with `DuplicateEmail` when the address is taken.
    async fn create(&self, user: NewUser) -> StoreResult<User>;
}

/// Single-row task persistence. Writes are keyed by `(id, owner)`.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Newest first.
    async fn list_by_owner(&self, owner: UserId) -> StoreResult<Vec<Task>>;

    async fn find_by_id(&self, id: TaskId) -> StoreResult<Option<Task>>;

    async fn create(&self, owner: UserId, fields: TaskFields) -> StoreResult<Task>;

    /// `None` when no row matches both keys.
    async fn update(&self, id: TaskId, owner: UserId, fields: TaskFields)
        -> StoreResult<Option<Task>>;

    /// Rows removed, zero or one.
    async fn delete(&self, id: TaskId, owner: UserId) -> StoreResult<u64>;
}
