use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;

use super::{StoreError, StoreResult, TaskId, TaskStore, UserId, UserStore};
use crate::{
    auth::repo_types::{NewUser, User},
    tasks::repo_types::{Task, TaskFields},
};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    tasks: Vec<Task>,
    next_user_id: UserId,
    next_task_id: TaskId,
}

/// Process-local stand-in for Postgres.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let t = self.inner.read().await;
        Ok(t.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<User>> {
        let t = self.inner.read().await;
        Ok(t.users.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, user: NewUser) -> StoreResult<User> {
        let mut t = self.inner.write().await;
        if t.users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::DuplicateEmail(user.email));
        }
        t.next_user_id += 1;
        let created = User {
            id: t.next_user_id,
            email: user.email,
            name: user.name,
            password_hash: user.password_hash,
            created_at: OffsetDateTime::now_utc(),
        };
        t.users.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn list_by_owner(&self, owner: UserId) -> StoreResult<Vec<Task>> {
        let t = self.inner.read().await;
        let mut tasks: Vec<Task> = t.tasks.iter().filter(|x| x.user_id == owner).cloned().collect();
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(tasks)
    }

    async fn find_by_id(&self, id: TaskId) -> StoreResult<Option<Task>> {
        let t = self.inner.read().await;
        Ok(t.tasks.iter().find(|x| x.id == id).cloned())
    }

    async fn create(&self, owner: UserId, fields: TaskFields) -> StoreResult<Task> {
        let mut t = self.inner.write().await;
        t.next_task_id += 1;
        let now = OffsetDateTime::now_utc();
        let task = Task {
            id: t.next_task_id,
            user_id: owner,
            name: fields.name,
            description: fields.description,
            priority: fields.priority,
            created_at: now,
            updated_at: now,
        };
        t.tasks.push(task.clone());
        Ok(task)
    }

    async fn update(
        &self,
        id: TaskId,
        owner: UserId,
        fields: TaskFields,
    ) -> StoreResult<Option<Task>> {
        let mut t = self.inner.write().await;
        let Some(task) = t.tasks.iter_mut().find(|x| x.id == id && x.user_id == owner) else {
            return Ok(None);
        };
        task.name = fields.name;
        task.description = fields.description;
        task.priority = fields.priority;
        task.updated_at = OffsetDateTime::now_utc();
        Ok(Some(task.clone()))
    }

    async fn delete(&self, id: TaskId, owner: UserId) -> StoreResult<u64> {
        let mut t = self.inner.write().await;
        let before = t.tasks.len();
        t.tasks.retain(|x| !(x.id == id && x.user_id == owner));
        Ok((before - t.tasks.len()) as u64)
    }
}
