//! Owner-scoped task operations. Every path that touches a single task goes
//! through [`owned_by`], so a foreign task and a missing one look identical.

use tracing::{debug, warn};

use super::{
    dto::TaskRequest,
    repo_types::{Priority, Task, TaskFields},
};
use crate::{
    error::ApiError,
    store::{TaskId, TaskStore, UserId},
};

const MISSING_FIELDS: &str = "Name, description, and priority are required";

fn required(field: Option<String>) -> Option<String> {
    field.filter(|v| !v.trim().is_empty())
}

pub fn validate(req: TaskRequest) -> Result<TaskFields, ApiError> {
    let (Some(name), Some(description), Some(priority)) = (
        required(req.name),
        required(req.description),
        required(req.priority),
    ) else {
        return Err(ApiError::Validation(MISSING_FIELDS.into()));
    };

    let priority: Priority = priority.parse().map_err(|e| {
        warn!(error = %e, "rejected task priority");
        ApiError::Validation("Invalid priority".into())
    })?;

    Ok(TaskFields {
        name,
        description,
        priority,
    })
}

/// The one ownership check. Absent and foreign both map to `NotFound`.
fn owned_by(task: Option<Task>, owner: UserId) -> Result<Task, ApiError> {
    match task {
        Some(task) if task.user_id == owner => Ok(task),
        Some(task) => {
            debug!(task_id = task.id, %owner, "task belongs to another user");
            Err(ApiError::NotFound)
        }
        None => Err(ApiError::NotFound),
    }
}

async fn load_owned(store: &dyn TaskStore, owner: UserId, id: TaskId) -> Result<Task, ApiError> {
    owned_by(store.find_by_id(id).await?, owner)
}

pub async fn list_tasks(store: &dyn TaskStore, owner: UserId) -> Result<Vec<Task>, ApiError> {
    Ok(store.list_by_owner(owner).await?)
}

pub async fn create_task(
    store: &dyn TaskStore,
    owner: UserId,
    req: TaskRequest,
) -> Result<Task, ApiError> {
    let fields = validate(req)?;
    Ok(store.create(owner, fields).await?)
}

pub async fn get_task(store: &dyn TaskStore, owner: UserId, id: TaskId) -> Result<Task, ApiError> {
    load_owned(store, owner, id).await
}

pub async fn update_task(
    store: &dyn TaskStore,
    owner: UserId,
    id: TaskId,
    req: TaskRequest,
) -> Result<Task, ApiError> {
    let fields = validate(req)?;
    load_owned(store, owner, id).await?;
    // Conditional on (id, owner); a concurrent delete surfaces as NotFound.
    store
        .update(id, owner, fields)
        .await?
        .ok_or(ApiError::NotFound)
}

pub async fn delete_task(store: &dyn TaskStore, owner: UserId, id: TaskId) -> Result<(), ApiError> {
    load_owned(store, owner, id).await?;
    match store.delete(id, owner).await? {
        0 => Err(ApiError::NotFound),
        _ => Ok(()),
    }
}
