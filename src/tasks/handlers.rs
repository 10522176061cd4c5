use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use super::{dto::TaskRequest, repo_types::Task, services};
use crate::{auth::extractors::AuthUser, error::ApiError, state::AppState, store::TaskId};

// --- public routers ---

pub fn task_routes() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/:id",
            get(get_task).put(update_task).delete(delete_task),
        )
}

// --- handlers ---

#[instrument(skip(state))]
pub async fn list_tasks(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = services::list_tasks(state.tasks.as_ref(), user_id).await?;
    Ok(Json(tasks))
}

#[instrument(skip(state, payload))]
pub async fn create_task(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    payload: Result<Json<TaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let Json(payload) = payload?;
    let task = services::create_task(state.tasks.as_ref(), user_id, payload).await?;
    info!(task_id = task.id, %user_id, "task created");
    Ok((StatusCode::CREATED, Json(task)))
}

#[instrument(skip(state, id))]
pub async fn get_task(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    id: Result<Path<TaskId>, PathRejection>,
) -> Result<Json<Task>, ApiError> {
    let Path(id) = id?;
    let task = services::get_task(state.tasks.as_ref(), user_id, id).await?;
    Ok(Json(task))
}

#[instrument(skip(state, id, payload))]
pub async fn update_task(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    id: Result<Path<TaskId>, PathRejection>,
    payload: Result<Json<TaskRequest>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let task = services::update_task(state.tasks.as_ref(), user_id, id, payload).await?;
    info!(task_id = task.id, %user_id, "task updated");
    Ok(Json(task))
}

#[instrument(skip(state, id))]
pub async fn delete_task(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    id: Result<Path<TaskId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    services::delete_task(state.tasks.as_ref(), user_id, id).await?;
    info!(task_id = id, %user_id, "task deleted");
    Ok(StatusCode::NO_CONTENT)
}
