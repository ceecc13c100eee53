//! Task API endpoints
//!
//! RESTful API for task CRUD operations.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use taskboard_core::task::{validate_title, Task, TaskRepository, TaskStatus};
use taskboard_core::Error;

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListTasksQuery {
    #[serde(default)]
    pub status: Option<String>,
    /// Case-insensitive title search
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub(crate) type ApiError = (StatusCode, Json<ErrorResponse>);

/// Map a store error onto an HTTP status and JSON body
pub(crate) fn api_error(err: Error) -> ApiError {
    let status = if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else if err.is_validation() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    if status.is_server_error() {
        tracing::error!("Task store failure: {}", err);
    }

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

fn parse_status(raw: &str) -> Result<TaskStatus, ApiError> {
    raw.parse().map_err(api_error)
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/tasks - List tasks, optionally filtered by status or searched by title
async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<ListTasksQuery>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let status = query.status.as_deref().map(parse_status).transpose()?;
    let store = state.task_store();

    let tasks = match query.q {
        Some(q) => {
            let mut found = store.search(&q).await.map_err(api_error)?;
            if let Some(status) = status {
                found.retain(|t| t.status == status);
            }
            found
        }
        None => store.list(status).await.map_err(api_error)?,
    };

    Ok(Json(tasks))
}

/// POST /api/tasks - Create a new task
async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let title = validate_title(&req.title).map_err(api_error)?;
    let status = match req.status.as_deref() {
        Some(raw) => parse_status(raw)?,
        None => TaskStatus::default(),
    };

    let created = state
        .task_store()
        .create(title, status)
        .await
        .map_err(api_error)?;

    tracing::info!("Created task #{} in {}", created.id, created.status);
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/tasks/:id - Get a single task
async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Task>, ApiError> {
    let task = state.task_store().get(id).await.map_err(api_error)?;
    Ok(Json(task))
}

/// PUT|PATCH /api/tasks/:id - Move a task to a new status
async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<Task>, ApiError> {
    let Some(raw) = req.status.as_deref() else {
        return Err(api_error(Error::InvalidInput(
            "Task status required".to_string(),
        )));
    };
    let status = parse_status(raw)?;

    let updated = state
        .task_store()
        .update_status(id, status)
        .await
        .map_err(api_error)?;

    tracing::info!("Moved task #{} to {}", id, status);
    Ok(Json(updated))
}

/// DELETE /api/tasks/:id - Delete a task
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    state.task_store().delete(id).await.map_err(api_error)?;

    tracing::info!("Deleted task #{}", id);
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route(
            "/api/tasks/{id}",
            get(get_task)
                .put(update_task)
                .patch(update_task)
                .delete(delete_task),
        )
}
