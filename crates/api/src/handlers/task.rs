//! Handlers for the `/projects/{project_id}/tasks` resource.
//!
//! Tasks are nested under projects; the parent must exist and every lookup
//! is scoped to it.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use taskboard_core::error::CoreError;
use taskboard_core::types::DbId;
use taskboard_core::validation::{require_non_empty, require_non_negative, require_positive};
use taskboard_db::models::task::{CreateTask, Task, UpdateTask};
use taskboard_db::repositories::{ProjectRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn validate_create(input: &CreateTask) -> Result<(), CoreError> {
    require_non_empty("description", &input.description)?;
    require_positive("hours_estimated", input.hours_estimated)?;
    require_non_negative("hours_done", input.hours_done)?;
    Ok(())
}

fn validate_update(input: &UpdateTask) -> Result<(), CoreError> {
    if let Some(description) = &input.description {
        require_non_empty("description", description)?;
    }
    if let Some(hours) = input.hours_estimated {
        require_positive("hours_estimated", hours)?;
    }
    if let Some(hours) = input.hours_done {
        require_non_negative("hours_done", hours)?;
    }
    Ok(())
}

/// Resolve the parent project or fail with NotFound.
async fn require_project(state: &AppState, project_id: DbId) -> AppResult<()> {
    ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;
    Ok(())
}

/// POST /api/v1/projects/{project_id}/tasks
///
/// Overrides `input.project_id` with the value from the URL path to ensure
/// the task is created under the correct project.
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(mut input): Json<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    require_project(&state, project_id).await?;
    validate_create(&input)?;
    input.project_id = project_id;
    let task = TaskRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/v1/projects/{project_id}/tasks
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Task>>> {
    require_project(&state, project_id).await?;
    let tasks = TaskRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(tasks))
}

/// GET /api/v1/projects/{project_id}/tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::find_scoped(&state.pool, project_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    Ok(Json(task))
}

/// PUT /api/v1/projects/{project_id}/tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateTask>,
) -> AppResult<Json<Task>> {
    validate_update(&input)?;
    let task = TaskRepo::update_scoped(&state.pool, project_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    Ok(Json(task))
}

/// DELETE /api/v1/projects/{project_id}/tasks/{id}
///
/// Bug/notes pointing at the task keep their rows; their link is cleared.
pub async fn delete(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = TaskRepo::delete_scoped(&state.pool, project_id, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Task", id }))
    }
}
