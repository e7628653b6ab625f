//! Handlers for the `/projects/{project_id}/bug-notes` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use taskboard_core::error::CoreError;
use taskboard_core::types::DbId;
use taskboard_core::validation::require_non_empty;
use taskboard_db::models::bug_note::{BugNote, CreateBugNote, UpdateBugNote};
use taskboard_db::repositories::{BugNoteRepo, ProjectRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

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

/// Check that a linked task resolves within the same project.
///
/// Existence is only enforced at assignment time; once the task is deleted
/// the database clears the link.
async fn require_linked_task(
    state: &AppState,
    project_id: DbId,
    task_id: DbId,
) -> AppResult<()> {
    let task = TaskRepo::find_scoped(&state.pool, project_id, task_id).await?;
    if task.is_none() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "task_id {task_id} does not resolve within project {project_id}"
        ))));
    }
    Ok(())
}

/// POST /api/v1/projects/{project_id}/bug-notes
///
/// Overrides `input.project_id` with the value from the URL path to ensure
/// the bug/note is created under the correct project.
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(mut input): Json<CreateBugNote>,
) -> AppResult<(StatusCode, Json<BugNote>)> {
    require_project(&state, project_id).await?;
    require_non_empty("content", &input.content)?;
    if let Some(task_id) = input.task_id {
        require_linked_task(&state, project_id, task_id).await?;
    }
    input.project_id = project_id;
    let bug_note = BugNoteRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(bug_note)))
}

/// GET /api/v1/projects/{project_id}/bug-notes
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<BugNote>>> {
    require_project(&state, project_id).await?;
    let bug_notes = BugNoteRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(bug_notes))
}

/// GET /api/v1/projects/{project_id}/bug-notes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<BugNote>> {
    let bug_note = BugNoteRepo::find_scoped(&state.pool, project_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BugNote",
            id,
        }))?;
    Ok(Json(bug_note))
}

/// PUT /api/v1/projects/{project_id}/bug-notes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateBugNote>,
) -> AppResult<Json<BugNote>> {
    if let Some(content) = &input.content {
        require_non_empty("content", content)?;
    }
    if let Some(task_id) = input.task_id {
        require_linked_task(&state, project_id, task_id).await?;
    }
    let bug_note = BugNoteRepo::update_scoped(&state.pool, project_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BugNote",
            id,
        }))?;
    Ok(Json(bug_note))
}

/// DELETE /api/v1/projects/{project_id}/bug-notes/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = BugNoteRepo::delete_scoped(&state.pool, project_id, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "BugNote",
            id,
        }))
    }
}
