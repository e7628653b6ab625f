//! Derived project metrics endpoint.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use taskboard_core::error::CoreError;
use taskboard_core::metrics::{progress_percent, project_status, ProjectStatus, TaskEffort};
use taskboard_core::types::DbId;
use taskboard_db::models::task::Task;
use taskboard_db::repositories::{ProjectRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Progress and status derived from a project's tasks.
#[derive(Debug, Serialize)]
pub struct ProjectMetrics {
    pub project_id: DbId,
    /// Percentage of the effort budget logged, capped at 100.
    pub progress: u8,
    pub status: ProjectStatus,
    pub status_label: &'static str,
}

fn task_efforts(tasks: &[Task]) -> Vec<TaskEffort> {
    tasks
        .iter()
        .map(|t| TaskEffort {
            hours_done: t.hours_done,
            done: t.state.is_done(),
            due_date: t.due_date,
        })
        .collect()
}

/// GET /api/v1/projects/{id}/metrics
pub async fn get_metrics(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectMetrics>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    let tasks = TaskRepo::list_by_project(&state.pool, id).await?;

    let efforts = task_efforts(&tasks);
    let status = project_status(project.estimation_days, &efforts, Utc::now());

    Ok(Json(ProjectMetrics {
        project_id: id,
        progress: progress_percent(project.estimation_days, &efforts),
        status,
        status_label: status.label(),
    }))
}
