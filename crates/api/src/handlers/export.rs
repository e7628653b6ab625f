//! CSV export endpoint for a project's tasks or bugs/notes.

use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::response::Response;
use chrono::Utc;
use serde::Deserialize;
use taskboard_core::error::CoreError;
use taskboard_core::export::{bug_notes_to_csv, tasks_to_csv, BugNoteCsvRow, TaskCsvRow};
use taskboard_core::types::DbId;
use taskboard_db::models::project::Project;
use taskboard_db::repositories::{BugNoteRepo, ProjectRepo, TaskRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for the export endpoint.
#[derive(Debug, Deserialize)]
pub struct ExportParams {
    /// Which collection to export: `tasks` or `bugs`.
    pub view: String,
}

/// GET /api/v1/projects/{id}/export?view=tasks|bugs
///
/// Returns `text/csv` as a download attachment. Rows come out in the
/// collection's stored order.
pub async fn export_csv(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<ExportParams>,
) -> AppResult<Response> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    let (csv, view) = match params.view.as_str() {
        "tasks" => (export_tasks(&state, id).await?, "tasks"),
        "bugs" => (export_bug_notes(&state, id).await?, "bugs_notes"),
        other => {
            return Err(AppError::BadRequest(format!(
                "Unknown export view '{other}', expected 'tasks' or 'bugs'"
            )))
        }
    };

    let filename = export_filename(&project, view);
    Ok(Response::builder()
        .status(200)
        .header("Content-Type", "text/csv; charset=utf-8")
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        )
        .body(Body::from(csv))
        .unwrap())
}

/// Build the task CSV, resolving assignees to user names in memory.
async fn export_tasks(state: &AppState, project_id: DbId) -> AppResult<String> {
    let tasks = TaskRepo::list_by_project(&state.pool, project_id).await?;
    let users = UserRepo::list(&state.pool).await?;

    let rows: Vec<TaskCsvRow> = tasks
        .iter()
        .map(|t| TaskCsvRow {
            date: t.due_date,
            description: t.description.clone(),
            responsible: t
                .assignee_id
                .and_then(|uid| users.iter().find(|u| u.id == uid))
                .map(|u| u.name.clone())
                .unwrap_or_default(),
            priority: t.priority.label().to_string(),
            hours_estimated: t.hours_estimated,
            hours_done: t.hours_done,
            status: t.state.label().to_string(),
        })
        .collect();

    Ok(tasks_to_csv(&rows))
}

/// Build the bug/note CSV, resolving linked tasks to descriptions in memory.
async fn export_bug_notes(state: &AppState, project_id: DbId) -> AppResult<String> {
    let bug_notes = BugNoteRepo::list_by_project(&state.pool, project_id).await?;
    let tasks = TaskRepo::list_by_project(&state.pool, project_id).await?;

    let rows: Vec<BugNoteCsvRow> = bug_notes
        .iter()
        .map(|n| BugNoteCsvRow {
            date: n.date,
            kind: n.kind.label().to_string(),
            content: n.content.clone(),
            linked_task: n
                .task_id
                .and_then(|tid| tasks.iter().find(|t| t.id == tid))
                .map(|t| t.description.clone())
                .unwrap_or_default(),
        })
        .collect();

    Ok(bug_notes_to_csv(&rows))
}

/// Derive a download filename from the project name, view, and current date.
fn export_filename(project: &Project, view: &str) -> String {
    let name: String = project
        .name
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    format!("{name}_{view}_{}.csv", Utc::now().format("%Y-%m-%d"))
}
