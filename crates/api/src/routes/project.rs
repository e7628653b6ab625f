//! Route definitions for the `/projects` resource.
//!
//! Also nests task and bug/note routes under `/projects/{project_id}/...`,
//! and exposes the derived-metrics and CSV export endpoints per project.

use axum::routing::get;
use axum::Router;

use crate::handlers::{bug_note, export, metrics, project, task};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update
/// DELETE /{id}                              -> delete
/// GET    /{id}/metrics                      -> derived progress + status
/// GET    /{id}/export?view=tasks|bugs       -> CSV download
///
/// GET    /{project_id}/tasks                -> list_by_project
/// POST   /{project_id}/tasks                -> create
/// GET    /{project_id}/tasks/{id}           -> get_by_id
/// PUT    /{project_id}/tasks/{id}           -> update
/// DELETE /{project_id}/tasks/{id}           -> delete
///
/// GET    /{project_id}/bug-notes            -> list_by_project
/// POST   /{project_id}/bug-notes            -> create
/// GET    /{project_id}/bug-notes/{id}       -> get_by_id
/// PUT    /{project_id}/bug-notes/{id}       -> update
/// DELETE /{project_id}/bug-notes/{id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    let task_routes = Router::new()
        .route("/", get(task::list_by_project).post(task::create))
        .route(
            "/{id}",
            get(task::get_by_id).put(task::update).delete(task::delete),
        );

    let bug_note_routes = Router::new()
        .route("/", get(bug_note::list_by_project).post(bug_note::create))
        .route(
            "/{id}",
            get(bug_note::get_by_id)
                .put(bug_note::update)
                .delete(bug_note::delete),
        );

    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/metrics", get(metrics::get_metrics))
        .route("/{id}/export", get(export::export_csv))
        .nest("/{project_id}/tasks", task_routes)
        .nest("/{project_id}/bug-notes", bug_note_routes)
}
