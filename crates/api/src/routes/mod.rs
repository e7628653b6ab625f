pub mod health;
pub mod project;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /users                                   list
/// /users/{id}                              get
///
/// /projects                                list, create
/// /projects/{id}                           get, update, delete
/// /projects/{id}/metrics                   derived progress + status
/// /projects/{id}/export?view=tasks|bugs    CSV download
///
/// /projects/{project_id}/tasks             list, create
/// /projects/{project_id}/tasks/{id}        get, update, delete
/// /projects/{project_id}/bug-notes         list, create
/// /projects/{project_id}/bug-notes/{id}    get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // User reference data (read-only).
        .nest("/users", user::router())
        // Project routes (also nest tasks and bug/notes).
        .nest("/projects", project::router())
}
