//! Repository for the `tasks` table.
//!
//! Tasks are always addressed through their owning project, so every lookup
//! filters on `project_id` as well as `id`.

use sqlx::PgPool;
use taskboard_core::types::DbId;

use crate::models::task::{CreateTask, Task, UpdateTask};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, due_date, description, assignee_id, priority, \
    hours_estimated, hours_done, state, created_at, updated_at";

/// Provides project-scoped CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks
                (project_id, due_date, description, assignee_id, priority,
                 hours_estimated, hours_done, state)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(input.project_id)
            .bind(input.due_date)
            .bind(&input.description)
            .bind(input.assignee_id)
            .bind(input.priority)
            .bind(input.hours_estimated)
            .bind(input.hours_done)
            .bind(input.state)
            .fetch_one(pool)
            .await
    }

    /// List a project's tasks in creation order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Find a task by id within the given project.
    pub async fn find_scoped(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE project_id = $1 AND id = $2");
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a task within the given project. Only non-`None` fields in
    /// `input` are applied.
    ///
    /// Returns `None` if the id does not resolve under that project.
    pub async fn update_scoped(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                due_date = COALESCE($3, due_date),
                description = COALESCE($4, description),
                assignee_id = COALESCE($5, assignee_id),
                priority = COALESCE($6, priority),
                hours_estimated = COALESCE($7, hours_estimated),
                hours_done = COALESCE($8, hours_done),
                state = COALESCE($9, state)
             WHERE project_id = $1 AND id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .bind(id)
            .bind(input.due_date)
            .bind(&input.description)
            .bind(input.assignee_id)
            .bind(input.priority)
            .bind(input.hours_estimated)
            .bind(input.hours_done)
            .bind(input.state)
            .fetch_optional(pool)
            .await
    }

    /// Delete a task within the given project. Returns `true` if a row was
    /// removed.
    ///
    /// Bug/notes linking to the task keep their rows; the database clears
    /// their `task_id` to NULL.
    pub async fn delete_scoped(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE project_id = $1 AND id = $2")
            .bind(project_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
