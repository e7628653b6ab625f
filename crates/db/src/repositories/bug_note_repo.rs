//! Repository for the `bug_notes` table.
//!
//! Bug/notes are always addressed through their owning project, like tasks.

use sqlx::PgPool;
use taskboard_core::types::DbId;

use crate::models::bug_note::{BugNote, CreateBugNote, UpdateBugNote};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, date, kind, content, task_id, created_at, updated_at";

/// Provides project-scoped CRUD operations for bugs and notes.
pub struct BugNoteRepo;

impl BugNoteRepo {
    /// Insert a new bug/note, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBugNote) -> Result<BugNote, sqlx::Error> {
        let query = format!(
            "INSERT INTO bug_notes (project_id, date, kind, content, task_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BugNote>(&query)
            .bind(input.project_id)
            .bind(input.date)
            .bind(input.kind)
            .bind(&input.content)
            .bind(input.task_id)
            .fetch_one(pool)
            .await
    }

    /// List a project's bugs and notes in creation order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<BugNote>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bug_notes WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, BugNote>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Find a bug/note by id within the given project.
    pub async fn find_scoped(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
    ) -> Result<Option<BugNote>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bug_notes WHERE project_id = $1 AND id = $2");
        sqlx::query_as::<_, BugNote>(&query)
            .bind(project_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a bug/note within the given project. Only non-`None` fields in
    /// `input` are applied.
    ///
    /// Returns `None` if the id does not resolve under that project.
    pub async fn update_scoped(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
        input: &UpdateBugNote,
    ) -> Result<Option<BugNote>, sqlx::Error> {
        let query = format!(
            "UPDATE bug_notes SET
                date = COALESCE($3, date),
                kind = COALESCE($4, kind),
                content = COALESCE($5, content),
                task_id = COALESCE($6, task_id)
             WHERE project_id = $1 AND id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BugNote>(&query)
            .bind(project_id)
            .bind(id)
            .bind(input.date)
            .bind(input.kind)
            .bind(&input.content)
            .bind(input.task_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a bug/note within the given project. Returns `true` if a row
    /// was removed.
    pub async fn delete_scoped(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bug_notes WHERE project_id = $1 AND id = $2")
            .bind(project_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
