//! Bug/note entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskboard_core::types::{DbId, Timestamp};

/// Record kind, stored as the `bug_note_kind` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "bug_note_kind", rename_all = "lowercase")]
pub enum BugNoteKind {
    Bug,
    Note,
}

impl BugNoteKind {
    /// Display string used in exports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Bug => "bug",
            Self::Note => "note",
        }
    }
}

/// A bug or note row from the `bug_notes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BugNote {
    pub id: DbId,
    pub project_id: DbId,
    pub date: NaiveDate,
    pub kind: BugNoteKind,
    pub content: String,
    /// Optional link to a task in the same project. Set to NULL by the
    /// database when the task is deleted; the bug/note itself survives.
    pub task_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new bug/note.
///
/// `project_id` is overwritten from the URL path by the handler.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBugNote {
    #[serde(default)]
    pub project_id: DbId,
    pub date: NaiveDate,
    pub kind: BugNoteKind,
    pub content: String,
    pub task_id: Option<DbId>,
}

/// DTO for updating an existing bug/note. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBugNote {
    pub date: Option<NaiveDate>,
    pub kind: Option<BugNoteKind>,
    pub content: Option<String>,
    pub task_id: Option<DbId>,
}
