//! Task entity model, DTOs, and closed vocabularies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskboard_core::types::{DbId, Timestamp};

/// Task urgency, stored as the `task_priority` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "task_priority", rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    /// Display string used in exports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Task completion state, stored as the `task_state` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "task_state", rename_all = "snake_case")]
pub enum TaskState {
    Done,
    NotDone,
}

impl TaskState {
    /// Display string used in exports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Done => "done",
            Self::NotDone => "not done",
        }
    }

    pub fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }
}

/// A task row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub project_id: DbId,
    /// Calendar date the task is due; not validated against the project
    /// timeline.
    pub due_date: NaiveDate,
    pub description: String,
    /// Responsible user, if any. Checked for existence at assignment time
    /// only.
    pub assignee_id: Option<DbId>,
    pub priority: TaskPriority,
    pub hours_estimated: f64,
    pub hours_done: f64,
    pub state: TaskState,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new task.
///
/// `project_id` is overwritten from the URL path by the handler.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    #[serde(default)]
    pub project_id: DbId,
    pub due_date: NaiveDate,
    pub description: String,
    pub assignee_id: Option<DbId>,
    pub priority: TaskPriority,
    pub hours_estimated: f64,
    /// Defaults to 0 if omitted.
    #[serde(default)]
    pub hours_done: f64,
    pub state: TaskState,
}

/// DTO for updating an existing task. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTask {
    pub due_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub assignee_id: Option<DbId>,
    pub priority: Option<TaskPriority>,
    pub hours_estimated: Option<f64>,
    pub hours_done: Option<f64>,
    pub state: Option<TaskState>,
}
