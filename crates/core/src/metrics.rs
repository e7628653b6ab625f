//! Derived project metrics: progress percentage and status label.
//!
//! Pure logic over per-task effort records; the caller supplies the current
//! time, so evaluation is deterministic and clock-free here.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Working hours represented by one estimation day.
pub const HOURS_PER_DAY: f64 = 8.0;

/// Progress is capped at this percentage.
pub const MAX_PROGRESS: u8 = 100;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// The slice of a task that matters for metrics.
#[derive(Debug, Clone)]
pub struct TaskEffort {
    pub hours_done: f64,
    pub done: bool,
    pub due_date: NaiveDate,
}

// ---------------------------------------------------------------------------
// Status enum
// ---------------------------------------------------------------------------

/// Derived project status.
///
/// Variants are ordered by evaluation precedence: a fully-progressed project
/// is `Completed` even when it still carries an overdue open task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Completed,
    Late,
    InProgress,
}

impl ProjectStatus {
    /// Human-readable label for display in the UI.
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Late => "Late",
            Self::InProgress => "In progress",
        }
    }
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

/// Percentage of the project's estimated effort actually logged, capped at
/// 100.
///
/// The effort budget is `estimation_days * 8` hours (`estimation_days` is
/// validated positive at creation). A project with no tasks reports 0 --
/// nothing started, and no division by a zero task set. Rounding is
/// half-away-from-zero (`f64::round`), applied to the percentage only, never
/// to intermediate hour sums.
pub fn progress_percent(estimation_days: i32, tasks: &[TaskEffort]) -> u8 {
    if tasks.is_empty() {
        return 0;
    }
    let budget_hours = f64::from(estimation_days) * HOURS_PER_DAY;
    let logged_hours: f64 = tasks.iter().map(|t| t.hours_done).sum();
    let percent = (logged_hours / budget_hours * 100.0).round();
    percent.min(f64::from(MAX_PROGRESS)) as u8
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Derive the project status from progress and task due dates.
///
/// Precedence: progress at 100 wins over lateness; otherwise any open task
/// whose due date (taken at UTC midnight) lies strictly before `now` marks
/// the project late.
pub fn project_status(
    estimation_days: i32,
    tasks: &[TaskEffort],
    now: Timestamp,
) -> ProjectStatus {
    if progress_percent(estimation_days, tasks) >= MAX_PROGRESS {
        return ProjectStatus::Completed;
    }

    let has_overdue_task = tasks
        .iter()
        .any(|t| !t.done && t.due_date.and_time(NaiveTime::MIN).and_utc() < now);

    if has_overdue_task {
        ProjectStatus::Late
    } else {
        ProjectStatus::InProgress
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn task(hours_done: f64, done: bool, due_date: &str) -> TaskEffort {
        TaskEffort {
            hours_done,
            done,
            due_date: due_date.parse().unwrap(),
        }
    }

    fn at(date: &str) -> Timestamp {
        Utc.from_utc_datetime(&format!("{date}T12:00:00").parse().unwrap())
    }

    // -- progress_percent --

    #[test]
    fn progress_zero_without_tasks() {
        assert_eq!(progress_percent(10, &[]), 0);
    }

    #[test]
    fn progress_half_of_budget() {
        // 10 days = 80 hours budget; 40 hours logged -> 50%.
        let tasks = vec![task(40.0, false, "2023-05-10")];
        assert_eq!(progress_percent(10, &tasks), 50);
    }

    #[test]
    fn progress_sums_across_tasks() {
        let tasks = vec![
            task(18.0, true, "2023-05-10"),
            task(20.0, false, "2023-05-15"),
        ];
        // 20 days = 160 hours; 38 logged -> 23.75 -> 24.
        assert_eq!(progress_percent(20, &tasks), 24);
    }

    #[test]
    fn progress_caps_at_one_hundred() {
        let tasks = vec![task(500.0, true, "2023-05-10")];
        assert_eq!(progress_percent(10, &tasks), 100);
    }

    #[test]
    fn progress_rounds_half_away_from_zero() {
        // 39.6 / 80 hours -> 49.5% -> 50.
        let tasks = vec![task(39.6, false, "2023-05-10")];
        assert_eq!(progress_percent(10, &tasks), 50);
    }

    #[test]
    fn progress_rounds_small_fraction_up() {
        // 0.4 / 80 hours -> 0.5% -> 1.
        let tasks = vec![task(0.4, false, "2023-05-10")];
        assert_eq!(progress_percent(10, &tasks), 1);
    }

    // -- project_status --

    #[test]
    fn status_completed_beats_late() {
        // 80 of 80 hours logged but the task is open and overdue: completion
        // takes precedence.
        let tasks = vec![task(80.0, false, "2023-01-01")];
        let status = project_status(10, &tasks, at("2024-01-01"));
        assert_eq!(status, ProjectStatus::Completed);
    }

    #[test]
    fn status_late_for_overdue_open_task() {
        let tasks = vec![task(40.0, false, "2023-01-01")];
        let status = project_status(10, &tasks, at("2024-01-01"));
        assert_eq!(status, ProjectStatus::Late);
    }

    #[test]
    fn status_in_progress_when_open_task_is_not_due_yet() {
        let tasks = vec![task(40.0, false, "2024-06-01")];
        let status = project_status(10, &tasks, at("2024-01-01"));
        assert_eq!(status, ProjectStatus::InProgress);
    }

    #[test]
    fn status_in_progress_when_overdue_task_is_done() {
        let tasks = vec![task(40.0, true, "2023-01-01")];
        let status = project_status(10, &tasks, at("2024-01-01"));
        assert_eq!(status, ProjectStatus::InProgress);
    }

    #[test]
    fn status_in_progress_without_tasks() {
        let status = project_status(10, &[], at("2024-01-01"));
        assert_eq!(status, ProjectStatus::InProgress);
    }

    #[test]
    fn due_today_is_late_once_the_day_has_started() {
        // Due dates compare at UTC midnight, so noon on the due date already
        // counts as overdue.
        let tasks = vec![task(0.0, false, "2024-01-01")];
        let status = project_status(10, &tasks, at("2024-01-01"));
        assert_eq!(status, ProjectStatus::Late);
    }

    #[test]
    fn status_labels() {
        assert_eq!(ProjectStatus::Completed.label(), "Completed");
        assert_eq!(ProjectStatus::Late.label(), "Late");
        assert_eq!(ProjectStatus::InProgress.label(), "In progress");
    }
}
