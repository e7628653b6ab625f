//! CSV export of a project's tasks and bugs/notes.
//!
//! Operates on display-ready rows: the caller resolves foreign keys
//! (responsible user, linked task) to names beforehand, with an empty string
//! standing in for anything unassigned or unresolvable. Rows are emitted in
//! the order given, header first.

use chrono::NaiveDate;

/// Header row of the task export.
pub const TASK_CSV_HEADER: &str =
    "Date,Task,Responsible,Priority,Estimated hours,Actual hours,Status";

/// Header row of the bug/note export.
pub const BUG_NOTE_CSV_HEADER: &str = "Date,Kind,Content,Linked task";

/// One task, ready for export.
#[derive(Debug, Clone)]
pub struct TaskCsvRow {
    pub date: NaiveDate,
    pub description: String,
    /// Resolved user name; empty when unassigned.
    pub responsible: String,
    pub priority: String,
    pub hours_estimated: f64,
    pub hours_done: f64,
    pub status: String,
}

/// One bug or note, ready for export.
#[derive(Debug, Clone)]
pub struct BugNoteCsvRow {
    pub date: NaiveDate,
    pub kind: String,
    pub content: String,
    /// Resolved task description; empty when unlinked.
    pub linked_task: String,
}

/// Render a date in its display form, distinct from the stored ISO form.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Quote a single CSV field, doubling embedded quotes.
fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn push_row(csv: &mut String, fields: &[String]) {
    let quoted: Vec<String> = fields.iter().map(|f| csv_field(f)).collect();
    csv.push_str(&quoted.join(","));
    csv.push('\n');
}

/// Serialize task rows to CSV text: header plus one line per task.
pub fn tasks_to_csv(rows: &[TaskCsvRow]) -> String {
    let mut csv = String::from(TASK_CSV_HEADER);
    csv.push('\n');
    for row in rows {
        push_row(
            &mut csv,
            &[
                format_display_date(row.date),
                row.description.clone(),
                row.responsible.clone(),
                row.priority.clone(),
                row.hours_estimated.to_string(),
                row.hours_done.to_string(),
                row.status.clone(),
            ],
        );
    }
    csv
}

/// Serialize bug/note rows to CSV text: header plus one line per record.
pub fn bug_notes_to_csv(rows: &[BugNoteCsvRow]) -> String {
    let mut csv = String::from(BUG_NOTE_CSV_HEADER);
    csv.push('\n');
    for row in rows {
        push_row(
            &mut csv,
            &[
                format_display_date(row.date),
                row.kind.clone(),
                row.content.clone(),
                row.linked_task.clone(),
            ],
        );
    }
    csv
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
