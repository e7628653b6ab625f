//! User entity model.

use serde::Serialize;
use sqlx::FromRow;
use taskboard_core::types::{DbId, Timestamp};

/// A user row from the `users` table.
///
/// Users are reference data: seeded by migration, read-only through the API,
/// and referenced (weakly) by tasks and project member lists for display.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
    /// Free-text role label (e.g. `"Developer"`).
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
