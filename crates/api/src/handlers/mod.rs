//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers validate input via `taskboard_core::validation`, delegate to the
//! corresponding repository in `taskboard_db`, and map errors via
//! [`crate::error::AppError`].

pub mod bug_note;
pub mod export;
pub mod metrics;
pub mod project;
pub mod task;
pub mod user;
