//! Stable exit codes for the `linefix` CLI.

use crate::edit::EditOutcome;

/// Target edited, or nothing matched.
pub const OK: i32 = 0;
/// I/O failure, invalid config or invalid rules.
pub const FAILURE: i32 = 1;
/// Target file does not exist.
pub const MISSING_TARGET: i32 = 3;

/// Exit code for a completed edit.
pub fn for_outcome(outcome: &EditOutcome) -> i32 {
    match outcome {
        EditOutcome::NotFound { .. } => MISSING_TARGET,
        EditOutcome::Unchanged | EditOutcome::Updated { .. } => OK,
    }
}
