//! Operator-facing output for an [`EditOutcome`].
//!
//! These lines are the product output of `linefix` and go to stdout. They are
//! independent of `RUST_LOG`.

use std::path::Path;

use crate::edit::EditOutcome;

/// Render the stdout lines for `outcome` on `path`.
///
/// Removed content is shown with debug escaping so terminators and
/// whitespace stay visible.
pub fn report_lines(path: &Path, outcome: &EditOutcome) -> Vec<String> {
    match outcome {
        EditOutcome::NotFound { path } => vec![format!("Error: {} not found", path.display())],
        EditOutcome::Unchanged => {
            vec!["No lines were removed. Check line numbers or content.".to_string()]
        }
        EditOutcome::Updated { removed } => {
            let mut out: Vec<String> = removed
                .iter()
                .map(|line| format!("Removing line {}: {:?}", line.number, line.content))
                .collect();
            out.push(format!(
                "Successfully updated {}, removed {} lines",
                display_name(path),
                removed.len()
            ));
            out
        }
    }
}

fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}
