//! Read → filter → conditionally write, for a single target file.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use tracing::{debug, info, warn};

use crate::core::filter::{RemovedLine, filter_lines};
use crate::core::rules::RemovalRules;
use crate::io::target::{read_target, target_exists, write_target};

/// Structured result of one editor run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Nothing exists at the target path; nothing was read or created.
    NotFound { path: PathBuf },
    /// No line matched the rules; the file was not rewritten.
    Unchanged,
    /// The file was rewritten without `removed`.
    Updated { removed: Vec<RemovedLine> },
}

impl EditOutcome {
    pub fn removed_count(&self) -> usize {
        match self {
            Self::Updated { removed } => removed.len(),
            Self::NotFound { .. } | Self::Unchanged => 0,
        }
    }
}

/// Remove lines matching `rules` from the file at `path`, in place.
///
/// Runs are not guarded against re-application: a second run removes lines
/// again if the new content at the same positions matches the rules.
pub fn edit(path: &Path, rules: &RemovalRules) -> Result<EditOutcome> {
    let errors = rules.validate();
    if !errors.is_empty() {
        bail!("invalid rules:\n- {}", errors.join("\n- "));
    }

    if !target_exists(path) {
        warn!(path = %path.display(), "target not found");
        return Ok(EditOutcome::NotFound {
            path: path.to_path_buf(),
        });
    }

    let lines = read_target(path)?;
    debug!(path = %path.display(), lines = lines.len(), "target read");

    let result = filter_lines(lines, rules);
    for removed in &result.removed {
        debug!(line = removed.number, reason = ?removed.reason, "line removed");
    }

    if result.removed.is_empty() {
        info!(path = %path.display(), "no lines matched, leaving target untouched");
        return Ok(EditOutcome::Unchanged);
    }

    let bytes = write_target(path, &result.retained)?;
    info!(
        path = %path.display(),
        removed = result.removed_count(),
        bytes,
        "target rewritten"
    );
    Ok(EditOutcome::Updated {
        removed: result.removed,
    })
}
