//! Reading and overwriting the target file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::lines::{Line, render_lines, split_lines};

/// True if something exists at `path`.
///
/// A directory counts as existing; reading it then fails as an I/O error.
pub fn target_exists(path: &Path) -> bool {
    path.exists()
}

/// Read the target as UTF-8 and split it into numbered lines.
pub fn read_target(path: &Path) -> Result<Vec<Line>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read target {}", path.display()))?;
    Ok(split_lines(&contents))
}

/// Overwrite the target in place with `lines`, LF-terminated.
///
/// Returns the number of bytes written. No backup is kept.
pub fn write_target(path: &Path, lines: &[Line]) -> Result<usize> {
    let buf = render_lines(lines);
    fs::write(path, &buf).with_context(|| format!("write target {}", path.display()))?;
    Ok(buf.len())
}
