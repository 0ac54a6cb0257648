//! Test-only helpers for building target files and lines.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::lines::{Line, Terminator};

/// Create an LF-terminated line with the given position and text.
pub fn line(number: usize, text: &str) -> Line {
    Line {
        number,
        text: text.to_string(),
        terminator: Some(Terminator::Lf),
    }
}

/// `count` LF-terminated lines reading `line 1`, `line 2`, ...
pub fn numbered_lines(count: usize) -> String {
    (1..=count).map(|n| format!("line {}\n", n)).collect()
}

/// Replace the text of 1-based line `number` in `contents`, keeping terminators.
pub fn replace_line(contents: &str, number: usize, text: &str) -> String {
    contents
        .split_inclusive('\n')
        .enumerate()
        .map(|(idx, original)| {
            if idx + 1 != number {
                return original.to_string();
            }
            let body = original.trim_end_matches(['\r', '\n']);
            format!("{}{}", text, &original[body.len()..])
        })
        .collect()
}

/// A target file inside a scratch directory that is removed on drop.
pub struct TestTarget {
    _temp: TempDir,
    path: PathBuf,
}

impl TestTarget {
    /// Create `router.tsx` with `contents` in a fresh temp dir.
    pub fn new(contents: &str) -> Result<Self> {
        let temp = tempfile::tempdir().context("create tempdir")?;
        let path = temp.path().join("router.tsx");
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(Self { _temp: temp, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path).with_context(|| format!("read {}", self.path.display()))
    }
}
