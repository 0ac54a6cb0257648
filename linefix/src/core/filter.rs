//! Single-pass positional filter over the target file's lines.

use crate::core::lines::Line;
use crate::core::rules::{Disposition, RemovalReason, RemovalRules};

/// A line dropped by the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedLine {
    pub number: usize,
    pub reason: RemovalReason,
    /// Exact original content, terminator included.
    pub content: String,
}

/// Lines kept and lines removed, both in original file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterResult {
    pub retained: Vec<Line>,
    pub removed: Vec<RemovedLine>,
}

impl FilterResult {
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }
}

/// Apply `rules` to every line, preserving the relative order of kept lines.
pub fn filter_lines(lines: Vec<Line>, rules: &RemovalRules) -> FilterResult {
    let mut result = FilterResult::default();
    for line in lines {
        match rules.disposition(&line) {
            Disposition::Keep => result.retained.push(line),
            Disposition::Remove(reason) => result.removed.push(RemovedLine {
                number: line.number,
                reason,
                content: line.original(),
            }),
        }
    }
    result
}
