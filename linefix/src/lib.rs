//! Positional line remover for undoing a bad edit in a generated file.
//!
//! The editor reads one file, drops lines at configured positions (some only
//! when they contain a trigger substring, some unconditionally), and rewrites
//! the file with LF terminators if anything was removed.
//!
//! - **[`core`]**: Pure line splitting, rules and filtering. No I/O.
//! - **[`io`]**: Config loading and target file access.
//!
//! [`edit`] ties the two together; [`report`] renders its outcome for the CLI.

pub mod core;
pub mod edit;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod report;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
