//! I/O helpers for the line editor.

pub mod config;
pub mod target;
