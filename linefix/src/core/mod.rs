//! Deterministic, pure logic for the line editor.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! line sequences and return deterministic outputs suitable for tests.

pub mod filter;
pub mod lines;
pub mod rules;
