//! Paint layer over the terminal.
//!
//! Views emit backend-neutral paint commands; `backend` turns them into ratatui cells or a
//! headless grid for tests.

pub mod backend;
pub mod core;
