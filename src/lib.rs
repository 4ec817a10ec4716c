//! livecode - a live HTML/CSS/JS playground for the terminal.
//!
//! Modules:
//! - kernel: buffers, composition, layout state machine, store, ports and adapters
//! - models: rope text buffer
//! - views: the code editor widget
//! - ui: paint commands and rendering backends
//! - core: frontend-neutral input events
//! - app: playground orchestrator and terminal workbench
//! - tui: crossterm integration (feature `tui`)

pub mod app;
pub mod core;
pub mod kernel;
pub mod models;
pub mod ui;
pub mod views;

#[cfg(feature = "tui")]
pub mod tui;
