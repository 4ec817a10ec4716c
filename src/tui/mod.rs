//! Terminal integration (crossterm + ratatui).
//!
//! Kept apart from `kernel`, `app` and `views` so those stay usable without terminal crates.

pub mod crossterm;
pub mod display;
pub mod terminal_guard;

pub use display::TerminalDisplayHost;
#[cfg(unix)]
pub use terminal_guard::install_termination_signals;
pub use terminal_guard::{TerminalGuard, TerminationSignal};
