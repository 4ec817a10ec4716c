//! Application layer: the playground orchestrator and the terminal workbench around it.

pub mod playground;
pub mod theme;
pub mod workbench;

pub use playground::{Playground, Services};
pub use workbench::Workbench;
