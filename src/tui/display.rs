use std::io::IsTerminal;

use crate::kernel::services::ports::{DisplayError, DisplayHost};

/// Fullscreen in a terminal means dropping the header and status rows; the workbench does that
/// once the state records it. All this host checks is that there is a terminal to draw on.
pub struct TerminalDisplayHost {
    interactive: bool,
}

impl TerminalDisplayHost {
    pub fn new() -> Self {
        Self::with_interactive(std::io::stdout().is_terminal())
    }

    pub fn with_interactive(interactive: bool) -> Self {
        Self { interactive }
    }
}

impl Default for TerminalDisplayHost {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayHost for TerminalDisplayHost {
    fn request_fullscreen(&mut self, enabled: bool) -> Result<(), DisplayError> {
        if !self.interactive {
            return Err(DisplayError::Unsupported);
        }
        tracing::debug!(enabled, "fullscreen");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/display.rs"]
mod tests;
