use std::fmt;

/// Host display capabilities outside the preview surface.
pub trait DisplayHost {
    fn request_fullscreen(&mut self, enabled: bool) -> Result<(), DisplayError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayError {
    Unsupported,
    Denied(String),
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::Unsupported => write!(f, "fullscreen is not supported"),
            DisplayError::Denied(msg) => write!(f, "fullscreen request denied: {}", msg),
        }
    }
}

impl std::error::Error for DisplayError {}
