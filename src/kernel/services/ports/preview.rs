use std::fmt;
use std::io;
use std::path::PathBuf;

/// Isolated rendering surface for composed documents.
pub trait PreviewSurface {
    /// Replaces the whole surface content with `document`.
    fn load_document(&mut self, document: &str) -> Result<(), PreviewError>;

    /// Whether pointer input reaches the rendered document.
    fn set_pointer_passthrough(&mut self, enabled: bool);
}

#[derive(Debug)]
pub enum PreviewError {
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for PreviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviewError::Write { path, source } => {
                write!(f, "write preview {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for PreviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PreviewError::Write { source, .. } => Some(source),
        }
    }
}
