use std::io::Write;
use std::path::{Path, PathBuf};

use super::paths::ensure_parent;
use crate::kernel::services::ports::{PreviewError, PreviewSurface};

/// Holds the last composed document and, when a path is configured, mirrors it to disk so an
/// external browser can load it. The file is replaced atomically on every load.
pub struct DocumentPreview {
    document: String,
    path: Option<PathBuf>,
    pointer_passthrough: bool,
    loads: u64,
}

impl DocumentPreview {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            document: String::new(),
            path,
            pointer_passthrough: true,
            loads: 0,
        }
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn pointer_passthrough(&self) -> bool {
        self.pointer_passthrough
    }

    /// Number of documents loaded so far.
    pub fn loads(&self) -> u64 {
        self.loads
    }

    fn write_file(path: &Path, document: &str) -> std::io::Result<()> {
        ensure_parent(path)?;
        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let result = (|| {
            let mut file = std::fs::File::create(&tmp)?;
            file.write_all(document.as_bytes())?;
            file.sync_all()?;
            std::fs::rename(&tmp, path)
        })();
        if result.is_err() {
            let _ = std::fs::remove_file(&tmp);
        }
        result
    }
}

impl PreviewSurface for DocumentPreview {
    fn load_document(&mut self, document: &str) -> Result<(), PreviewError> {
        self.document.clear();
        self.document.push_str(document);
        self.loads = self.loads.saturating_add(1);

        if let Some(path) = self.path.as_deref() {
            Self::write_file(path, document).map_err(|source| PreviewError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        Ok(())
    }

    fn set_pointer_passthrough(&mut self, enabled: bool) {
        self.pointer_passthrough = enabled;
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/preview.rs"]
mod tests;
