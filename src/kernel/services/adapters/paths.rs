//! Per-user directories.
//!
//! - macOS: ~/Library/Application Support/livecode/{session,logs}
//! - Linux: ~/.local/share/livecode/{session,logs}
//! - Windows: %APPDATA%\livecode\{session,logs}

use std::path::{Path, PathBuf};

pub(crate) const APP_NAME: &str = "livecode";
const SESSION_DIR: &str = "session";
const LOG_DIR: &str = "logs";

pub fn get_data_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        std::env::var("HOME").ok().map(|home| {
            PathBuf::from(home)
                .join("Library/Application Support")
                .join(APP_NAME)
        })
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
            Some(PathBuf::from(xdg).join(APP_NAME))
        } else {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".local/share").join(APP_NAME))
        }
    }

    #[cfg(target_os = "windows")]
    {
        std::env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_NAME))
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

pub(crate) fn get_cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Caches"))
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
            return Some(PathBuf::from(xdg));
        }
        std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".cache"))
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(local) = std::env::var("LOCALAPPDATA") {
            return Some(PathBuf::from(local));
        }
        std::env::var("APPDATA").ok().map(PathBuf::from)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

/// Where saved buffers live between runs.
pub fn get_session_dir() -> Option<PathBuf> {
    get_data_dir().map(|p| p.join(SESSION_DIR))
}

pub fn get_log_dir() -> Option<PathBuf> {
    get_data_dir().map(|p| p.join(LOG_DIR))
}

pub fn ensure_session_dir() -> std::io::Result<PathBuf> {
    ensure_dir(get_session_dir(), "Cannot determine session directory")
}

pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    ensure_dir(get_log_dir(), "Cannot determine log directory")
}

pub(crate) fn ensure_parent(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn ensure_dir(dir: Option<PathBuf>, missing: &str) -> std::io::Result<PathBuf> {
    let dir = dir.ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, missing))?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/paths.rs"]
mod tests;
