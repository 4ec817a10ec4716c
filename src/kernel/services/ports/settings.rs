use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub formatter: FormatterSettings,
    #[serde(default)]
    pub preview: PreviewSettings,
    #[serde(default)]
    pub layout: LayoutSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatterSettings {
    #[serde(default = "default_formatter_command")]
    pub command: String,
    /// Passed before `--parser <name>`.
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default = "default_formatter_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_formatter_command() -> String {
    "prettier".to_string()
}

fn default_formatter_timeout_ms() -> u64 {
    10_000
}

impl Default for FormatterSettings {
    fn default() -> Self {
        Self {
            command: default_formatter_command(),
            args: Vec::new(),
            timeout_ms: default_formatter_timeout_ms(),
        }
    }
}

impl FormatterSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSettings {
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
}

fn default_settle_delay_ms() -> u64 {
    50
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            settle_delay_ms: default_settle_delay_ms(),
        }
    }
}

impl LayoutSettings {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}
