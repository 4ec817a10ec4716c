use std::fmt;

use crate::kernel::Language;

/// Availability of the formatter, checked before every use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatterStatus {
    Ready,
    NotReady,
    Errored(String),
}

impl FormatterStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, FormatterStatus::Ready)
    }
}

pub trait Formatter {
    fn status(&self) -> FormatterStatus;

    /// Either the complete formatted text or an error; never a partial result.
    fn format(&self, text: &str, lang: Language) -> Result<String, FormatError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    Unavailable,
    Syntax { parser: &'static str, message: String },
    Failed(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Unavailable => write!(f, "formatter unavailable"),
            FormatError::Syntax { parser, message } => {
                write!(f, "{} parser rejected input: {}", parser, message)
            }
            FormatError::Failed(msg) => write!(f, "formatting failed: {}", msg),
        }
    }
}

impl std::error::Error for FormatError {}
