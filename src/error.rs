//! Crate-level error types.

use std::fmt;

/// Errors produced by the wisp crate.
///
/// The geometry core itself is infallible (invalid buffers are a caller
/// contract violation, not a recoverable error); only the shape preset I/O
/// layer can fail.
#[derive(Debug)]
pub enum WispError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for WispError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for WispError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for WispError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
