//! Crate-level error types.

use std::fmt;

/// Errors produced by the rondel crate.
///
/// The interaction core itself has no fatal path: malformed user input
/// is recovered locally by reverting the entry mirror. Errors only
/// arise from the options layer.
#[derive(Debug)]
pub enum RondelError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for RondelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for RondelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for RondelError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
