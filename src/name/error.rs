use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while parsing or building name templates
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NameError {
    /// The filename does not have the shape of a sequence member
    #[error("Malformed sequence name '{name}': {reason}")]
    MalformedName { name: String, reason: String },
    /// A start/end value is neither a number nor a run of `#`
    #[error("Invalid frame value '{0}': expected digits or a run of '#'")]
    InvalidFrame(String),
    /// The path has no final component to parse
    #[error("Path has no file name: {0}")]
    MissingFileName(PathBuf),
}

impl NameError {
    #[must_use]
    pub fn malformed(name: &str, reason: &str) -> Self {
        Self::MalformedName {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}
