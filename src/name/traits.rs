use std::fmt;
use std::path::Path;

use super::error::NameError;

/// Per-field override used by `alter` on optional fields
///
/// `Keep` leaves the field untouched, `Clear` sets it to absent and `Set`
/// replaces it. Required fields use a plain `Option<T>` where `None` keeps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alter<T> {
    Keep,
    Clear,
    Set(T),
}

impl<T> Alter<T> {
    /// Resolve the override against the current value.
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            Self::Keep => current,
            Self::Clear => None,
            Self::Set(v) => Some(v),
        }
    }

    #[must_use]
    pub const fn is_keep(&self) -> bool {
        matches!(self, Self::Keep)
    }
}

impl<T> Default for Alter<T> {
    fn default() -> Self {
        Self::Keep
    }
}

impl<T> From<Option<T>> for Alter<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Clear, Self::Set)
    }
}

/// Capabilities shared by every name template type
pub trait NameTemplate: Sized + fmt::Display {
    /// Field overrides accepted by [`NameTemplate::alter`]
    type Changes;

    /// Build a name from the final component of `path`.
    ///
    /// # Errors
    /// Returns `NameError` if the path has no file name or it cannot be parsed.
    fn from_path(path: impl AsRef<Path>) -> Result<Self, NameError>;

    /// Copy of `self` with `changes` applied.
    #[must_use]
    fn alter(&self, changes: Self::Changes) -> Self;

    /// Render the name back to a filename string.
    fn formatted(&self) -> String;
}

/// Extensions always start with a `.`; an empty one is absent.
pub(crate) fn normalize_extension(ext: &str) -> Option<String> {
    if ext.is_empty() || ext == "." {
        None
    } else if ext.starts_with('.') {
        Some(ext.to_string())
    } else {
        Some(format!(".{ext}"))
    }
}

pub(crate) fn file_name_str(path: &Path) -> Result<&str, NameError> {
    path.file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| NameError::MissingFileName(path.to_path_buf()))
}
