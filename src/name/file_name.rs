use std::fmt;
use std::path::Path;

use super::error::NameError;
use super::traits::{Alter, NameTemplate, file_name_str, normalize_extension};

/// Plain filename split into base and extension
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileName {
    base: String,
    extension: Option<String>,
}

impl FileName {
    /// Create a filename; a non-empty extension gains a leading `.` if missing.
    #[must_use]
    pub fn new(base: impl Into<String>, extension: Option<&str>) -> Self {
        Self {
            base: base.into(),
            extension: extension.and_then(normalize_extension),
        }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Extension including its leading `.`
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }
}

/// Overrides for [`FileName::alter`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileNameChanges {
    pub base: Option<String>,
    pub extension: Alter<String>,
}

impl FileNameChanges {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    #[must_use]
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Alter::Set(extension.into());
        self
    }

    #[must_use]
    pub fn clear_extension(mut self) -> Self {
        self.extension = Alter::Clear;
        self
    }
}

impl NameTemplate for FileName {
    type Changes = FileNameChanges;

    /// Splits at the last `.` of the final path component (`archive.tar.gz` ->
    /// `archive.tar` + `.gz`).
    fn from_path(path: impl AsRef<Path>) -> Result<Self, NameError> {
        let path = path.as_ref();
        let name = file_name_str(path)?;
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or(name);
        let extension = path.extension().and_then(|e| e.to_str());
        Ok(Self::new(stem, extension))
    }

    fn alter(&self, changes: FileNameChanges) -> Self {
        let extension = changes
            .extension
            .apply(self.extension.clone())
            .and_then(|e| normalize_extension(&e));
        Self {
            base: changes.base.unwrap_or_else(|| self.base.clone()),
            extension,
        }
    }

    fn formatted(&self) -> String {
        format!("{}{}", self.base, self.extension.as_deref().unwrap_or_default())
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}
