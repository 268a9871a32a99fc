//! Single-file handle, the one-member counterpart of a sequence

use std::fmt;
use std::path::{Path, PathBuf};

use crate::FrameseqError;
use crate::name::{Frame, NameTemplate};
use crate::ops::{
    FileHandle, FileOps, NewName, PairAction, RenameIter, parent_dir, validate_new_name,
};

type Result<T> = std::result::Result<T, FrameseqError>;

/// Handle to one file on disk
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct File {
    path: PathBuf,
}

impl File {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Iterate the single member path.
    pub fn iter(&self) -> std::iter::Once<PathBuf> {
        std::iter::once(self.path.clone())
    }
}

impl<'a> IntoIterator for &'a File {
    type Item = PathBuf;
    type IntoIter = std::iter::Once<PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<File: '{}'>", self.path.display())
    }
}

impl FileHandle for File {
    fn path(&self) -> &Path {
        &self.path
    }

    fn members(&self) -> Vec<PathBuf> {
        vec![self.path.clone()]
    }

    fn len(&self) -> usize {
        1
    }

    fn init_new(&self, path: PathBuf) -> Result<Self> {
        Ok(Self::new(path))
    }

    /// Any [`NewName`] is rendered to a plain filename in the same directory.
    /// A string is taken literally; a [`SeqName`](crate::SeqName) must carry
    /// concrete frame numbers.
    fn rename_iter(&self, new_name: impl Into<NewName>) -> Result<RenameIter<Self>> {
        let file_name = match new_name.into() {
            NewName::Literal(s) => s,
            NewName::File(n) => n.formatted(),
            NewName::Seq(n) => {
                let placeholder = |f: Frame| f.number().is_none();
                if placeholder(n.start()) || n.end().is_some_and(placeholder) {
                    return Err(FrameseqError::InvalidInput(format!(
                        "'{n}' has no frame number to give a single file"
                    )));
                }
                n.formatted()
            }
        };
        validate_new_name(&file_name)?;
        let new_path = parent_dir(&self.path).join(file_name);
        let renamed = self.init_new(new_path.clone())?;
        Ok(RenameIter::new(
            PairAction::Rename,
            vec![(self.path.clone(), new_path)],
            renamed,
        ))
    }
}

impl FileOps for File {}
