//! Bulk operation engine shared by single files and sequences.
//!
//! [`FileHandle`] is the base every handle implements: its member paths and a
//! factory that builds a fresh handle for a resolved path. [`FileOps`] is the
//! operation contract built on top of it. Every operation comes in two forms:
//!
//! - a lazy `*_iter` form performing one filesystem mutation per step, and
//! - an eager form that simply drains the lazy one.
//!
//! The lazy form is the single source of truth for behavior.

pub mod iter;
pub mod primitives;

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::FrameseqError;
use crate::name::{FileName, NameError, SeqName};

pub use iter::{MemberAction, MemberIter, PairAction, PairwiseIter, RenameIter, TransferIter};

type Result<T> = std::result::Result<T, FrameseqError>;

/// Item yielded by move, copy and rename iterators
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress<T, H> {
    /// One member finished
    Step(T),
    /// All members finished; carries the handle bound to the new location
    Done(H),
}

impl<T, H> Progress<T, H> {
    #[must_use]
    pub fn step(self) -> Option<T> {
        match self {
            Self::Step(t) => Some(t),
            Self::Done(_) => None,
        }
    }

    #[must_use]
    pub fn done(self) -> Option<H> {
        match self {
            Self::Step(_) => None,
            Self::Done(h) => Some(h),
        }
    }

    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }
}

/// Target name accepted by `rename`
///
/// A string may be a literal filename (`new.0100.dpx`, `new.txt`) or a
/// placeholder template (`new.####.dpx`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewName {
    Literal(String),
    File(FileName),
    Seq(SeqName),
}

impl From<&str> for NewName {
    fn from(s: &str) -> Self {
        Self::Literal(s.to_string())
    }
}

impl From<String> for NewName {
    fn from(s: String) -> Self {
        Self::Literal(s)
    }
}

impl From<FileName> for NewName {
    fn from(n: FileName) -> Self {
        Self::File(n)
    }
}

impl From<SeqName> for NewName {
    fn from(n: SeqName) -> Self {
        Self::Seq(n)
    }
}

impl fmt::Display for NewName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => f.write_str(s),
            Self::File(n) => fmt::Display::fmt(n, f),
            Self::Seq(n) => fmt::Display::fmt(n, f),
        }
    }
}

/// Base capabilities of a file handle
pub trait FileHandle: Sized + Clone + fmt::Display {
    /// Path of the handle itself (the template path for a sequence)
    fn path(&self) -> &Path;

    /// Every member path, in ascending member order
    fn members(&self) -> Vec<PathBuf>;

    /// Number of members
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build a handle of the same kind and range bound to `path`.
    ///
    /// # Errors
    /// Returns an error if `path` cannot back a handle of this kind.
    fn init_new(&self, path: PathBuf) -> Result<Self>;

    /// Lazily rename every member in place.
    ///
    /// # Errors
    /// Returns an error if `new_name` is not a valid filename for this handle.
    /// Filesystem errors surface from the iterator.
    fn rename_iter(&self, new_name: impl Into<NewName>) -> Result<RenameIter<Self>>;
}

/// Bulk operations over every member of a handle
pub trait FileOps: FileHandle {
    /// Lazily move every member into `dest_dir`, keeping filenames.
    ///
    /// `dest_dir` must already exist.
    ///
    /// # Errors
    /// Returns `InvalidInput` if `dest_dir` is the members' own directory, or
    /// an error if the resulting handle cannot be built.
    fn move_iter(&self, dest_dir: impl AsRef<Path>) -> Result<TransferIter<Self>> {
        let (pairs, handle) = transfer_plan(self, dest_dir.as_ref())?;
        Ok(TransferIter::new(PairAction::Move, pairs, handle))
    }

    /// Move every member into `dest_dir` and return the moved handle.
    ///
    /// # Errors
    /// Returns the first filesystem error; earlier members stay moved.
    fn move_to(&self, dest_dir: impl AsRef<Path>) -> Result<Self> {
        self.move_iter(dest_dir)?.finish()
    }

    /// Lazily copy every member into `dest_dir`, keeping filenames.
    ///
    /// # Errors
    /// Returns `InvalidInput` if `dest_dir` is the members' own directory, or
    /// an error if the resulting handle cannot be built.
    fn copy_iter(&self, dest_dir: impl AsRef<Path>) -> Result<TransferIter<Self>> {
        let (pairs, handle) = transfer_plan(self, dest_dir.as_ref())?;
        Ok(TransferIter::new(PairAction::Copy, pairs, handle))
    }

    /// Copy every member into `dest_dir` and return the copied handle.
    ///
    /// # Errors
    /// Returns the first filesystem error; earlier copies are kept.
    fn copy_to(&self, dest_dir: impl AsRef<Path>) -> Result<Self> {
        self.copy_iter(dest_dir)?.finish()
    }

    /// Rename every member and return the renamed handle.
    ///
    /// # Errors
    /// Returns an error for an invalid name or the first filesystem error.
    fn rename(&self, new_name: impl Into<NewName>) -> Result<Self> {
        self.rename_iter(new_name)?.finish()
    }

    /// Lazily delete every member. The handle must not be reused afterwards.
    fn delete_iter(&self) -> MemberIter {
        MemberIter::new(MemberAction::Delete, self.members())
    }

    /// Delete every member and return how many were removed.
    ///
    /// # Errors
    /// Returns the first filesystem error; earlier members stay deleted.
    fn delete(&self) -> Result<usize> {
        self.delete_iter().drain()
    }

    /// Lazily apply permission `mode` to every member.
    fn chmod_iter(&self, mode: u32) -> MemberIter {
        MemberIter::new(MemberAction::Chmod(mode), self.members())
    }

    /// Apply permission `mode` to every member and return how many changed.
    ///
    /// # Errors
    /// Returns the first filesystem error.
    fn chmod(&self, mode: u32) -> Result<usize> {
        self.chmod_iter(mode).drain()
    }
}

/// Source/destination pairs for a move or copy plus the handle they produce.
///
/// Refuses a `dest_dir` that already holds the members: every pair would
/// point at itself.
fn transfer_plan<H: FileHandle>(
    handle: &H,
    dest_dir: &Path,
) -> Result<(Vec<(PathBuf, PathBuf)>, H)> {
    let src_dir = parent_dir(handle.path());
    if primitives::same_dir(src_dir, dest_dir) {
        return Err(FrameseqError::InvalidInput(format!(
            "'{}' is already in '{}'",
            member_file_name(handle.path())?.to_string_lossy(),
            dest_dir.display()
        )));
    }
    let moved = handle.init_new(dest_dir.join(member_file_name(handle.path())?))?;
    let pairs = handle
        .members()
        .into_iter()
        .map(|src| {
            let dst = dest_dir.join(member_file_name(&src)?);
            Ok((src, dst))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok((pairs, moved))
}

/// Parent directory of `path`; empty for a bare filename.
#[must_use]
pub fn parent_dir(path: &Path) -> &Path {
    path.parent().unwrap_or_else(|| Path::new(""))
}

pub(crate) fn member_file_name(path: &Path) -> Result<&OsStr> {
    path.file_name()
        .ok_or_else(|| NameError::MissingFileName(path.to_path_buf()).into())
}

/// Reject rename targets that would leave the parent directory.
///
/// # Errors
/// Returns `InvalidInput` for empty names, `.`/`..` or names containing a path separator.
pub fn validate_new_name(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(std::path::Component::Normal(c)), None) if c == OsStr::new(name) => Ok(()),
        _ => Err(FrameseqError::InvalidInput(format!(
            "'{name}' is not a plain filename; rename works within the current directory"
        ))),
    }
}
