//! Lazy bulk-operation iterators
//!
//! Each call to `next()` performs at most one filesystem mutation. The first
//! failure is yielded once and the iterator then fuses; members handled before
//! the failure stay mutated.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use super::Progress;
use super::primitives;
use crate::FrameseqError;

type Result<T> = std::result::Result<T, FrameseqError>;

/// Mutation applied to each `(source, destination)` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairAction {
    Move,
    Copy,
    Rename,
}

impl PairAction {
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Move => "moved",
            Self::Copy => "copied",
            Self::Rename => "renamed",
        }
    }

    fn apply(self, src: &Path, dst: &Path) -> std::io::Result<()> {
        match self {
            Self::Move | Self::Rename => primitives::relocate(src, dst),
            Self::Copy => primitives::duplicate(src, dst),
        }
    }
}

/// Mutation applied to each member path in place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberAction {
    Delete,
    Chmod(u32),
}

impl MemberAction {
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Delete => "deleted",
            Self::Chmod(_) => "chmodded",
        }
    }

    fn apply(self, path: &Path) -> std::io::Result<()> {
        match self {
            Self::Delete => primitives::unlink(path),
            Self::Chmod(mode) => primitives::set_mode(path, mode),
        }
    }
}

/// Per-member item built from a completed `(source, destination)` pair
pub trait FromPair {
    fn from_pair(src: PathBuf, dst: PathBuf) -> Self;
}

/// Move and copy report the destination only.
impl FromPair for PathBuf {
    fn from_pair(_src: PathBuf, dst: PathBuf) -> Self {
        dst
    }
}

/// Rename reports both sides.
impl FromPair for (PathBuf, PathBuf) {
    fn from_pair(src: PathBuf, dst: PathBuf) -> Self {
        (src, dst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Running,
    Finished,
    Halted,
}

/// Iterator over a move, copy or rename
///
/// Yields one [`Progress::Step`] per member followed by exactly one
/// [`Progress::Done`] carrying the handle bound to the new location.
#[derive(Debug)]
pub struct PairwiseIter<H, T = PathBuf> {
    action: PairAction,
    pairs: std::vec::IntoIter<(PathBuf, PathBuf)>,
    result: H,
    state: State,
    completed: usize,
    _item: PhantomData<fn() -> T>,
}

/// Move/copy iterator: steps are destination paths.
pub type TransferIter<H> = PairwiseIter<H, PathBuf>;

/// Rename iterator: steps are `(old, new)` path pairs.
pub type RenameIter<H> = PairwiseIter<H, (PathBuf, PathBuf)>;

impl<H: Clone, T: FromPair> PairwiseIter<H, T> {
    /// `pairs` are processed in the given order; `result` is yielded last.
    #[must_use]
    pub fn new(action: PairAction, pairs: Vec<(PathBuf, PathBuf)>, result: H) -> Self {
        tracing::info!(action = action.verb(), members = pairs.len(), "starting bulk operation");
        Self {
            action,
            pairs: pairs.into_iter(),
            result,
            state: State::Running,
            completed: 0,
            _item: PhantomData,
        }
    }

    /// Members mutated so far
    #[must_use]
    pub const fn completed(&self) -> usize {
        self.completed
    }

    #[must_use]
    pub const fn action(&self) -> PairAction {
        self.action
    }

    /// Drive the remaining steps and return the resulting handle.
    ///
    /// # Errors
    /// Returns the first filesystem error, or `OperationHalted` if the iterator
    /// already stopped on an error before this call.
    pub fn finish(mut self) -> Result<H> {
        if self.state == State::Halted {
            return Err(FrameseqError::OperationHalted { completed: self.completed });
        }
        for step in self.by_ref() {
            step?;
        }
        Ok(self.result)
    }
}

impl<H: Clone, T: FromPair> Iterator for PairwiseIter<H, T> {
    type Item = Result<Progress<T, H>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state != State::Running {
            return None;
        }
        let Some((src, dst)) = self.pairs.next() else {
            self.state = State::Finished;
            tracing::info!(
                action = self.action.verb(),
                members = self.completed,
                "bulk operation finished"
            );
            return Some(Ok(Progress::Done(self.result.clone())));
        };
        match self.action.apply(&src, &dst) {
            Ok(()) => {
                self.completed += 1;
                tracing::debug!(
                    action = self.action.verb(),
                    src = %src.display(),
                    dst = %dst.display(),
                    "member done"
                );
                Some(Ok(Progress::Step(T::from_pair(src, dst))))
            }
            Err(e) => {
                self.state = State::Halted;
                tracing::warn!(
                    action = self.action.verb(),
                    src = %src.display(),
                    completed = self.completed,
                    error = %e,
                    "bulk operation halted"
                );
                Some(Err(e.into()))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            State::Running => {
                let remaining = self.pairs.len() + 1;
                (0, Some(remaining))
            }
            State::Finished | State::Halted => (0, Some(0)),
        }
    }
}

/// Iterator over a delete or chmod; yields each member path once it is done
#[derive(Debug)]
pub struct MemberIter {
    action: MemberAction,
    members: std::vec::IntoIter<PathBuf>,
    halted: bool,
    completed: usize,
}

impl MemberIter {
    #[must_use]
    pub fn new(action: MemberAction, members: Vec<PathBuf>) -> Self {
        tracing::info!(action = action.verb(), members = members.len(), "starting bulk operation");
        Self {
            action,
            members: members.into_iter(),
            halted: false,
            completed: 0,
        }
    }

    #[must_use]
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Drive the remaining steps and return how many members were handled.
    ///
    /// # Errors
    /// Returns the first filesystem error, or `OperationHalted` if the iterator
    /// already stopped on an error before this call.
    pub fn drain(mut self) -> Result<usize> {
        if self.halted {
            return Err(FrameseqError::OperationHalted { completed: self.completed });
        }
        for step in self.by_ref() {
            step?;
        }
        Ok(self.completed)
    }
}

impl Iterator for MemberIter {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }
        let path = self.members.next()?;
        match self.action.apply(&path) {
            Ok(()) => {
                self.completed += 1;
                tracing::debug!(action = self.action.verb(), path = %path.display(), "member done");
                Some(Ok(path))
            }
            Err(e) => {
                self.halted = true;
                tracing::warn!(
                    action = self.action.verb(),
                    path = %path.display(),
                    completed = self.completed,
                    error = %e,
                    "bulk operation halted"
                );
                Some(Err(e.into()))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.halted {
            (0, Some(0))
        } else {
            (0, Some(self.members.len()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn make_files(dir: &Path, names: &[&str]) -> Vec<PathBuf> {
        names
            .iter()
            .map(|n| {
                let p = dir.join(n);
                fs::write(&p, n).unwrap();
                p
            })
            .collect()
    }

    #[test]
    fn test_pairwise_yields_steps_then_done() {
        let tmp = TempDir::new().unwrap();
        let srcs = make_files(tmp.path(), &["a", "b"]);
        let pairs = srcs
            .iter()
            .map(|s| (s.clone(), s.with_extension("copy")))
            .collect();

        let items: Vec<_> = TransferIter::new(PairAction::Copy, pairs, "handle")
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0], Progress::Step(tmp.path().join("a.copy")));
        assert_eq!(items[1], Progress::Step(tmp.path().join("b.copy")));
        assert_eq!(items[2], Progress::Done("handle"));
    }

    #[test]
    fn test_pairwise_halts_on_first_error() {
        let tmp = TempDir::new().unwrap();
        let mut srcs = make_files(tmp.path(), &["a", "c"]);
        srcs.insert(1, tmp.path().join("missing"));
        let pairs = srcs
            .iter()
            .map(|s| (s.clone(), s.with_extension("moved")))
            .collect();

        let mut iter = TransferIter::new(PairAction::Move, pairs, ());
        assert!(matches!(iter.next(), Some(Ok(Progress::Step(_)))));
        assert!(matches!(iter.next(), Some(Err(FrameseqError::IoError(_)))));
        assert!(iter.next().is_none());
        assert_eq!(iter.completed(), 1);

        // first member stays moved, the third one was never touched
        assert!(tmp.path().join("a.moved").exists());
        assert!(tmp.path().join("c").exists());
        assert!(matches!(iter.finish(), Err(FrameseqError::OperationHalted { completed: 1 })));
    }

    #[test]
    fn test_rename_iter_reports_both_paths() {
        let tmp = TempDir::new().unwrap();
        let srcs = make_files(tmp.path(), &["old"]);
        let new = tmp.path().join("new");
        let pairs = vec![(srcs[0].clone(), new.clone())];
        let mut iter = RenameIter::new(PairAction::Rename, pairs, 7_u8);

        match iter.next() {
            Some(Ok(Progress::Step((from, to)))) => {
                assert_eq!(from, srcs[0]);
                assert_eq!(to, new);
            }
            other => panic!("unexpected item: {other:?}"),
        }
        assert_eq!(iter.finish().unwrap(), 7);
    }

    #[test]
    fn test_finish_after_partial_iteration() {
        let tmp = TempDir::new().unwrap();
        let srcs = make_files(tmp.path(), &["a", "b", "c"]);
        let dst = tmp.path().join("dst");
        fs::create_dir(&dst).unwrap();
        let pairs = srcs.iter().map(|s| (s.clone(), dst.join(s.file_name().unwrap()))).collect();

        let mut iter = TransferIter::new(PairAction::Move, pairs, "done");
        iter.next().unwrap().unwrap();
        assert_eq!(iter.finish().unwrap(), "done");
        assert_eq!(fs::read_dir(&dst).unwrap().count(), 3);
    }

    #[test]
    fn test_member_iter_delete() {
        let tmp = TempDir::new().unwrap();
        let files = make_files(tmp.path(), &["a", "b"]);
        let yielded: Vec<_> = MemberIter::new(MemberAction::Delete, files.clone())
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(yielded, files);
        assert!(files.iter().all(|f| !f.exists()));
    }

    #[test]
    fn test_member_iter_drain_stops_on_error() {
        let tmp = TempDir::new().unwrap();
        let mut files = make_files(tmp.path(), &["a"]);
        files.push(tmp.path().join("missing"));
        let err = MemberIter::new(MemberAction::Delete, files).drain().unwrap_err();
        assert!(matches!(err, FrameseqError::IoError(_)));
    }
}
