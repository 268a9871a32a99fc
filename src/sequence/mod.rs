//! Numbered file sequences
//!
//! A [`FileSequence`] pairs a template path (`/shots/file.###.txt`) with an
//! explicit closed frame range. The range always wins over numbers embedded in
//! the template, so a placeholder template can address any range.

pub mod index;

use std::fmt;
use std::ops::{RangeBounds, RangeInclusive};
use std::path::{Path, PathBuf};

use crate::FrameseqError;
use crate::name::{Bracket, FileName, Frame, NameError, NameTemplate, SeqChanges, SeqName};
use crate::ops::{
    FileHandle, FileOps, NewName, PairAction, RenameIter, parent_dir, validate_new_name,
};

type Result<T> = std::result::Result<T, FrameseqError>;

/// Handle to the members `start..=end` of a numbered sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSequence {
    path: PathBuf,
    name: SeqName,
    start: i64,
    end: i64,
}

impl FileSequence {
    /// Bind `path` to the frames `start..=end`.
    ///
    /// # Errors
    /// Returns `InvalidRange` if `end < start` or the range holds more frames
    /// than an `i64` can count, or a name error if the final component of
    /// `path` is not sequence-shaped.
    pub fn new(path: impl Into<PathBuf>, start: i64, end: i64) -> Result<Self> {
        // `end + 1 - start` must fit in an i64
        let countable = end.checked_add(1).and_then(|e| e.checked_sub(start)).is_some();
        if end < start || !countable {
            return Err(FrameseqError::InvalidRange { start, end });
        }
        let path = path.into();
        let name = SeqName::from_path(&path)?;
        Ok(Self { path, name, start, end })
    }

    /// Take the range from the numbers embedded in the filename
    /// (`file.[100-200].txt`, or `file.100.txt` for a single frame).
    ///
    /// # Errors
    /// Returns `UnresolvedRange` for placeholder templates.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let name = SeqName::from_path(&path)?;
        let unresolved = || FrameseqError::UnresolvedRange(path.display().to_string());

        let start = name.start().number().ok_or_else(unresolved)?;
        let end = match name.end() {
            Some(end) => end.number().ok_or_else(unresolved)?,
            None => start,
        };
        Self::new(path, start, end)
    }

    /// Template path the sequence was created from
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn name(&self) -> &SeqName {
        &self.name
    }

    #[must_use]
    pub const fn start(&self) -> i64 {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> i64 {
        self.end
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.abs_diff(self.start) as usize + 1
    }

    /// Always false: a sequence holds at least one frame.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub const fn frames(&self) -> RangeInclusive<i64> {
        self.start..=self.end
    }

    /// Path of `frame` rendered through the template, whether or not it lies
    /// inside the range.
    #[must_use]
    pub fn frame_path(&self, frame: i64) -> PathBuf {
        parent_dir(&self.path).join(self.name.member_name(frame))
    }

    /// Member paths in ascending frame order
    #[must_use]
    pub fn iter(&self) -> Members<'_> {
        Members {
            seq: self,
            frames: self.frames(),
        }
    }

    /// Member at zero-based position `index`; negative values count from the end.
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` outside `-len..len`.
    pub fn at(&self, index: i64) -> Result<PathBuf> {
        let offset = index::position(index, self.span())?;
        Ok(self.frame_path(self.start + offset))
    }

    /// Sub-sequence over a range of positions (`seq.slice(50..76)`).
    ///
    /// # Errors
    /// Returns `EmptyRange` if the range selects nothing.
    pub fn slice(&self, range: impl RangeBounds<i64>) -> Result<Self> {
        let (lo, hi) = index::position_slice(&range, self.span())?;
        Ok(self.with_range(self.start + lo, self.start + hi - 1))
    }

    /// Member with frame number `frame`.
    ///
    /// A non-negative value is an absolute frame number; a negative value is a
    /// position from the end, so `at_frame(-1)` is the last frame.
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` if the frame is outside `start..=end`.
    pub fn at_frame(&self, frame: i64) -> Result<PathBuf> {
        let frame = index::frame(frame, self.start, self.end)?;
        Ok(self.frame_path(frame))
    }

    /// Sub-sequence over a range of frame numbers (`seq.slice_frames(150..176)`).
    ///
    /// Bounds follow [`at_frame`](Self::at_frame); the upper bound of `a..b` is
    /// exclusive.
    ///
    /// # Errors
    /// Returns `EmptyRange` if the range selects nothing.
    pub fn slice_frames(&self, range: impl RangeBounds<i64>) -> Result<Self> {
        let (first, last) = index::frame_slice(&range, self.start, self.end)?;
        Ok(self.with_range(first, last))
    }

    fn with_range(&self, start: i64, end: i64) -> Self {
        Self {
            path: self.path.clone(),
            name: self.name.clone(),
            start,
            end,
        }
    }

    const fn span(&self) -> i64 {
        self.end - self.start + 1
    }

    /// Filename with the active range, e.g. `file.[100-200].txt`.
    fn range_name(&self) -> String {
        if self.start == self.end {
            return self.name.member_name(self.start);
        }
        let changes = SeqChanges::new()
            .start(Frame::Number(self.start))
            .end(Frame::Number(self.end))
            .brackets(self.name.brackets().unwrap_or(Bracket::Bracket));
        self.name.alter(changes).formatted()
    }

    /// Template the members are renamed through.
    fn rename_template(&self, new_name: NewName) -> Result<SeqName> {
        let file_name = match new_name {
            NewName::Seq(name) => return Ok(name),
            NewName::File(name) => name,
            NewName::Literal(s) => {
                validate_new_name(&s)?;
                match SeqName::from_path(&s) {
                    Ok(name) => return Ok(name),
                    Err(NameError::MalformedName { .. }) => FileName::from_path(&s)?,
                    Err(e) => return Err(e.into()),
                }
            }
        };

        let extension = file_name.extension().map(str::to_string).into();
        let changes = SeqChanges {
            base: Some(file_name.base().to_string()),
            extension,
            ..SeqChanges::new()
        };
        Ok(self.name.alter(changes.start(Frame::Placeholder)))
    }
}

impl fmt::Display for FileSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = parent_dir(&self.path).join(self.range_name());
        write!(f, "<FileSequence: '{}'>", shown.display())
    }
}

/// Iterator over the member paths of a [`FileSequence`]
#[derive(Debug, Clone)]
pub struct Members<'a> {
    seq: &'a FileSequence,
    frames: RangeInclusive<i64>,
}

impl Iterator for Members<'_> {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        self.frames.next().map(|f| self.seq.frame_path(f))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.frames.size_hint()
    }
}

impl DoubleEndedIterator for Members<'_> {
    fn next_back(&mut self) -> Option<PathBuf> {
        self.frames.next_back().map(|f| self.seq.frame_path(f))
    }
}

impl<'a> IntoIterator for &'a FileSequence {
    type Item = PathBuf;
    type IntoIter = Members<'a>;

    fn into_iter(self) -> Members<'a> {
        self.iter()
    }
}

impl FileHandle for FileSequence {
    fn path(&self) -> &Path {
        &self.path
    }

    fn members(&self) -> Vec<PathBuf> {
        self.iter().collect()
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn init_new(&self, path: PathBuf) -> Result<Self> {
        Self::new(path, self.start, self.end)
    }

    /// Frames keep their offsets from the start. A numbered `new_name` moves
    /// the start to its number, a placeholder or plain filename keeps it.
    ///
    /// A new start that would push the last frame past `i64::MAX` is an
    /// `InvalidRange`.
    fn rename_iter(&self, new_name: impl Into<NewName>) -> Result<RenameIter<Self>> {
        let template = self.rename_template(new_name.into())?;
        let new_start = template.start().number().unwrap_or(self.start);
        let last_offset = self.end - self.start;
        let new_end = new_start.checked_add(last_offset).ok_or(FrameseqError::InvalidRange {
            start: new_start,
            end: new_start.saturating_add(last_offset),
        })?;

        let parent = parent_dir(&self.path);
        let first_name = template.member_name(new_start);
        validate_new_name(&first_name)?;
        let renamed = Self::new(parent.join(first_name), new_start, new_end)?;

        let mut pairs: Vec<_> = self
            .frames()
            .zip(renamed.frames())
            .map(|(old, new)| (self.frame_path(old), parent.join(template.member_name(new))))
            .collect();
        // shifting up, so walk down to never land on a member not yet moved
        if new_start > self.start {
            pairs.reverse();
        }

        Ok(RenameIter::new(PairAction::Rename, pairs, renamed))
    }
}

impl FileOps for FileSequence {}
