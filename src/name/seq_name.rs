use std::fmt;
use std::path::Path;

use super::bracket::Bracket;
use super::error::NameError;
use super::format::{format_file_nums, format_range_pieces};
use super::frame::Frame;
use super::parser::{Pieces, parse};
use super::traits::{Alter, NameTemplate, file_name_str, normalize_extension};

pub const DEFAULT_DELIM: &str = ".";

/// Name template shared by every member of a sequence
///
/// Immutable: every change goes through [`NameTemplate::alter`] or the
/// `with_*` builders, which return a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeqName {
    base: String,
    extension: Option<String>,
    delim: String,
    start: Frame,
    end: Option<Frame>,
    pad: usize,
    brackets: Option<Bracket>,
}

impl SeqName {
    /// New template with a placeholder start, no end, `.` delimiter and no padding.
    #[must_use]
    pub fn new(base: impl Into<String>, extension: Option<&str>) -> Self {
        Self {
            base: base.into(),
            extension: extension.and_then(normalize_extension),
            delim: DEFAULT_DELIM.to_string(),
            start: Frame::Placeholder,
            end: None,
            pad: 0,
            brackets: None,
        }
    }

    #[must_use]
    pub fn with_delim(mut self, delim: impl Into<String>) -> Self {
        self.delim = delim.into();
        self
    }

    #[must_use]
    pub const fn with_start(mut self, start: Frame) -> Self {
        self.start = start;
        self
    }

    #[must_use]
    pub const fn with_end(mut self, end: Frame) -> Self {
        self.end = Some(end);
        self
    }

    #[must_use]
    pub const fn with_pad(mut self, pad: usize) -> Self {
        self.pad = pad;
        self
    }

    #[must_use]
    pub const fn with_brackets(mut self, brackets: Bracket) -> Self {
        self.brackets = Some(brackets);
        self
    }

    /// Parse the final component of `path`, optionally overriding the padding
    /// read from the start group.
    ///
    /// # Errors
    /// Returns `NameError` if the path has no file name or it is not
    /// sequence-shaped.
    pub fn from_path_with_pad(
        path: impl AsRef<Path>,
        pad: Option<usize>,
    ) -> Result<Self, NameError> {
        let name = file_name_str(path.as_ref())?;
        let mut seq_name = Self::from(parse(name)?);
        if let Some(pad) = pad {
            seq_name.pad = pad;
        }
        Ok(seq_name)
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    #[must_use]
    pub fn delim(&self) -> &str {
        &self.delim
    }

    #[must_use]
    pub const fn start(&self) -> Frame {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> Option<Frame> {
        self.end
    }

    #[must_use]
    pub const fn pad(&self) -> usize {
        self.pad
    }

    #[must_use]
    pub const fn brackets(&self) -> Option<Bracket> {
        self.brackets
    }

    /// Filename of a single member: `frame` rendered without any range marker.
    #[must_use]
    pub fn member_name(&self, frame: i64) -> String {
        self.alter(SeqChanges::new().start(Frame::Number(frame)).clear_end()).formatted()
    }
}

impl From<Pieces> for SeqName {
    fn from(pieces: Pieces) -> Self {
        Self {
            base: pieces.name,
            extension: pieces.extension.as_deref().and_then(normalize_extension),
            delim: pieces.sep,
            start: pieces.start,
            end: pieces.end,
            pad: pieces.pad,
            brackets: pieces.brackets,
        }
    }
}

/// Overrides for [`SeqName::alter`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeqChanges {
    pub base: Option<String>,
    pub extension: Alter<String>,
    pub delim: Option<String>,
    pub start: Option<Frame>,
    pub end: Alter<Frame>,
    pub pad: Option<usize>,
    pub brackets: Alter<Bracket>,
}

impl SeqChanges {
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

    #[must_use]
    pub fn delim(mut self, delim: impl Into<String>) -> Self {
        self.delim = Some(delim.into());
        self
    }

    #[must_use]
    pub const fn start(mut self, start: Frame) -> Self {
        self.start = Some(start);
        self
    }

    #[must_use]
    pub fn end(mut self, end: Frame) -> Self {
        self.end = Alter::Set(end);
        self
    }

    #[must_use]
    pub fn clear_end(mut self) -> Self {
        self.end = Alter::Clear;
        self
    }

    #[must_use]
    pub const fn pad(mut self, pad: usize) -> Self {
        self.pad = Some(pad);
        self
    }

    #[must_use]
    pub fn brackets(mut self, brackets: Bracket) -> Self {
        self.brackets = Alter::Set(brackets);
        self
    }

    #[must_use]
    pub fn clear_brackets(mut self) -> Self {
        self.brackets = Alter::Clear;
        self
    }
}

impl NameTemplate for SeqName {
    type Changes = SeqChanges;

    fn from_path(path: impl AsRef<Path>) -> Result<Self, NameError> {
        Self::from_path_with_pad(path, None)
    }

    fn alter(&self, changes: SeqChanges) -> Self {
        Self {
            base: changes.base.unwrap_or_else(|| self.base.clone()),
            extension: changes
                .extension
                .apply(self.extension.clone())
                .and_then(|e| normalize_extension(&e)),
            delim: changes.delim.unwrap_or_else(|| self.delim.clone()),
            start: changes.start.unwrap_or(self.start),
            end: changes.end.apply(self.end),
            pad: changes.pad.unwrap_or(self.pad),
            brackets: changes.brackets.apply(self.brackets),
        }
    }

    fn formatted(&self) -> String {
        let (open, close, range_sep) = format_range_pieces(self.brackets, self.end);
        let (start, end) = format_file_nums(self.start, self.end, self.pad);
        format!(
            "{base}{delim}{open}{start}{range_sep}{end}{close}{ext}",
            base = self.base,
            delim = self.delim,
            ext = self.extension.as_deref().unwrap_or_default(),
        )
    }
}

impl fmt::Display for SeqName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let name = SeqName::new("file_name", Some(".exr"));
        assert_eq!(name.base(), "file_name");
        assert_eq!(name.extension(), Some(".exr"));
        assert_eq!(name.delim(), ".");
        assert_eq!(name.start(), Frame::Placeholder);
        assert_eq!(name.end(), None);
        assert_eq!(name.pad(), 0);
        assert_eq!(name.brackets(), None);
    }

    #[test]
    fn test_extension_normalized() {
        assert_eq!(SeqName::new("file_name", Some("exr")).extension(), Some(".exr"));
        assert_eq!(SeqName::new("file_name", None).extension(), None);
    }

    #[test]
    fn test_from_path() {
        use Frame::{Number, Placeholder};
        let square = Some(Bracket::Bracket);
        let cases = [
            ("file_name.[01-20].exr", Number(1), Some(Number(20)), square),
            ("file_name.01.exr", Number(1), None, None),
            ("file_name.##.exr", Placeholder, None, None),
            ("/Volumes/drive/folder/file_name.[01-20].exr", Number(1), Some(Number(20)), square),
            ("/Volumes/drive/folder/file_name.[##-##].exr", Placeholder, Some(Placeholder), square),
        ];
        for (path, start, end, brackets) in cases {
            let name = SeqName::from_path(path).unwrap();
            assert_eq!(name.base(), "file_name", "{path}");
            assert_eq!(name.delim(), ".");
            assert_eq!(name.start(), start, "{path}");
            assert_eq!(name.end(), end, "{path}");
            assert_eq!(name.pad(), 2);
            assert_eq!(name.brackets(), brackets, "{path}");
            assert_eq!(name.extension(), Some(".exr"));
        }
    }

    #[test]
    fn test_from_path_override_padding() {
        let name = SeqName::from_path("file_name.1234567.exr").unwrap();
        assert_eq!(name.pad(), 7);

        let name = SeqName::from_path_with_pad("file_name.1234567.exr", Some(0)).unwrap();
        assert_eq!(name.pad(), 0);
        assert_eq!(name.formatted(), "file_name.1234567.exr");
    }

    #[test]
    fn test_from_path_rejects() {
        assert!(matches!(
            SeqName::from_path("/dir/file.mov"),
            Err(NameError::MalformedName { .. })
        ));
    }

    #[test]
    fn test_formatted() {
        let exr = || SeqName::new("file", Some(".exr"));
        let one = || exr().with_start(Frame::Number(1));
        let one_to_ten = || one().with_end(Frame::Number(10)).with_pad(3);
        let cases = [
            ("file.001.exr", one().with_pad(3)),
            ("file.###.exr", exr().with_pad(3)),
            ("file_001.exr", one().with_delim("_").with_pad(3)),
            ("file_0000001.exr", one().with_delim("_").with_pad(7)),
            ("file.1.exr", one()),
            ("file.001", SeqName::new("file", None).with_start(Frame::Number(1)).with_pad(3)),
            ("file.001-010.exr", one_to_ten()),
            ("file.###-###.exr", exr().with_end(Frame::Placeholder).with_pad(3)),
            ("file.[001-010].exr", one_to_ten().with_brackets(Bracket::Bracket)),
            ("file.<001-010>.exr", one_to_ten().with_brackets(Bracket::Arrow)),
        ];
        for (answer, name) in cases {
            assert_eq!(name.formatted(), answer);
            assert_eq!(name.to_string(), answer);
        }
    }

    #[test]
    fn test_round_trip() {
        for s in [
            "file.001.exr",
            "file.###.exr",
            "file_0000001.exr",
            "file.001-010.exr",
            "file.[###-###].exr",
            "file.{0100-0200}.dpx",
            "shot_[100-110].dpx.(001-010).exr",
            "plate.1001",
        ] {
            assert_eq!(SeqName::from_path(s).unwrap().formatted(), s);
        }
    }

    #[test]
    fn test_alter_fields() {
        let original = SeqName::new("file", Some("exr")).with_start(Frame::Number(100));

        let new = original.alter(SeqChanges::new().start(Frame::Number(200)));
        assert_eq!(new.start(), Frame::Number(200));
        assert_eq!(new.base(), "file");
        assert_eq!(new.end(), None);

        let changes = SeqChanges::new().start(Frame::Number(200)).end(Frame::Number(210));
        let new = original.alter(changes);
        assert_eq!(new.start(), Frame::Number(200));
        assert_eq!(new.end(), Some(Frame::Number(210)));

        let new = original.alter(SeqChanges::new().base("file2"));
        assert_eq!(new.base(), "file2");
        assert_eq!(new.extension(), Some(".exr"));

        let new = original.alter(SeqChanges::new().base("file2").clear_extension());
        assert_eq!(new.base(), "file2");
        assert_eq!(new.extension(), None);
        assert_eq!(new.start(), original.start());
        assert_eq!(new.pad(), original.pad());
        assert_eq!(new.delim(), original.delim());
    }

    #[test]
    fn test_alter_extension_adds_period() {
        let original = SeqName::new("file", Some("exr")).with_start(Frame::Number(100));
        assert_eq!(original.alter(SeqChanges::new().extension("dpx")).extension(), Some(".dpx"));
    }

    #[test]
    fn test_alter_leaves_original_untouched() {
        let original = SeqName::new("name", Some("exr"));
        let _ = original.alter(SeqChanges::new().base("file"));
        assert_eq!(original.base(), "name");
    }

    #[test]
    fn test_member_name() {
        let name = SeqName::from_path("file.[###-###].exr").unwrap();
        assert_eq!(name.member_name(7), "file.007.exr");
        assert_eq!(name.member_name(12345), "file.12345.exr");
    }
}
