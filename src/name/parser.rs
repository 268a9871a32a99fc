//! Filename grammar for sequence members and templates
//!
//! A sequence-shaped filename is
//!
//! ```text
//! <name><sep>[<open>]<start>[-<end>][<close>][.<ext>]
//! ```
//!
//! where `<sep>` is `.` or `_`, `<start>`/`<end>` are both digits or both runs
//! of `#`, and the optional bracket pair is one of `<>`, `()`, `[]`, `{}`.
//! The *last* numeric group wins, so earlier groups stay part of `<name>`:
//! `file_[100-110].dpx.[001-010].exr` has the name `file_[100-110].dpx`.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::bracket::Bracket;
use super::error::NameError;
use super::frame::Frame;

static SEQUENCE_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<name>.+)",
        r"(?P<sep>[._])",
        r"(?P<open>[\[(\{<])?",
        r"(?:(?P<start>\d+)(?:-(?P<end>\d+))?|(?P<pstart>#+)(?:-(?P<pend>#+))?)",
        r"(?P<close>[\])\}>])?",
        r"(?P<ext>\.[^.]+)?$",
    ))
    .expect("Invalid sequence name regex")
});

/// Semantic pieces of a sequence-shaped filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pieces {
    pub name: String,
    pub sep: String,
    pub start: Frame,
    pub end: Option<Frame>,
    /// Width of the start group as written
    pub pad: usize,
    pub brackets: Option<Bracket>,
    /// Includes the leading `.`
    pub extension: Option<String>,
}

/// Split `filename` into its sequence pieces.
///
/// # Errors
/// Returns `NameError::MalformedName` when no separator-prefixed numeric group
/// is found, the group mixes digits and placeholders, trailing text follows the
/// group, or the bracket pair is unmatched.
pub fn parse(filename: &str) -> Result<Pieces, NameError> {
    let caps = SEQUENCE_NAME_REGEX.captures(filename).ok_or_else(|| {
        NameError::malformed(filename, "no separator-prefixed frame group found")
    })?;

    let (start_str, end_str) = match (caps.name("start"), caps.name("pstart")) {
        (Some(start), _) => (start.as_str(), caps.name("end").map(|m| m.as_str())),
        (None, Some(start)) => (start.as_str(), caps.name("pend").map(|m| m.as_str())),
        (None, None) => return Err(NameError::malformed(filename, "missing frame group")),
    };

    let frame = |s: &str| {
        s.parse::<Frame>()
            .map_err(|_| NameError::malformed(filename, "frame number does not fit in 64 bits"))
    };
    let start = frame(start_str)?;
    let end = end_str.map(frame).transpose()?;
    let brackets = brackets_from_captures(filename, &caps)?;

    Ok(Pieces {
        name: caps["name"].to_string(),
        sep: caps["sep"].to_string(),
        start,
        end,
        pad: start_str.chars().count(),
        brackets,
        extension: caps.name("ext").map(|m| m.as_str().to_string()),
    })
}

/// Returns `true` if `filename` has the shape of a sequence member or template.
#[must_use]
pub fn is_sequence_name(filename: &str) -> bool {
    parse(filename).is_ok()
}

fn brackets_from_captures(
    filename: &str,
    caps: &Captures<'_>,
) -> Result<Option<Bracket>, NameError> {
    let open = caps.name("open").and_then(|m| m.as_str().chars().next());
    let close = caps.name("close").and_then(|m| m.as_str().chars().next());
    brackets_from_pair(open, close)
        .map_err(|reason| NameError::malformed(filename, &reason))
}

fn brackets_from_pair(open: Option<char>, close: Option<char>) -> Result<Option<Bracket>, String> {
    match (open, close) {
        (None, None) => Ok(None),
        (Some(o), Some(c)) => Bracket::from_pair(o, c)
            .map(Some)
            .ok_or_else(|| format!("mismatched bracket pair '{o}' '{c}'")),
        (Some(o), None) => Err(format!("opening bracket '{o}' is never closed")),
        (None, Some(c)) => Err(format!("closing bracket '{c}' has no opening bracket")),
    }
}
