//! Rendering helpers for the numeric part of a sequence name

use super::bracket::Bracket;
use super::frame::Frame;

pub const RANGE_SEPARATOR: &str = "-";

/// Opening bracket, closing bracket and range separator for a name.
///
/// A name without an end frame never shows a range marker or brackets.
#[must_use]
pub fn format_range_pieces(
    brackets: Option<Bracket>,
    end: Option<Frame>,
) -> (String, String, &'static str) {
    if end.is_none() {
        return (String::new(), String::new(), "");
    }
    match brackets {
        Some(b) => (b.open().to_string(), b.close().to_string(), RANGE_SEPARATOR),
        None => (String::new(), String::new(), RANGE_SEPARATOR),
    }
}

/// Start and end strings, zero padded to at least `pad` digits.
#[must_use]
pub fn format_file_nums(start: Frame, end: Option<Frame>, pad: usize) -> (String, String) {
    let start_str = format_frame(start, pad);
    let end_str = end.map(|e| format_frame(e, pad)).unwrap_or_default();
    (start_str, end_str)
}

/// `pad` is a minimum width; wider numbers are never truncated.
#[must_use]
pub fn format_frame(frame: Frame, pad: usize) -> String {
    match frame {
        Frame::Number(n) => format!("{n:0pad$}"),
        Frame::Placeholder => Frame::PLACEHOLDER_CHAR.to_string().repeat(pad.max(1)),
    }
}
