use std::fmt;
use std::str::FromStr;

use super::error::NameError;

/// Start or end value of a name template
///
/// A template either carries a concrete frame number (`file.0042.exr`) or a
/// placeholder (`file.####.exr`) whose digit width is given by the padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frame {
    Number(i64),
    Placeholder,
}

impl Frame {
    pub const PLACEHOLDER_CHAR: char = '#';

    #[must_use]
    pub const fn number(self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(n),
            Self::Placeholder => None,
        }
    }

    #[must_use]
    pub const fn is_placeholder(self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

impl From<i64> for Frame {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl FromStr for Frame {
    type Err = NameError;

    /// Any run of `#` collapses to a single placeholder.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_empty() && s.chars().all(|c| c == Self::PLACEHOLDER_CHAR) {
            return Ok(Self::Placeholder);
        }
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            return s
                .parse::<i64>()
                .map(Self::Number)
                .map_err(|_| NameError::InvalidFrame(s.to_string()));
        }
        Err(NameError::InvalidFrame(s.to_string()))
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Placeholder => write!(f, "{}", Self::PLACEHOLDER_CHAR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frame_values() {
        assert_eq!("1".parse::<Frame>().unwrap(), Frame::Number(1));
        assert_eq!("342".parse::<Frame>().unwrap(), Frame::Number(342));
        assert_eq!("0010".parse::<Frame>().unwrap(), Frame::Number(10));
        assert_eq!("#".parse::<Frame>().unwrap(), Frame::Placeholder);
        assert_eq!("##".parse::<Frame>().unwrap(), Frame::Placeholder);
    }

    #[test]
    fn test_parse_frame_rejects() {
        for bad in ["", "#1", "abc", "1#", "-1"] {
            assert!(
                matches!(bad.parse::<Frame>(), Err(NameError::InvalidFrame(_))),
                "expected '{bad}' to be rejected"
            );
        }
    }

    #[test]
    fn test_number_accessor() {
        assert_eq!(Frame::Number(7).number(), Some(7));
        assert_eq!(Frame::Placeholder.number(), None);
        assert!(Frame::Placeholder.is_placeholder());
    }
}
