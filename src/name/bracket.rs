//! Enclosing pairs allowed around a frame range (`file.[001-010].exr`)

use std::fmt;

/// One of the four recognised bracket pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bracket {
    /// `<` … `>`
    Arrow,
    /// `(` … `)`
    Paren,
    /// `[` … `]`
    Bracket,
    /// `{` … `}`
    Curly,
}

impl Bracket {
    pub const ALL: [Self; 4] = [Self::Arrow, Self::Paren, Self::Bracket, Self::Curly];

    #[must_use]
    pub const fn open(self) -> char {
        match self {
            Self::Arrow => '<',
            Self::Paren => '(',
            Self::Bracket => '[',
            Self::Curly => '{',
        }
    }

    #[must_use]
    pub const fn close(self) -> char {
        match self {
            Self::Arrow => '>',
            Self::Paren => ')',
            Self::Bracket => ']',
            Self::Curly => '}',
        }
    }

    /// Wrap `text` in this pair.
    #[must_use]
    pub fn enclose(self, text: &str) -> String {
        format!("{}{text}{}", self.open(), self.close())
    }

    /// Look up the variant for a matched open/close pair.
    ///
    /// Returns `None` for mismatched pairs (`(` with `]`) and unknown characters.
    #[must_use]
    pub fn from_pair(open: char, close: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|b| b.open() == open && b.close() == close)
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.open(), self.close())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close_enclose() {
        let cases = [
            (Bracket::Arrow, '<', '>', "<text>"),
            (Bracket::Paren, '(', ')', "(text)"),
            (Bracket::Bracket, '[', ']', "[text]"),
            (Bracket::Curly, '{', '}', "{text}"),
        ];
        for (bracket, open, close, enclosed) in cases {
            assert_eq!(bracket.open(), open);
            assert_eq!(bracket.close(), close);
            assert_eq!(bracket.enclose("text"), enclosed);
        }
    }

    #[test]
    fn test_from_pair_matches() {
        assert_eq!(Bracket::from_pair('[', ']'), Some(Bracket::Bracket));
        assert_eq!(Bracket::from_pair('{', '}'), Some(Bracket::Curly));
        assert_eq!(Bracket::from_pair('<', '>'), Some(Bracket::Arrow));
        assert_eq!(Bracket::from_pair('(', ')'), Some(Bracket::Paren));
    }

    #[test]
    fn test_from_pair_rejects() {
        assert_eq!(Bracket::from_pair('#', '#'), None);
        assert_eq!(Bracket::from_pair('(', ']'), None);
        assert_eq!(Bracket::from_pair(']', '['), None);
    }
}
