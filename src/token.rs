use std::fmt;

use crate::config::{
    DEFAULT_COMMENT, DEFAULT_SECTION_END, DEFAULT_SECTION_START, DEFAULT_SEPARATOR,
};

/// One classified unit of INI syntax.
///
/// The `Display` impl recreates the source text of the token using the
/// delimiters that were configured when it was produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Section(SectionToken),
    Setting(SettingToken),
    Comment(CommentToken),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Section(t) => t.fmt(f),
            Token::Setting(t) => t.fmt(f),
            Token::Comment(t) => t.fmt(f),
        }
    }
}

impl From<SectionToken> for Token {
    fn from(t: SectionToken) -> Self {
        Token::Section(t)
    }
}

impl From<SettingToken> for Token {
    fn from(t: SettingToken) -> Self {
        Token::Setting(t)
    }
}

impl From<CommentToken> for Token {
    fn from(t: CommentToken) -> Self {
        Token::Comment(t)
    }
}

/// A section header, e.g. `[Name]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionToken {
    pub name: String,
    start: char,
    end: char,
}

impl SectionToken {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_delimiters(name, DEFAULT_SECTION_START, DEFAULT_SECTION_END)
    }

    pub fn with_delimiters(name: impl Into<String>, start: char, end: char) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }

    pub fn delimiters(&self) -> (char, char) {
        (self.start, self.end)
    }
}

impl fmt::Display for SectionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.start, self.name, self.end)
    }
}

/// A setting, e.g. `left=right`.
///
/// Neither side is trimmed, so `key = value` has a left of `"key "`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingToken {
    pub left: String,
    pub right: String,
    separator: char,
}

impl SettingToken {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::with_separator(left, right, DEFAULT_SEPARATOR)
    }

    pub fn with_separator(
        left: impl Into<String>,
        right: impl Into<String>,
        separator: char,
    ) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            separator,
        }
    }

    pub fn separator(&self) -> char {
        self.separator
    }
}

impl fmt::Display for SettingToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.left, self.separator, self.right)
    }
}

/// A comment running from its marker to the end of the line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentToken {
    /// Everything after the marker, including leading whitespace.
    pub text: String,
    marker: char,
}

impl CommentToken {
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_marker(DEFAULT_COMMENT, text)
    }

    pub fn with_marker(marker: char, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marker,
        }
    }

    pub fn marker(&self) -> char {
        self.marker
    }
}

impl fmt::Display for CommentToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.marker, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod to_string {
        use super::*;

        #[test]
        fn test_section_uses_captured_delimiters() {
            assert_eq!(SectionToken::new("Section A").to_string(), "[Section A]");
            assert_eq!(
                SectionToken::with_delimiters("Section A", '<', '>').to_string(),
                "<Section A>"
            );
        }

        #[test]
        fn test_setting_keeps_whitespace() {
            assert_eq!(
                SettingToken::new("KeyOne ", " value 1").to_string(),
                "KeyOne = value 1"
            );
            assert_eq!(SettingToken::with_separator("a", "b", ':').to_string(), "a:b");
        }

        #[test]
        fn test_setting_with_empty_sides() {
            assert_eq!(SettingToken::new("", "").to_string(), "=");
        }

        #[test]
        fn test_comment_uses_marker() {
            assert_eq!(CommentToken::new(" foo").to_string(), "# foo");
            assert_eq!(CommentToken::with_marker(';', " bar").to_string(), "; bar");
        }

        #[test]
        fn test_token_delegates() {
            let token: Token = SettingToken::new("a", "test.").into();
            assert_eq!(token.to_string(), "a=test.");
        }
    }

    mod eq {
        use super::*;

        #[test]
        fn test_delimiters_take_part_in_equality() {
            assert_ne!(
                SectionToken::new("x"),
                SectionToken::with_delimiters("x", '(', ')')
            );
            assert_ne!(CommentToken::new("x"), CommentToken::with_marker(';', "x"));
        }
    }
}
