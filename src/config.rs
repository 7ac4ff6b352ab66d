use std::collections::HashMap;

pub(crate) const DEFAULT_COMMENT: char = '#';
pub(crate) const DEFAULT_COMMENTS: &[char] = &['#', ';'];
pub(crate) const DEFAULT_SECTION_START: char = '[';
pub(crate) const DEFAULT_SECTION_END: char = ']';
pub(crate) const DEFAULT_SEPARATOR: char = '=';
pub(crate) const DEFAULT_ESCAPE_MARKER: char = '\\';

/// Characters the tokenizer treats as syntax.
///
/// The tokenizer looks these up on every transition, so changing them through
/// [`crate::Tokenizer::config_mut`] takes effect with the next character read.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Characters that start a comment.
    ///
    /// Default: `#` and `;`
    pub comments: Vec<char>,
    /// Default: `[`
    pub section_start: char,
    /// Default: `]`
    pub section_end: char,
    /// Separates the left-hand side of a setting from the right-hand side.
    ///
    /// Default: `=`
    pub separator: char,
    /// Escape handling inside section names and settings. Off by default,
    /// i.e. everything is taken literally.
    pub escapes: Option<Escapes>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            comments: DEFAULT_COMMENTS.to_vec(),
            section_start: DEFAULT_SECTION_START,
            section_end: DEFAULT_SECTION_END,
            separator: DEFAULT_SEPARATOR,
            escapes: None,
        }
    }
}

impl Config {
    pub(crate) fn is_comment(&self, c: char) -> bool {
        self.comments.contains(&c)
    }

    pub(crate) fn is_escape(&self, c: char) -> bool {
        self.escapes.as_ref().is_some_and(|e| e.marker == c)
    }
}

/// Escape sequences of the form `<marker><char>`.
#[derive(Clone, Debug, PartialEq)]
pub struct Escapes {
    pub marker: char,
    /// What the character following the marker is replaced with.
    pub replacements: HashMap<char, String>,
    /// Pass unknown sequences through as the bare character (e.g. `\#` becomes
    /// `#` without starting a comment) instead of failing.
    pub allow_unknown: bool,
}

impl Default for Escapes {
    fn default() -> Self {
        let replacements = [
            ('0', "\0"),
            ('a', "\x07"),
            ('b', "\x08"),
            ('t', "\t"),
            ('r', "\r"),
            ('n', "\n"),
            // line continuation
            ('\n', ""),
        ]
        .into_iter()
        .map(|(k, v)| (k, v.to_owned()))
        .collect();

        Self {
            marker: DEFAULT_ESCAPE_MARKER,
            replacements,
            allow_unknown: true,
        }
    }
}

impl Escapes {
    /// Resolves the character following the marker. `None` means the sequence
    /// is unknown and must be rejected.
    pub(crate) fn resolve(&self, c: char) -> Option<String> {
        match self.replacements.get(&c) {
            Some(replacement) => Some(replacement.clone()),
            None if self.allow_unknown => Some(c.to_string()),
            None => None,
        }
    }
}
