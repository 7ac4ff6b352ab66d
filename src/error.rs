use std::io;
use std::sync::Arc;

pub type TokenizeResult<T> = Result<T, Error>;

/// Everything that can go wrong while tokenizing.
///
/// All variants carry the 1-based line and column of the character that was
/// being looked at. Errors are sticky: a [`crate::Tokenizer`] that returned one
/// keeps returning clones of it.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("{line}:{col} unexpected character {ch:?}")]
    UnexpectedCharacter { line: usize, col: usize, ch: char },
    #[error("{line}:{col} newline in left-hand side")]
    NewlineInKey { line: usize, col: usize },
    #[error("{line}:{col} unknown escape sequence {ch:?}")]
    UnknownEscape { line: usize, col: usize, ch: char },
    #[error("{line}:{col} {source}")]
    Source {
        line: usize,
        col: usize,
        #[source]
        source: Arc<io::Error>,
    },
}

impl Error {
    pub fn line(&self) -> usize {
        match self {
            Error::UnexpectedCharacter { line, .. }
            | Error::NewlineInKey { line, .. }
            | Error::UnknownEscape { line, .. }
            | Error::Source { line, .. } => *line,
        }
    }

    pub fn col(&self) -> usize {
        match self {
            Error::UnexpectedCharacter { col, .. }
            | Error::NewlineInKey { col, .. }
            | Error::UnknownEscape { col, .. }
            | Error::Source { col, .. } => *col,
        }
    }

    /// The error reported by the character source, if that is what failed.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Error::Source { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
