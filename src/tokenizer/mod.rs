mod position;
mod state;

pub use self::position::Position;

use std::io::BufRead;
use std::iter::FusedIterator;
use std::str::Chars;
use std::sync::Arc;

use log::{debug, trace};

use self::state::{Context, State, Transition};
use crate::config::Config;
use crate::error::{Error, TokenizeResult};
use crate::source::{CharSource, ReaderSource};
use crate::token::Token;

#[derive(Debug)]
enum Status {
    Open,
    Done,
    Failed(Error),
}

/// Pull-based tokenizer over a [`CharSource`].
///
/// Every call to [`Tokenizer::next_token`] reads just enough characters to
/// produce one token. Once the input is exhausted it keeps returning
/// `Ok(None)`; once it failed it keeps returning the same error.
#[derive(Debug)]
pub struct Tokenizer<S> {
    source: S,
    config: Config,
    context: Context,
    position: Position,
    at_eof: bool,
    status: Status,
}

impl<'a> Tokenizer<Chars<'a>> {
    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.chars())
    }
}

impl<R: BufRead> Tokenizer<ReaderSource<R>> {
    pub fn from_reader(reader: R) -> Self {
        Self::new(ReaderSource::new(reader))
    }
}

impl<S: CharSource> Tokenizer<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, Config::default())
    }

    pub fn with_config(source: S, config: Config) -> Self {
        Self {
            source,
            config,
            context: Context::default(),
            position: Position::new(),
            at_eof: false,
            status: Status::Open,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Changes apply to tokens produced from now on. Tokens already handed out
    /// keep the delimiters they were created with.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Position of the last character read from the source.
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn next_token(&mut self) -> TokenizeResult<Option<Token>> {
        match &self.status {
            Status::Done => return Ok(None),
            Status::Failed(err) => return Err(err.clone()),
            Status::Open => {}
        }

        match self.run() {
            Ok(Some(token)) => {
                debug!(
                    "{}:{} {token:?}",
                    self.position.line(),
                    self.position.col()
                );
                Ok(Some(token))
            }
            Ok(None) => {
                debug!("end of input after line {}", self.position.line());
                self.status = Status::Done;
                Ok(None)
            }
            Err(err) => {
                debug!("tokenizing failed: {err}");
                self.status = Status::Failed(err.clone());
                Err(err)
            }
        }
    }

    fn run(&mut self) -> TokenizeResult<Option<Token>> {
        self.context.reset();
        let mut state = State::Start;

        loop {
            // a newline in place of the end of input completes whatever is in progress
            let c = self.read()?.unwrap_or('\n');

            let next = match self.context.step(state, c, &self.config, self.position)? {
                Transition::Emit => {
                    trace!("{state:?} {c:?} -> emit");
                    return Ok(self.context.take_token());
                }
                Transition::Next(next) => next,
            };
            trace!("{state:?} {c:?} -> {next:?}");
            state = next;

            if self.at_eof && matches!(state, State::Start | State::Whitespace) {
                return Ok(None);
            }
        }
    }

    fn read(&mut self) -> TokenizeResult<Option<char>> {
        if let Some(c) = self.context.take_lookahead() {
            return Ok(Some(c));
        }
        if self.at_eof {
            return Ok(None);
        }

        match self.source.read_char() {
            Ok(Some(c)) => {
                self.position.advance(c);
                Ok(Some(c))
            }
            Ok(None) => {
                self.at_eof = true;
                Ok(None)
            }
            Err(e) => Err(Error::Source {
                line: self.position.line(),
                col: self.position.col(),
                source: Arc::new(e),
            }),
        }
    }
}

/// Yields a failure once and then stops, unlike [`Tokenizer::next_token`]
/// which keeps reporting it.
impl<S: CharSource> Iterator for Tokenizer<S> {
    type Item = TokenizeResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Status::Failed(_) = self.status {
            return None;
        }
        self.next_token().transpose()
    }
}

impl<S: CharSource> FusedIterator for Tokenizer<S> {}
