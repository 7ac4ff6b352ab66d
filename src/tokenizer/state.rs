use std::mem;

use super::position::Position;
use crate::config::Config;
use crate::error::{Error, TokenizeResult};
use crate::token::{CommentToken, SectionToken, SettingToken, Token};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum State {
    Start,
    Whitespace,
    Section,
    Comment,
    Left,
    Right,
    Escape(Resume),
}

/// Where to continue after an escape sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Resume {
    Section,
    Left,
    Right,
}

impl From<Resume> for State {
    fn from(resume: Resume) -> Self {
        match resume {
            Resume::Section => State::Section,
            Resume::Left => State::Left,
            Resume::Right => State::Right,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Transition {
    Next(State),
    /// The token under construction is complete.
    Emit,
}

/// Mutable data the states work on while a single token is being built.
#[derive(Debug, Default)]
pub(crate) struct Context {
    buf: String,
    token: Option<Token>,
    lookahead: Option<char>,
}

impl Context {
    pub(crate) fn reset(&mut self) {
        self.buf.clear();
        self.token = None;
    }

    pub(crate) fn take_token(&mut self) -> Option<Token> {
        self.token.take()
    }

    pub(crate) fn take_lookahead(&mut self) -> Option<char> {
        self.lookahead.take()
    }

    fn unread(&mut self, c: char) {
        debug_assert!(self.lookahead.is_none(), "only one character of lookahead");
        self.lookahead = Some(c);
    }

    /// Feeds `c` to `state`. `pos` is only used to annotate errors.
    pub(crate) fn step(
        &mut self,
        state: State,
        c: char,
        cfg: &Config,
        pos: Position,
    ) -> TokenizeResult<Transition> {
        match state {
            State::Start => Ok(self.start(c, cfg)),
            State::Whitespace => Ok(self.whitespace(c, cfg)),
            State::Section => self.section(c, cfg, pos),
            State::Comment => Ok(self.comment(c)),
            State::Left => self.left(c, cfg, pos),
            State::Right => Ok(self.right(c, cfg)),
            State::Escape(resume) => self.escape(resume, c, cfg, pos),
        }
    }

    fn start(&mut self, c: char, cfg: &Config) -> Transition {
        self.buf.clear();

        match c {
            // blank line
            '\n' => Transition::Next(State::Start),
            _ if c.is_whitespace() => Transition::Next(State::Whitespace),
            _ if c == cfg.section_start => Transition::Next(State::Section),
            _ if cfg.is_comment(c) => {
                self.unread(c);
                Transition::Next(State::Comment)
            }
            _ => {
                self.unread(c);
                Transition::Next(State::Left)
            }
        }
    }

    fn whitespace(&mut self, c: char, cfg: &Config) -> Transition {
        if cfg.is_comment(c) {
            self.unread(c);
            return Transition::Next(State::Comment);
        }

        if c.is_whitespace() {
            return Transition::Next(State::Whitespace);
        }

        self.unread(c);
        Transition::Next(State::Start)
    }

    fn section(&mut self, c: char, cfg: &Config, pos: Position) -> TokenizeResult<Transition> {
        match c {
            _ if c == cfg.section_start => Err(unexpected(c, pos)),
            _ if c == cfg.section_end => {
                let name = mem::take(&mut self.buf);
                self.token = Some(
                    SectionToken::with_delimiters(name, cfg.section_start, cfg.section_end).into(),
                );
                Ok(Transition::Emit)
            }
            _ if cfg.is_escape(c) => Ok(Transition::Next(State::Escape(Resume::Section))),
            // section headers must be closed on the line they start on
            '\n' => Err(unexpected(c, pos)),
            _ if cfg.is_comment(c) => Err(unexpected(c, pos)),
            _ => {
                self.buf.push(c);
                Ok(Transition::Next(State::Section))
            }
        }
    }

    fn comment(&mut self, c: char) -> Transition {
        // the first character is the marker that got us here
        if self.token.is_none() {
            self.token = Some(CommentToken::with_marker(c, String::new()).into());
            return Transition::Next(State::Comment);
        }

        if c == '\n' {
            let text = mem::take(&mut self.buf);
            if let Some(Token::Comment(t)) = &mut self.token {
                t.text = text;
            }
            return Transition::Emit;
        }

        self.buf.push(c);
        Transition::Next(State::Comment)
    }

    fn left(&mut self, c: char, cfg: &Config, pos: Position) -> TokenizeResult<Transition> {
        match c {
            '\n' => Err(Error::NewlineInKey {
                line: pos.line(),
                col: pos.col(),
            }),
            _ if c == cfg.separator => {
                let left = mem::take(&mut self.buf);
                self.token = Some(SettingToken::with_separator(left, String::new(), c).into());
                Ok(Transition::Next(State::Right))
            }
            _ if cfg.is_escape(c) => Ok(Transition::Next(State::Escape(Resume::Left))),
            _ if cfg.is_comment(c) => Err(unexpected(c, pos)),
            _ => {
                self.buf.push(c);
                Ok(Transition::Next(State::Left))
            }
        }
    }

    fn right(&mut self, c: char, cfg: &Config) -> Transition {
        match c {
            '\n' => self.finish_setting(),
            _ if cfg.is_escape(c) => Transition::Next(State::Escape(Resume::Right)),
            // the comment becomes the next token
            _ if cfg.is_comment(c) => {
                self.unread(c);
                self.finish_setting()
            }
            _ => {
                self.buf.push(c);
                Transition::Next(State::Right)
            }
        }
    }

    fn finish_setting(&mut self) -> Transition {
        let right = mem::take(&mut self.buf);
        if let Some(Token::Setting(t)) = &mut self.token {
            t.right = right;
        }
        Transition::Emit
    }

    fn escape(
        &mut self,
        resume: Resume,
        c: char,
        cfg: &Config,
        pos: Position,
    ) -> TokenizeResult<Transition> {
        match cfg.escapes.as_ref() {
            Some(escapes) => match escapes.resolve(c) {
                Some(replacement) => self.buf.push_str(&replacement),
                None => {
                    return Err(Error::UnknownEscape {
                        line: pos.line(),
                        col: pos.col(),
                        ch: c,
                    })
                }
            },
            None => self.buf.push(c),
        }

        Ok(Transition::Next(resume.into()))
    }
}

#[cold]
fn unexpected(ch: char, pos: Position) -> Error {
    Error::UnexpectedCharacter {
        line: pos.line(),
        col: pos.col(),
        ch,
    }
}
