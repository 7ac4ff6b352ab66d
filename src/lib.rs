//! Streaming tokenizer for INI-style configuration text.
//!
//! The [`Tokenizer`] pulls characters from a [`CharSource`] and hands out one
//! [`Token`] per call: a section header, a `key=value` setting or a comment.
//! It builds no tree and does no validation beyond what is needed to tell the
//! three apart.
//!
//! ```
//! use ini_tokenizer::{Token, Tokenizer};
//!
//! let mut tokenizer = Tokenizer::from_text("[Test 1]\nThis=is\n# Comment\na=test.");
//! while let Some(token) = tokenizer.next_token()? {
//!     match token {
//!         Token::Section(s) => println!("{}:", s.name),
//!         Token::Setting(s) => println!("\t{}: {}", s.left, s.right),
//!         Token::Comment(c) => println!("{c}"),
//!     }
//! }
//! # Ok::<(), ini_tokenizer::Error>(())
//! ```

mod config;
mod error;
mod source;
mod token;
mod tokenizer;

pub use self::config::{Config, Escapes};
pub use self::error::{Error, TokenizeResult};
pub use self::source::{CharSource, ReaderSource};
pub use self::token::{CommentToken, SectionToken, SettingToken, Token};
pub use self::tokenizer::{Position, Tokenizer};
