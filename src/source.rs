use std::io::{self, BufRead};
use std::str::Chars;

/// Anything that can hand out characters one at a time.
///
/// `Ok(None)` marks the end of the input. Errors are forwarded to the caller of
/// [`crate::Tokenizer::next_token`] unchanged.
pub trait CharSource {
    fn read_char(&mut self) -> io::Result<Option<char>>;
}

impl CharSource for Chars<'_> {
    fn read_char(&mut self) -> io::Result<Option<char>> {
        Ok(self.next())
    }
}

/// Lets a caller keep ownership of a source and lend it to a tokenizer.
impl<S: CharSource + ?Sized> CharSource for &mut S {
    fn read_char(&mut self) -> io::Result<Option<char>> {
        (**self).read_char()
    }
}

/// Decodes UTF-8 from a buffered reader, one character per call.
///
/// Buffering is the reader's business, wrap files in a `BufReader`.
#[derive(Debug)]
pub struct ReaderSource<R> {
    inner: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Gives back the reader, positioned right after the last character read.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.inner.fill_buf() {
                Ok(buf) => {
                    let byte = buf.first().copied();
                    if byte.is_some() {
                        self.inner.consume(1);
                    }
                    return Ok(byte);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R: BufRead> CharSource for ReaderSource<R> {
    fn read_char(&mut self) -> io::Result<Option<char>> {
        let first = match self.read_byte()? {
            Some(b) => b,
            None => return Ok(None),
        };

        let width = utf8_width(first).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("invalid UTF-8 start byte 0x{first:02x}"),
            )
        })?;

        let mut bytes = [first, 0, 0, 0];
        for byte in bytes.iter_mut().take(width).skip(1) {
            *byte = self.read_byte()?.ok_or_else(|| {
                io::Error::new(io::ErrorKind::UnexpectedEof, "truncated UTF-8 sequence")
            })?;
        }

        let s = std::str::from_utf8(&bytes[..width])
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(s.chars().next())
    }
}

fn utf8_width(first: u8) -> Option<usize> {
    match first {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}
