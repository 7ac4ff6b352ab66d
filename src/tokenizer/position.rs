/// Line and column of the most recently consumed character, both 1-based.
///
/// A newline belongs to the line it ends; the line count only goes up with the
/// character after it, which is column 1 of the next line. So after `"a=1\n"`
/// the position is `1:4`, not `2:0`, and an error on that newline points at
/// the line it terminates. Purely diagnostic, tokenizing never looks at it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    line: usize,
    col: usize,
    after_newline: bool,
}

impl Position {
    pub(crate) fn new() -> Self {
        Self {
            line: 1,
            col: 0,
            after_newline: false,
        }
    }

    pub(crate) fn advance(&mut self, c: char) {
        if self.after_newline {
            self.line += 1;
            self.col = 0;
        }
        self.col += 1;
        self.after_newline = c == '\n';
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn col(&self) -> usize {
        self.col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn after(input: &str) -> (usize, usize) {
        let mut pos = Position::new();
        input.chars().for_each(|c| pos.advance(c));
        (pos.line(), pos.col())
    }

    mod advance {
        use super::*;

        #[test]
        fn test_nothing_consumed() {
            assert_eq!(after(""), (1, 0));
        }

        #[test]
        fn test_columns_count_chars_not_bytes() {
            assert_eq!(after("äöü"), (1, 3));
        }

        #[test]
        fn test_newline_stays_on_its_line() {
            assert_eq!(after("abc\n"), (1, 4));
            assert_eq!(after("a=1\n"), (1, 4));
        }

        #[test]
        fn test_char_after_newline_starts_next_line() {
            assert_eq!(after("abc\nd"), (2, 1));
            assert_eq!(after("\n\n\nxy"), (4, 2));
        }
    }
}
