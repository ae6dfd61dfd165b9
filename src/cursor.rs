// ABOUTME: Byte-by-byte input cursor with line/column tracking for the parser

/// A read-only view over the remaining source bytes, tracking 1-based
/// line/column so every parse error can name the location of the first
/// unconsumed byte. `position + remaining().len() == total` is maintained
/// by construction: the cursor only ever shrinks from the front.
pub struct Cursor<'a> {
    stream: &'a [u8],
    line: usize,
    col: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Cursor {
            stream: source.as_bytes(),
            line: 1,
            col: 1,
        }
    }

    /// Bytes remaining. `peek`/`next` are only valid when this is nonzero.
    pub fn size(&self) -> usize {
        self.stream.len()
    }

    pub fn remaining(&self) -> &'a [u8] {
        self.stream
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Current byte without consuming it. Panics if `size() == 0`;
    /// callers must check first, mirroring the original's assertion.
    pub fn peek(&self) -> u8 {
        assert!(self.size() != 0, "peek() called at end of input");
        self.stream[0]
    }

    /// Current byte, then advances one position.
    pub fn next(&mut self) -> u8 {
        let b = self.peek();
        self.advance(1);
        b
    }

    /// Advances `n` bytes, updating line/column one byte at a time so a
    /// newline anywhere in the advanced span resets the column correctly.
    pub fn advance(&mut self, n: usize) {
        assert!(self.size() >= n, "advance({n}) past end of input");
        for _ in 0..n {
            let b = self.stream[0];
            self.stream = &self.stream[1..];
            if b == b'\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_line_and_column() {
        let mut c = Cursor::new("ab\ncd");
        assert_eq!((c.line(), c.col()), (1, 1));
        c.advance(2);
        assert_eq!((c.line(), c.col()), (1, 3));
        c.advance(1); // consume the newline
        assert_eq!((c.line(), c.col()), (2, 1));
        c.advance(2);
        assert_eq!((c.line(), c.col()), (2, 3));
        assert_eq!(c.size(), 0);
    }

    #[test]
    fn next_returns_byte_and_advances() {
        let mut c = Cursor::new("xy");
        assert_eq!(c.next(), b'x');
        assert_eq!(c.peek(), b'y');
        assert_eq!(c.size(), 1);
    }
}
