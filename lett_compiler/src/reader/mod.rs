//! Character sources for the scanner
//!
//! A [`Reader`] hands out one *accepted* character at a time: printable
//! ASCII (0x20..=0x7E), tab and newline. Every other byte is skipped while
//! advancing. Readers also offer non-destructive lookahead of any depth and
//! track the line/column of the last character returned.

mod error;
mod file_reader;
mod string_reader;

pub use error::ReaderError;
pub use file_reader::{FileReader, SourceSnapshot};
pub use string_reader::StringReader;

use crate::utils::Position;

/// Whether a raw byte can ever be returned by a reader
pub fn is_accepted(byte: u8) -> bool {
    matches!(byte, b'\t' | b'\n' | 0x20..=0x7E)
}

/// Pull-based source of filtered characters
pub trait Reader {
    /// Next accepted character, advancing the position
    fn read(&mut self) -> Option<char>;

    /// Accepted character `n` advances ahead (`n >= 1`) without moving.
    /// `None` when fewer than `n` characters remain, or for `n == 0`.
    fn peek(&mut self, n: usize) -> Option<char>;

    /// Line of the last character returned by `read` (1-based)
    fn line(&self) -> usize;

    /// Column of the last character returned by `read`; 0 right after a newline
    fn column(&self) -> usize;

    fn position(&self) -> Position {
        Position::new(self.line(), self.column())
    }
}

impl<R: Reader + ?Sized> Reader for &mut R {
    fn read(&mut self) -> Option<char> {
        (**self).read()
    }

    fn peek(&mut self, n: usize) -> Option<char> {
        (**self).peek(n)
    }

    fn line(&self) -> usize {
        (**self).line()
    }

    fn column(&self) -> usize {
        (**self).column()
    }
}

impl<R: Reader + ?Sized> Reader for Box<R> {
    fn read(&mut self) -> Option<char> {
        (**self).read()
    }

    fn peek(&mut self, n: usize) -> Option<char> {
        (**self).peek(n)
    }

    fn line(&self) -> usize {
        (**self).line()
    }

    fn column(&self) -> usize {
        (**self).column()
    }
}
