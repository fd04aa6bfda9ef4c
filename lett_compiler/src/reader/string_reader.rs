//! In-memory character source

use super::{is_accepted, Reader};
use crate::utils::Position;

/// Reader over an owned string
#[derive(Debug, Clone)]
pub struct StringReader {
    source: String,
    pos: usize,
    position: Position,
}

impl StringReader {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            pos: 0,
            position: Position::origin(),
        }
    }

    /// Byte offset of the next unread byte
    pub fn offset(&self) -> usize {
        self.pos
    }

    fn accepted_from(&self, start: usize) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.source.as_bytes()[start..]
            .iter()
            .enumerate()
            .filter(|(_, byte)| is_accepted(**byte))
            .map(move |(i, byte)| (start + i, *byte))
    }
}

impl Reader for StringReader {
    fn read(&mut self) -> Option<char> {
        let (index, byte) = self.accepted_from(self.pos).next()?;
        let ch = char::from(byte);
        self.pos = index + 1;
        self.position = self.position.advance(ch);
        Some(ch)
    }

    fn peek(&mut self, n: usize) -> Option<char> {
        if n == 0 {
            return None;
        }
        self.accepted_from(self.pos)
            .nth(n - 1)
            .map(|(_, byte)| char::from(byte))
    }

    fn line(&self) -> usize {
        self.position.line
    }

    fn column(&self) -> usize {
        self.position.column
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_tracks_line_and_column() {
        let mut reader = StringReader::new("ab\ncd");
        assert_eq!(reader.read(), Some('a'));
        assert_eq!((reader.line(), reader.column()), (1, 1));
        assert_eq!(reader.read(), Some('b'));
        assert_eq!((reader.line(), reader.column()), (1, 2));
        assert_eq!(reader.read(), Some('\n'));
        assert_eq!((reader.line(), reader.column()), (2, 0));
        assert_eq!(reader.read(), Some('c'));
        assert_eq!((reader.line(), reader.column()), (2, 1));
        assert_eq!(reader.read(), Some('d'));
        assert_eq!(reader.read(), None);
        assert_eq!((reader.line(), reader.column()), (2, 2));
    }

    #[test]
    fn test_filtering_skips_unaccepted_bytes() {
        let mut reader = StringReader::new("a\r\nb\u{00e9}c\u{7f}d");
        let collected: String = std::iter::from_fn(|| reader.read()).collect();
        assert_eq!(collected, "a\nbcd");
        assert_eq!(reader.position(), Position::new(2, 3));
    }

    #[test]
    fn test_peek_does_not_move() {
        let mut reader = StringReader::new("xyz");
        assert_eq!(reader.peek(1), Some('x'));
        assert_eq!(reader.peek(3), Some('z'));
        assert_eq!(reader.peek(4), None);
        assert_eq!(reader.peek(0), None);
        assert_eq!(reader.position(), Position::origin());
        assert_eq!(reader.read(), Some('x'));
        assert_eq!(reader.peek(1), Some('y'));
    }

    #[test]
    fn test_peek_skips_filtered_bytes() {
        let mut reader = StringReader::new("a\u{00e9}\r\u{00e9}b");
        assert_eq!(reader.peek(2), Some('b'));
        assert_eq!(reader.read(), Some('a'));
        assert_eq!(reader.peek(1), Some('b'));
        assert_eq!(reader.peek(2), None);
    }

    #[test]
    fn test_failed_peek_leaves_reader_unchanged() {
        let mut reader = StringReader::new("ab");
        reader.read();
        let before = (reader.offset(), reader.position());
        assert_eq!(reader.peek(5), None);
        assert_eq!((reader.offset(), reader.position()), before);
        assert_eq!(reader.read(), Some('b'));
    }

    #[test]
    fn test_empty_source() {
        let mut reader = StringReader::new("");
        assert_eq!(reader.peek(1), None);
        assert_eq!(reader.read(), None);
        assert_eq!(reader.position(), Position::origin());
    }
}
