//! Text buffer and position types
//!
//! Columns count `char`s, so no edit can land inside a UTF-8 sequence.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Cursor position in the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub const fn zero() -> Self {
        Self { row: 0, col: 0 }
    }
}

/// Byte offset of column `col` in `line`, or `line.len()` past the end
pub(crate) fn byte_index(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(idx, _)| idx)
        .unwrap_or(line.len())
}

/// Text buffer with line-based storage
///
/// Always holds at least one line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct TextBuffer {
    lines: Vec<String>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    pub fn from_string(content: String) -> Self {
        Self::from_lines(content.lines().map(|s| s.into()).collect())
    }

    /// Build a buffer from lines; an empty list yields one empty line
    pub fn from_lines(lines: Vec<String>) -> Self {
        if lines.is_empty() {
            Self::new()
        } else {
            Self { lines }
        }
    }

    pub fn as_string(&self) -> String {
        self.lines.join("\n")
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn last_row(&self) -> usize {
        self.lines.len() - 1
    }

    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    /// Length of a line in columns (0 for a missing row)
    pub fn line_length(&self, row: usize) -> usize {
        self.lines
            .get(row)
            .map(|s| s.chars().count())
            .unwrap_or(0)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Insert text at position
    pub fn insert_str(&mut self, pos: Position, text: &str) -> bool {
        if pos.row >= self.lines.len() || pos.col > self.line_length(pos.row) {
            return false;
        }

        let line = &mut self.lines[pos.row];
        let idx = byte_index(line, pos.col);
        line.insert_str(idx, text);
        true
    }

    /// Truncate the line at position and return the text after it
    pub fn split_line(&mut self, pos: Position) -> Option<String> {
        if pos.row >= self.lines.len() || pos.col > self.line_length(pos.row) {
            return None;
        }

        let line = &mut self.lines[pos.row];
        let idx = byte_index(line, pos.col);
        Some(line.split_off(idx))
    }

    /// Insert a whole line so that it ends up at index `row`
    pub fn insert_line(&mut self, row: usize, text: String) -> bool {
        if row > self.lines.len() {
            return false;
        }

        self.lines.insert(row, text);
        true
    }

    /// Delete character at position
    pub fn delete_char(&mut self, pos: Position) -> bool {
        if pos.row >= self.lines.len() || pos.col >= self.line_length(pos.row) {
            return false;
        }

        let line = &mut self.lines[pos.row];
        let idx = byte_index(line, pos.col);
        line.remove(idx);
        true
    }

    /// Clamp a position onto the buffer
    pub fn clamp(&self, pos: Position) -> Position {
        let row = pos.row.min(self.last_row());
        let col = pos.col.min(self.line_length(row));
        Position::new(row, col)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position() {
        let pos = Position::new(5, 10);
        assert_eq!(pos.row, 5);
        assert_eq!(pos.col, 10);
        assert_eq!(Position::zero(), Position::default());
    }

    #[test]
    fn test_text_buffer_new() {
        let buffer = TextBuffer::new();
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.line(0), Some(""));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_from_string() {
        let buffer = TextBuffer::from_string("hello\nworld".into());
        assert_eq!(buffer.line_count(), 2);
        assert_eq!(buffer.line(0), Some("hello"));
        assert_eq!(buffer.line(1), Some("world"));
        assert_eq!(buffer.as_string(), "hello\nworld");
    }

    #[test]
    fn test_from_empty_input_keeps_one_line() {
        assert_eq!(TextBuffer::from_string(String::new()).line_count(), 1);
        assert_eq!(TextBuffer::from_lines(Vec::new()).line_count(), 1);
    }

    #[test]
    fn test_insert_str() {
        let mut buffer = TextBuffer::from_string("helld".into());
        assert!(buffer.insert_str(Position::new(0, 3), "lo wor"));
        assert_eq!(buffer.line(0), Some("hello world"));
    }

    #[test]
    fn test_insert_str_out_of_range() {
        let mut buffer = TextBuffer::from_string("ab".into());
        assert!(!buffer.insert_str(Position::new(0, 3), "x"));
        assert!(!buffer.insert_str(Position::new(1, 0), "x"));
        assert_eq!(buffer.line(0), Some("ab"));
    }

    #[test]
    fn test_split_line() {
        let mut buffer = TextBuffer::from_string("abcdef".into());
        assert_eq!(buffer.split_line(Position::new(0, 3)), Some("def".into()));
        assert_eq!(buffer.line(0), Some("abc"));
        assert_eq!(buffer.split_line(Position::new(0, 3)), Some(String::new()));
        assert_eq!(buffer.split_line(Position::new(0, 4)), None);
    }

    #[test]
    fn test_insert_line() {
        let mut buffer = TextBuffer::from_string("a\nc".into());
        assert!(buffer.insert_line(1, "b".into()));
        assert!(buffer.insert_line(3, "d".into()));
        assert!(!buffer.insert_line(5, "z".into()));
        assert_eq!(buffer.as_string(), "a\nb\nc\nd");
    }

    #[test]
    fn test_delete_char() {
        let mut buffer = TextBuffer::from_string("hello".into());
        assert!(buffer.delete_char(Position::new(0, 0)));
        assert_eq!(buffer.line(0), Some("ello"));
        assert!(!buffer.delete_char(Position::new(0, 4)));
    }

    #[test]
    fn test_multibyte_columns() {
        let mut buffer = TextBuffer::from_string("héllo".into());
        assert_eq!(buffer.line_length(0), 5);
        assert!(buffer.insert_str(Position::new(0, 2), "-"));
        assert_eq!(buffer.line(0), Some("hé-llo"));
        assert!(buffer.delete_char(Position::new(0, 1)));
        assert_eq!(buffer.line(0), Some("h-llo"));
    }

    #[test]
    fn test_clamp() {
        let buffer = TextBuffer::from_string("hello\nhi".into());
        assert_eq!(buffer.clamp(Position::new(1, 4)), Position::new(1, 2));
        assert_eq!(buffer.clamp(Position::new(7, 4)), Position::new(1, 2));
        assert_eq!(buffer.clamp(Position::new(0, 3)), Position::new(0, 3));
    }
}
