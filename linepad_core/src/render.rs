//! Rendering the buffer with an inline cursor marker

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::buffer::{byte_index, Position, TextBuffer};

/// Marker inserted at the cursor column when none is configured
pub const DEFAULT_CURSOR_MARKER: &str = "|";

/// Display lines for one frame, in buffer order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    lines: Vec<String>,
    cursor_row: usize,
}

impl RenderedView {
    pub fn new(buffer: &TextBuffer, cursor: Position, marker: &str) -> Self {
        let lines = buffer
            .lines()
            .iter()
            .enumerate()
            .map(|(row, line)| {
                if row == cursor.row {
                    render_line_with_cursor(line, cursor.col, marker)
                } else {
                    line.clone()
                }
            })
            .collect();

        Self {
            lines,
            cursor_row: cursor.row,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn cursor_row(&self) -> usize {
        self.cursor_row
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl fmt::Display for RenderedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

fn render_line_with_cursor(line: &str, col: usize, marker: &str) -> String {
    let idx = byte_index(line, col);
    let mut result = String::with_capacity(line.len() + marker.len());
    result.push_str(&line[..idx]);
    result.push_str(marker);
    result.push_str(&line[idx..]);
    result
}
