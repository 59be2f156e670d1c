//! Editor actions
//!
//! One variant per operation the core exposes, so shells, scripted tests
//! and replay logs can drive an `EditorCore` with plain values.

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// A single editor request
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub enum EditorAction {
    /// Insert text at the cursor
    InsertText(String),
    /// Split the current line at the cursor and insert whole lines between the halves
    InsertLines(Vec<String>),
    /// Delete the character after the cursor
    DeleteChar,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    /// Split the current line at the cursor
    NewLine,
    Undo,
    Redo,
}

impl EditorAction {
    /// Whether this action edits the buffer and records an undo entry
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            EditorAction::InsertText(_)
                | EditorAction::InsertLines(_)
                | EditorAction::DeleteChar
                | EditorAction::NewLine
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EditorAction::InsertText(_) => "insert_text",
            EditorAction::InsertLines(_) => "insert_lines",
            EditorAction::DeleteChar => "delete_char",
            EditorAction::MoveLeft => "move_left",
            EditorAction::MoveRight => "move_right",
            EditorAction::MoveUp => "move_up",
            EditorAction::MoveDown => "move_down",
            EditorAction::NewLine => "new_line",
            EditorAction::Undo => "undo",
            EditorAction::Redo => "redo",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_mutating_actions() {
        assert!(EditorAction::InsertText("x".into()).is_mutating());
        assert!(EditorAction::InsertLines(vec![]).is_mutating());
        assert!(EditorAction::DeleteChar.is_mutating());
        assert!(EditorAction::NewLine.is_mutating());
    }

    #[test]
    fn test_non_mutating_actions() {
        for action in [
            EditorAction::MoveLeft,
            EditorAction::MoveRight,
            EditorAction::MoveUp,
            EditorAction::MoveDown,
            EditorAction::Undo,
            EditorAction::Redo,
        ] {
            assert!(!action.is_mutating(), "{} should not mutate", action.as_str());
        }
    }
}
