//! Command token parsing

use linepad_core::EditorAction;
use thiserror::Error;

/// Command parsing error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid syntax: {0}")]
    InvalidSyntax(String),
}

/// Shell command, one per token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    /// `I`: insert one line of text at the cursor
    Insert,
    /// `M`: insert lines collected until an empty line
    MultilineInsert,
    /// `D`: delete the character after the cursor, after confirmation
    Delete,
    Left,
    Right,
    Up,
    Down,
    NewLine,
    Undo,
    Redo,
    /// `Q`: end the session
    Quit,
}

impl ShellCommand {
    pub fn token(&self) -> &'static str {
        match self {
            ShellCommand::Insert => "I",
            ShellCommand::MultilineInsert => "M",
            ShellCommand::Delete => "D",
            ShellCommand::Left => "L",
            ShellCommand::Right => "R",
            ShellCommand::Up => "W",
            ShellCommand::Down => "S",
            ShellCommand::NewLine => "N",
            ShellCommand::Undo => "U",
            ShellCommand::Redo => "Y",
            ShellCommand::Quit => "Q",
        }
    }

    /// The core action for commands that need no further input
    pub fn immediate_action(&self) -> Option<EditorAction> {
        match self {
            ShellCommand::Left => Some(EditorAction::MoveLeft),
            ShellCommand::Right => Some(EditorAction::MoveRight),
            ShellCommand::Up => Some(EditorAction::MoveUp),
            ShellCommand::Down => Some(EditorAction::MoveDown),
            ShellCommand::NewLine => Some(EditorAction::NewLine),
            ShellCommand::Undo => Some(EditorAction::Undo),
            ShellCommand::Redo => Some(EditorAction::Redo),
            _ => None,
        }
    }
}

/// Command parser
pub struct CommandParser;

impl CommandParser {
    /// Parse a command token; tokens are case-sensitive
    pub fn parse(token: &str) -> Result<ShellCommand, CommandError> {
        let trimmed = token.trim();

        match trimmed {
            "I" => Ok(ShellCommand::Insert),
            "M" => Ok(ShellCommand::MultilineInsert),
            "D" => Ok(ShellCommand::Delete),
            "L" => Ok(ShellCommand::Left),
            "R" => Ok(ShellCommand::Right),
            "W" => Ok(ShellCommand::Up),
            "S" => Ok(ShellCommand::Down),
            "N" => Ok(ShellCommand::NewLine),
            "U" => Ok(ShellCommand::Undo),
            "Y" => Ok(ShellCommand::Redo),
            "Q" => Ok(ShellCommand::Quit),
            "" => Err(CommandError::InvalidSyntax("Empty command".to_string())),
            _ => Err(CommandError::UnknownCommand(trimmed.to_string())),
        }
    }
}
