#![no_std]

//! # Linepad Core
//!
//! A line-oriented text buffer with a 2D cursor and linear undo/redo.
//!
//! ## Philosophy
//!
//! - **No_std compatible**: Uses alloc but not std
//! - **Deterministic**: Same action sequence => same editor state
//! - **Whole-buffer history**: Every mutation checkpoints the full buffer
//! - **Mechanism over policy**: Core provides editing primitives, shells decide presentation
//! - **No I/O**: Prompting, confirmation and display belong to the caller
//!
//! ## Design
//!
//! The core provides:
//! - TextBuffer: Ordered, never-empty sequence of lines
//! - Position: Cursor with clamping navigation rules
//! - History: Undo/redo stacks of buffer snapshots
//! - EditorCore: Owns all three and exposes one method per user command
//! - EditorAction: Value form of those commands for scripted or replayed input
//! - RenderedView: Display lines with an inline cursor marker

extern crate alloc;

pub mod action;
pub mod buffer;
pub mod core;
pub mod cursor;
pub mod history;
pub mod render;
pub mod snapshot;

pub use action::EditorAction;
pub use buffer::{Position, TextBuffer};
pub use crate::core::{CoreOutcome, EditorCore};
pub use history::{BufferSnapshot, History};
pub use render::{RenderedView, DEFAULT_CURSOR_MARKER};
pub use snapshot::EditorSnapshot;
