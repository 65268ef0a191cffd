//! markpad-editor-core: pure Rust editing logic for the markpad markdown
//! editor, without framework dependencies.
//!
//! This crate provides:
//! - `TextBuffer` trait for text storage abstraction and the ropey-backed
//!   `EditorRope`
//! - the toolbar formatting engine: `Directive` and the toggle-wrap
//!   `apply_format`
//! - bracket/quote auto-completion and markdown list continuation
//! - `EditorDocument` + `PlainEditor` with undo support, action dispatch,
//!   keymaps, and built-in document templates
//!
//! All offsets everywhere are character offsets (Unicode scalar values),
//! never bytes. The transformation entry points are stateless: buffer and
//! selection go in, new buffer and selection come out, and the host applies
//! the result atomically before the next input event.

pub mod actions;
pub mod autopair;
pub mod document;
pub mod error;
pub mod execute;
pub mod formatting;
pub mod templates;
pub mod text;
pub mod text_helpers;
pub mod types;
pub mod undo;

pub use actions::{EditorAction, Key, KeyCombo, KeydownResult, Keymap, Modifiers, Range};
pub use autopair::{closing_for, handle_auto_pair, handle_auto_pair_str, COMPLETION_PAIRS};
pub use document::{EditorDocument, PlainEditor};
pub use error::EditError;
pub use execute::{execute_action, handle_keydown};
pub use formatting::{
    apply_directive, apply_directive_str, apply_format, apply_format_str, Directive,
};
pub use smol_str::SmolStr;
pub use templates::TemplatePreset;
pub use text::{EditorRope, TextBuffer};
pub use text_helpers::{
    continue_list, continue_list_str, detect_list_context, find_line_end, find_line_start,
    ListContext,
};
pub use types::{Applied, Selection};
pub use undo::{UndoManager, UndoableBuffer};
