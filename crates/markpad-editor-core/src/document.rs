//! Core editor document trait and implementations.
//!
//! Defines the `EditorDocument` trait for abstracting editor state, so the
//! same editing logic runs against plain-field storage, reactive wrappers,
//! or test doubles. The transformation engine itself stays stateless; this
//! layer is the host-side convenience that keeps cursor and selection
//! consistent with buffer edits.

use std::ops::Range;

use smol_str::SmolStr;

use crate::text::TextBuffer;
use crate::types::Selection;
use crate::undo::UndoManager;

/// Core trait for editor documents.
///
/// The trait is generic over the buffer type, which must implement both
/// `TextBuffer` (for text operations) and `UndoManager` (for undo/redo).
pub trait EditorDocument {
    /// The buffer type used for text storage and undo.
    type Buffer: TextBuffer + UndoManager;

    // === Required: Buffer access ===

    /// Get a reference to the underlying buffer.
    fn buffer(&self) -> &Self::Buffer;

    /// Get a mutable reference to the underlying buffer.
    fn buffer_mut(&mut self) -> &mut Self::Buffer;

    // === Required: Cursor/selection state ===

    /// Get the cursor offset (in chars).
    fn cursor_offset(&self) -> usize;

    /// Set the cursor offset.
    fn set_cursor_offset(&mut self, offset: usize);

    /// Get the current selection, if any.
    fn selection(&self) -> Option<Selection>;

    /// Set the selection.
    fn set_selection(&mut self, selection: Option<Selection>);

    // === Provided: Convenience accessors ===

    /// Get the full content as a String.
    fn content_string(&self) -> String {
        self.buffer().to_string()
    }

    /// Get length in characters.
    fn len_chars(&self) -> usize {
        self.buffer().len_chars()
    }

    /// Check if document is empty.
    fn is_empty(&self) -> bool {
        self.buffer().len_chars() == 0
    }

    /// Get a slice of the content.
    fn slice(&self, range: Range<usize>) -> Option<SmolStr> {
        self.buffer().slice(range)
    }

    /// Get character at offset.
    fn char_at(&self, offset: usize) -> Option<char> {
        self.buffer().char_at(offset)
    }

    /// Get selected text, if any.
    fn selected_text(&self) -> Option<SmolStr> {
        self.selection()
            .and_then(|sel| self.buffer().slice(sel.to_range()))
    }

    // === Provided: Text operations ===

    /// Insert text at char offset, placing the cursor after it.
    fn insert(&mut self, offset: usize, text: &str) {
        self.buffer_mut().insert(offset, text);
        self.set_cursor_offset(offset + text.chars().count());
    }

    /// Delete char range, placing the cursor at its start.
    fn delete(&mut self, range: Range<usize>) {
        let start = range.start;
        self.buffer_mut().delete(range);
        self.set_cursor_offset(start);
    }

    /// Replace char range with text, placing the cursor after the text.
    fn replace(&mut self, range: Range<usize>, text: &str) {
        let start = range.start;
        self.buffer_mut().delete(range);
        self.buffer_mut().insert(start, text);
        self.set_cursor_offset(start + text.chars().count());
    }

    /// Delete the current selection, if any. Returns true if text was removed.
    fn delete_selection(&mut self) -> bool {
        let Some(sel) = self.selection() else {
            return false;
        };
        self.set_selection(None);
        if sel.is_collapsed() {
            return false;
        }
        self.delete(sel.to_range());
        true
    }

    // === Provided: Undo/Redo ===

    fn undo(&mut self) -> bool {
        self.buffer_mut().undo()
    }

    fn redo(&mut self) -> bool {
        self.buffer_mut().redo()
    }

    fn can_undo(&self) -> bool {
        self.buffer().can_undo()
    }

    fn can_redo(&self) -> bool {
        self.buffer().can_redo()
    }

    fn clear_history(&mut self) {
        self.buffer_mut().clear_history();
    }
}

/// Simple field-based implementation of EditorDocument.
///
/// Stores cursor and selection as plain fields. Use this for non-reactive
/// hosts or as a base for testing.
#[derive(Clone)]
pub struct PlainEditor<T: TextBuffer + UndoManager> {
    buffer: T,
    cursor_offset: usize,
    selection: Option<Selection>,
}

impl<T: TextBuffer + UndoManager + Default> Default for PlainEditor<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: TextBuffer + UndoManager> PlainEditor<T> {
    /// Create a new editor with the given buffer.
    pub fn new(buffer: T) -> Self {
        Self {
            buffer,
            cursor_offset: 0,
            selection: None,
        }
    }

    /// Get direct access to the inner buffer (bypasses trait).
    pub fn inner(&self) -> &T {
        &self.buffer
    }

    /// Get direct mutable access to the inner buffer (bypasses trait).
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.buffer
    }
}

impl<T: TextBuffer + UndoManager> EditorDocument for PlainEditor<T> {
    type Buffer = T;

    fn buffer(&self) -> &Self::Buffer {
        &self.buffer
    }

    fn buffer_mut(&mut self) -> &mut Self::Buffer {
        &mut self.buffer
    }

    fn cursor_offset(&self) -> usize {
        self.cursor_offset
    }

    fn set_cursor_offset(&mut self, offset: usize) {
        self.cursor_offset = offset;
    }

    fn selection(&self) -> Option<Selection> {
        self.selection
    }

    fn set_selection(&mut self, selection: Option<Selection>) {
        self.selection = selection;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::EditorRope;
    use crate::undo::UndoableBuffer;

    type TestEditor = PlainEditor<UndoableBuffer<EditorRope>>;

    fn make_editor(content: &str) -> TestEditor {
        let rope = EditorRope::from_str(content);
        let buf = UndoableBuffer::new(rope, 100);
        PlainEditor::new(buf)
    }

    #[test]
    fn test_basic_insert() {
        let mut editor = make_editor("hello");
        assert_eq!(editor.content_string(), "hello");

        editor.insert(5, " world");
        assert_eq!(editor.content_string(), "hello world");
        assert_eq!(editor.cursor_offset(), 11);
    }

    #[test]
    fn test_delete() {
        let mut editor = make_editor("hello world");

        editor.delete(5..11);
        assert_eq!(editor.content_string(), "hello");
        assert_eq!(editor.cursor_offset(), 5);
    }

    #[test]
    fn test_replace() {
        let mut editor = make_editor("hello world");

        editor.replace(6..11, "rust");
        assert_eq!(editor.content_string(), "hello rust");
        assert_eq!(editor.cursor_offset(), 10);
    }

    #[test]
    fn test_undo_redo() {
        let mut editor = make_editor("hello");

        editor.insert(5, " world");
        assert_eq!(editor.content_string(), "hello world");

        assert!(editor.undo());
        assert_eq!(editor.content_string(), "hello");

        assert!(editor.redo());
        assert_eq!(editor.content_string(), "hello world");
    }

    #[test]
    fn test_selection() {
        let mut editor = make_editor("hello world");

        editor.set_selection(Some(Selection::new(0, 5)));
        assert_eq!(editor.selected_text(), Some("hello".into()));

        assert!(editor.delete_selection());
        assert_eq!(editor.content_string(), " world");
        assert!(editor.selection().is_none());
    }

    #[test]
    fn test_collapsed_selection_deletes_nothing() {
        let mut editor = make_editor("hello");
        editor.set_selection(Some(Selection::collapsed(2)));
        assert!(!editor.delete_selection());
        assert_eq!(editor.content_string(), "hello");
    }

    #[test]
    fn test_cursor_follows_multibyte_insert() {
        let mut editor = make_editor("héllo");
        editor.insert(5, " wörld");
        // Char offsets, not bytes.
        assert_eq!(editor.cursor_offset(), 11);
    }
}
