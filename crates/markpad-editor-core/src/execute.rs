//! Action execution for editor documents.
//!
//! `execute_action` applies `EditorAction` operations to any type
//! implementing `EditorDocument`. Typing routes through auto-pairing,
//! Enter through list continuation, and formatting through the toggle-wrap
//! engine, so hosts only dispatch semantic actions.

use crate::actions::{EditorAction, KeyCombo, KeydownResult, Keymap, Range};
use crate::autopair::handle_auto_pair;
use crate::document::EditorDocument;
use crate::formatting::{apply_directive, Directive};
use crate::text_helpers::{
    continue_list, find_line_end, find_line_start, find_word_boundary_backward,
    find_word_boundary_forward,
};
use crate::types::Selection;

/// Execute an editor action on a document.
///
/// This is the central dispatch point for all editor operations.
/// Returns true if the action was handled and the document was modified.
pub fn execute_action<D: EditorDocument>(doc: &mut D, action: &EditorAction) -> bool {
    tracing::trace!(?action, "execute");
    match action {
        EditorAction::Insert { text, range } => execute_insert(doc, text, *range),
        EditorAction::InsertParagraph { range } => execute_insert_paragraph(doc, *range),
        EditorAction::TypeKey { key, range } => execute_type_key(doc, *key, *range),
        EditorAction::DeleteBackward { range } => execute_delete_backward(doc, *range),
        EditorAction::DeleteForward { range } => execute_delete_forward(doc, *range),
        EditorAction::DeleteWordBackward { range } => execute_delete_word_backward(doc, *range),
        EditorAction::DeleteWordForward { range } => execute_delete_word_forward(doc, *range),
        EditorAction::DeleteToLineStart { range } => execute_delete_to_line_start(doc, *range),
        EditorAction::DeleteToLineEnd { range } => execute_delete_to_line_end(doc, *range),
        EditorAction::Undo => execute_undo(doc),
        EditorAction::Redo => execute_redo(doc),
        EditorAction::ApplyDirective { directive } => execute_apply_directive(doc, *directive),
        EditorAction::SelectAll => execute_select_all(doc),
        EditorAction::MoveCursor { offset } => execute_move_cursor(doc, *offset),
        EditorAction::ExtendSelection { offset } => execute_extend_selection(doc, *offset),
    }
}

/// Handle a keydown event using the keymap.
///
/// Shortcuts resolve to actions and are executed; navigation and bare
/// modifiers pass through to the host; everything else is the host's
/// default text input path.
pub fn handle_keydown<D: EditorDocument>(
    doc: &mut D,
    keymap: &Keymap,
    combo: &KeyCombo,
    range: Range,
) -> KeydownResult {
    if let Some(action) = keymap.lookup(combo, range) {
        tracing::debug!(?combo, "keymap hit");
        execute_action(doc, &action);
        return KeydownResult::Handled;
    }

    if combo.key.is_navigation() || combo.key.is_modifier() {
        return KeydownResult::PassThrough;
    }

    KeydownResult::NotHandled
}

fn execute_insert<D: EditorDocument>(doc: &mut D, text: &str, range: Range) -> bool {
    let range = range.normalize();

    if range.is_caret() {
        doc.insert(range.start, text);
    } else {
        doc.replace(range.start..range.end, text);
    }

    doc.set_selection(None);
    true
}

fn execute_insert_paragraph<D: EditorDocument>(doc: &mut D, range: Range) -> bool {
    let range = range.normalize();
    let offset = range.start;

    // Delete selection if any.
    if !range.is_caret() {
        doc.delete(offset..range.end);
    }

    match continue_list(doc.buffer_mut(), offset) {
        Ok(Some(new_caret)) => doc.set_cursor_offset(new_caret),
        Ok(None) => doc.insert(offset, "\n"),
        Err(_) => return false,
    }

    doc.set_selection(None);
    true
}

fn execute_type_key<D: EditorDocument>(doc: &mut D, key: char, range: Range) -> bool {
    let range = range.normalize();
    let sel = Selection::new(range.start, range.end);

    match handle_auto_pair(doc.buffer_mut(), sel, key) {
        Ok(Some(new_sel)) => {
            if new_sel.is_collapsed() {
                doc.set_cursor_offset(new_sel.head);
                doc.set_selection(None);
            } else {
                doc.set_cursor_offset(new_sel.end());
                doc.set_selection(Some(new_sel));
            }
            true
        }
        Ok(None) => {
            let mut text = String::new();
            text.push(key);
            execute_insert(doc, &text, range)
        }
        Err(_) => false,
    }
}

fn execute_delete_backward<D: EditorDocument>(doc: &mut D, range: Range) -> bool {
    let range = range.normalize();

    if !range.is_caret() {
        doc.delete(range.start..range.end);
        doc.set_selection(None);
        return true;
    }

    if range.start == 0 {
        return false;
    }

    doc.delete(range.start - 1..range.start);
    doc.set_selection(None);
    true
}

fn execute_delete_forward<D: EditorDocument>(doc: &mut D, range: Range) -> bool {
    let range = range.normalize();

    if !range.is_caret() {
        doc.delete(range.start..range.end);
        doc.set_selection(None);
        return true;
    }

    if range.start >= doc.len_chars() {
        return false;
    }

    doc.delete(range.start..range.start + 1);
    doc.set_selection(None);
    true
}

fn execute_delete_word_backward<D: EditorDocument>(doc: &mut D, range: Range) -> bool {
    let range = range.normalize();

    if !range.is_caret() {
        doc.delete(range.start..range.end);
        doc.set_selection(None);
        return true;
    }

    let cursor = range.start;
    let word_start = find_word_boundary_backward(doc.buffer(), cursor);
    if word_start < cursor {
        doc.delete(word_start..cursor);
    }

    doc.set_selection(None);
    true
}

fn execute_delete_word_forward<D: EditorDocument>(doc: &mut D, range: Range) -> bool {
    let range = range.normalize();

    if !range.is_caret() {
        doc.delete(range.start..range.end);
        doc.set_selection(None);
        return true;
    }

    let cursor = range.start;
    let word_end = find_word_boundary_forward(doc.buffer(), cursor);
    if word_end > cursor {
        doc.delete(cursor..word_end);
    }

    doc.set_selection(None);
    true
}

fn execute_delete_to_line_start<D: EditorDocument>(doc: &mut D, range: Range) -> bool {
    let range = range.normalize();
    let cursor = range.start;
    let line_start = find_line_start(doc.buffer(), cursor);

    if line_start < cursor {
        doc.delete(line_start..cursor);
    }

    doc.set_selection(None);
    true
}

fn execute_delete_to_line_end<D: EditorDocument>(doc: &mut D, range: Range) -> bool {
    let range = range.normalize();
    let cursor = if range.is_caret() {
        range.start
    } else {
        range.end
    };
    let line_end = find_line_end(doc.buffer(), cursor);

    if cursor < line_end {
        doc.delete(cursor..line_end);
    }

    doc.set_selection(None);
    true
}

fn execute_undo<D: EditorDocument>(doc: &mut D) -> bool {
    if doc.undo() {
        let max = doc.len_chars();
        if doc.cursor_offset() > max {
            doc.set_cursor_offset(max);
        }
        doc.set_selection(None);
        true
    } else {
        false
    }
}

fn execute_redo<D: EditorDocument>(doc: &mut D) -> bool {
    if doc.redo() {
        let max = doc.len_chars();
        if doc.cursor_offset() > max {
            doc.set_cursor_offset(max);
        }
        doc.set_selection(None);
        true
    } else {
        false
    }
}

fn execute_apply_directive<D: EditorDocument>(doc: &mut D, directive: Directive) -> bool {
    let sel = doc
        .selection()
        .unwrap_or_else(|| Selection::collapsed(doc.cursor_offset()));

    match apply_directive(doc.buffer_mut(), sel, directive) {
        Ok(new_sel) => {
            doc.set_cursor_offset(new_sel.end());
            doc.set_selection(if new_sel.is_collapsed() {
                None
            } else {
                Some(new_sel)
            });
            true
        }
        Err(_) => false,
    }
}

fn execute_select_all<D: EditorDocument>(doc: &mut D) -> bool {
    let len = doc.len_chars();
    doc.set_selection(Some(Selection::new(0, len)));
    doc.set_cursor_offset(len);
    true
}

fn execute_move_cursor<D: EditorDocument>(doc: &mut D, offset: usize) -> bool {
    let offset = offset.min(doc.len_chars());
    doc.set_cursor_offset(offset);
    doc.set_selection(None);
    true
}

fn execute_extend_selection<D: EditorDocument>(doc: &mut D, offset: usize) -> bool {
    let offset = offset.min(doc.len_chars());
    let anchor = doc
        .selection()
        .map(|s| s.anchor)
        .unwrap_or_else(|| doc.cursor_offset());
    doc.set_selection(Some(Selection::new(anchor, offset)));
    doc.set_cursor_offset(offset);
    true
}
