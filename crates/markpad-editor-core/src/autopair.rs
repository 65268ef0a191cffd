//! Bracket and quote auto-completion.
//!
//! Invoked on a raw keystroke before the character reaches the buffer. The
//! handler either intercepts the key (inserting a matched pair, surrounding
//! the selection, or skipping over an existing closer) or declines, in
//! which case the host lets default insertion proceed.

use crate::error::{check_selection, EditError};
use crate::text::{EditorRope, TextBuffer};
use crate::types::{Applied, Selection};

/// Opening characters and their matching closers.
pub const COMPLETION_PAIRS: [(char, char); 5] = [
    ('(', ')'),
    ('[', ']'),
    ('{', '}'),
    ('"', '"'),
    ('\'', '\''),
];

/// Closers eligible for skip-over. Quotes are excluded: opener and closer
/// are the same character, and the not-already-closed check on insertion
/// covers them.
const SKIP_OVER_CLOSERS: [char; 3] = [')', ']', '}'];

/// Look up the matching closer for an opening character.
pub fn closing_for(open: char) -> Option<char> {
    COMPLETION_PAIRS
        .iter()
        .find(|(o, _)| *o == open)
        .map(|(_, c)| *c)
}

fn is_skip_over_closer(ch: char) -> bool {
    SKIP_OVER_CLOSERS.contains(&ch)
}

/// Decide whether a keystroke is intercepted by auto-completion.
///
/// Rules, in priority order:
/// 1. Opening char, caret only, next char is not already the closer:
///    insert the pair, caret lands between the two characters.
/// 2. Opening char with a selection: surround the selection, keeping the
///    wrapped text selected (one char wider on each side).
/// 3. Closing char (`)`, `]`, `}`), caret only, next char equals it: skip
///    over instead of duplicating; the buffer is untouched.
/// 4. Anything else: not intercepted, `Ok(None)`.
pub fn handle_auto_pair<B: TextBuffer>(
    buf: &mut B,
    selection: Selection,
    key: char,
) -> Result<Option<Selection>, EditError> {
    let (start, end) = (selection.start(), selection.end());
    let len = buf.len_chars();
    if end > len {
        return Err(EditError::OutOfBounds { offset: end, len });
    }

    if let Some(closer) = closing_for(key) {
        if !selection.is_collapsed() {
            // Surround-selection-on-type.
            buf.insert(end, closer.encode_utf8(&mut [0; 4]));
            buf.insert(start, key.encode_utf8(&mut [0; 4]));
            return Ok(Some(Selection::new(start, end + 2)));
        }

        if buf.char_at(start) != Some(closer) {
            let mut pair = String::new();
            pair.push(key);
            pair.push(closer);
            buf.insert(start, &pair);
            return Ok(Some(Selection::collapsed(start + 1)));
        }

        // The caret already sits before the matching closer: default
        // insertion proceeds, avoiding a double close.
        return Ok(None);
    }

    if selection.is_collapsed() && is_skip_over_closer(key) && buf.char_at(start) == Some(key) {
        return Ok(Some(Selection::collapsed(start + 1)));
    }

    Ok(None)
}

/// String-level form of [`handle_auto_pair`]. Offsets are character
/// offsets; `Ok(None)` means the host should insert the key normally.
pub fn handle_auto_pair_str(
    text: &str,
    start: usize,
    end: usize,
    key: char,
) -> Result<Option<Applied>, EditError> {
    check_selection(start, end, text.chars().count())?;

    let mut rope = EditorRope::from_str(text);
    Ok(
        handle_auto_pair(&mut rope, Selection::new(start, end), key)?.map(|sel| Applied {
            text: rope.to_string(),
            start: sel.start(),
            end: sel.end(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_pair_at_caret() {
        let result = handle_auto_pair_str("foo", 3, 3, '(').unwrap().unwrap();
        assert_eq!(result.text, "foo()");
        assert_eq!((result.start, result.end), (4, 4));
    }

    #[test]
    fn test_insert_pair_mid_text() {
        let result = handle_auto_pair_str("ab", 1, 1, '[').unwrap().unwrap();
        assert_eq!(result.text, "a[]b");
        assert_eq!((result.start, result.end), (2, 2));
    }

    #[test]
    fn test_skip_over_existing_closer() {
        // Caret between the parens; typing ')' moves past it.
        let result = handle_auto_pair_str("foo()", 4, 4, ')').unwrap().unwrap();
        assert_eq!(result.text, "foo()");
        assert_eq!((result.start, result.end), (5, 5));
    }

    #[test]
    fn test_no_double_close_before_existing_closer() {
        // Typing '(' right before ')': default insertion proceeds.
        assert_eq!(handle_auto_pair_str("foo)", 3, 3, '(').unwrap(), None);
    }

    #[test]
    fn test_surround_selection() {
        let result = handle_auto_pair_str("pick me", 0, 4, '(').unwrap().unwrap();
        assert_eq!(result.text, "(pick) me");
        assert_eq!((result.start, result.end), (0, 6));
    }

    #[test]
    fn test_surround_selection_with_quotes() {
        let result = handle_auto_pair_str("word", 0, 4, '"').unwrap().unwrap();
        assert_eq!(result.text, "\"word\"");
        assert_eq!((result.start, result.end), (0, 6));
    }

    #[test]
    fn test_quote_before_quote_not_intercepted() {
        // Symmetric pairs rely on the not-already-closed check; a quote
        // right before an identical quote falls through to default.
        assert_eq!(handle_auto_pair_str("\"", 0, 0, '"').unwrap(), None);
    }

    #[test]
    fn test_closer_with_selection_not_intercepted() {
        assert_eq!(handle_auto_pair_str("foo)", 0, 3, ')').unwrap(), None);
    }

    #[test]
    fn test_ordinary_key_not_intercepted() {
        assert_eq!(handle_auto_pair_str("foo", 3, 3, 'x').unwrap(), None);
        assert_eq!(handle_auto_pair_str("foo", 3, 3, '\n').unwrap(), None);
    }

    #[test]
    fn test_closer_without_match_ahead_not_intercepted() {
        assert_eq!(handle_auto_pair_str("foo", 3, 3, ')').unwrap(), None);
        assert_eq!(handle_auto_pair_str("(a)", 1, 1, ')').unwrap(), None);
    }

    #[test]
    fn test_multibyte_neighbors() {
        let result = handle_auto_pair_str("héllo", 4, 4, '{').unwrap().unwrap();
        assert_eq!(result.text, "héll{}o");
        assert_eq!((result.start, result.end), (5, 5));
    }

    #[test]
    fn test_invalid_selection_fails_fast() {
        assert_eq!(
            handle_auto_pair_str("abc", 3, 2, '('),
            Err(EditError::InvertedSelection { start: 3, end: 2 })
        );
        assert_eq!(
            handle_auto_pair_str("abc", 0, 9, '('),
            Err(EditError::OutOfBounds { offset: 9, len: 3 })
        );
    }
}
