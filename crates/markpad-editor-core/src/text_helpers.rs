//! Text navigation and analysis helpers.
//!
//! Line and word boundary scanning over a `TextBuffer`, plus markdown list
//! detection and the Enter-key list continuation entry point.

use crate::error::{check_selection, EditError};
use crate::text::{EditorRope, TextBuffer};
use crate::types::Applied;

/// Find start of line containing offset.
pub fn find_line_start<B: TextBuffer>(buf: &B, offset: usize) -> usize {
    if offset == 0 {
        return 0;
    }

    let mut pos = offset;
    while pos > 0 {
        if let Some('\n') = buf.char_at(pos - 1) {
            return pos;
        }
        pos -= 1;
    }
    0
}

/// Find end of line containing offset (position of newline or end of buffer).
pub fn find_line_end<B: TextBuffer>(buf: &B, offset: usize) -> usize {
    let len = buf.len_chars();
    if offset >= len {
        return len;
    }

    let mut pos = offset;
    while pos < len {
        if let Some('\n') = buf.char_at(pos) {
            return pos;
        }
        pos += 1;
    }
    len
}

/// Find word boundary backward from cursor.
pub fn find_word_boundary_backward<B: TextBuffer>(buf: &B, cursor: usize) -> usize {
    if cursor == 0 {
        return 0;
    }

    let mut pos = cursor;

    // Skip any whitespace/punctuation immediately before cursor.
    while pos > 0 {
        match buf.char_at(pos - 1) {
            Some(c) if c.is_alphanumeric() || c == '_' => break,
            Some(_) => pos -= 1,
            None => break,
        }
    }

    // Skip the word characters.
    while pos > 0 {
        match buf.char_at(pos - 1) {
            Some(c) if c.is_alphanumeric() || c == '_' => pos -= 1,
            _ => break,
        }
    }

    pos
}

/// Find word boundary forward from cursor.
pub fn find_word_boundary_forward<B: TextBuffer>(buf: &B, cursor: usize) -> usize {
    let len = buf.len_chars();
    if cursor >= len {
        return len;
    }

    let mut pos = cursor;

    // Skip word characters first.
    while pos < len {
        match buf.char_at(pos) {
            Some(c) if c.is_alphanumeric() || c == '_' => pos += 1,
            _ => break,
        }
    }

    // Then skip whitespace/punctuation.
    while pos < len {
        match buf.char_at(pos) {
            Some(c) if c.is_alphanumeric() || c == '_' => break,
            Some(_) => pos += 1,
            None => break,
        }
    }

    pos
}

/// Describes what kind of list item the caret is in, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListContext {
    /// Unordered list with the given marker char ('-', '*' or '+') and indentation.
    Unordered { indent: String, marker: char },
    /// Ordered list with the current number and indentation.
    Ordered { indent: String, number: usize },
}

impl ListContext {
    /// The text inserted on Enter to continue this list on the next line.
    pub fn continuation(&self) -> String {
        match self {
            Self::Unordered { indent, marker } => format!("\n{indent}{marker} "),
            Self::Ordered { indent, number } => format!("\n{indent}{}. ", number + 1),
        }
    }
}

/// Detect whether the text before the caret starts a list item.
///
/// Only the current line *up to the caret* is inspected: pressing Enter in
/// the middle of a line continues the list based on what precedes the
/// break, the remainder moves to the new line untouched.
pub fn detect_list_context<B: TextBuffer>(buf: &B, caret: usize) -> Option<ListContext> {
    let line_start = find_line_start(buf, caret);
    if line_start >= caret {
        return None;
    }

    let line = buf.slice(line_start..caret)?;
    parse_list_marker(&line)
}

fn parse_list_marker(line: &str) -> Option<ListContext> {
    let indent: String = line
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .collect();
    let trimmed = &line[indent.len()..];

    // Unordered markers: "- ", "* ", "+ ".
    for marker in ['-', '*', '+'] {
        if trimmed.starts_with(marker) && trimmed[1..].starts_with(' ') {
            return Some(ListContext::Unordered { indent, marker });
        }
    }

    // Ordered marker: "1. ", "2. ", etc.
    if let Some(dot_pos) = trimmed.find(". ") {
        let num_part = &trimmed[..dot_pos];
        if !num_part.is_empty() && num_part.chars().all(|c| c.is_ascii_digit()) {
            // A digit run too long for usize is not a list item.
            if let Ok(number) = num_part.parse::<usize>() {
                return Some(ListContext::Ordered { indent, number });
            }
        }
    }

    None
}

/// Continue a markdown list on Enter.
///
/// If the line before `caret` is a list item, inserts the continuation
/// (newline, same indent, next marker) and returns the new caret position.
/// Returns `Ok(None)` when the line is not a list item and default Enter
/// behavior should apply.
pub fn continue_list<B: TextBuffer>(buf: &mut B, caret: usize) -> Result<Option<usize>, EditError> {
    let len = buf.len_chars();
    if caret > len {
        return Err(EditError::OutOfBounds { offset: caret, len });
    }

    let Some(ctx) = detect_list_context(buf, caret) else {
        return Ok(None);
    };

    let continuation = ctx.continuation();
    let inserted = continuation.chars().count();
    buf.insert(caret, &continuation);
    Ok(Some(caret + inserted))
}

/// String-level form of [`continue_list`], for hosts that hold the buffer
/// as a plain string. Offsets are character offsets.
pub fn continue_list_str(text: &str, caret: usize) -> Result<Option<Applied>, EditError> {
    check_selection(caret, caret, text.chars().count())?;

    let mut rope = EditorRope::from_str(text);
    Ok(continue_list(&mut rope, caret)?.map(|new_caret| Applied {
        text: rope.to_string(),
        start: new_caret,
        end: new_caret,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_buf(content: &str) -> EditorRope {
        EditorRope::from_str(content)
    }

    #[test]
    fn test_find_line_start() {
        let buf = make_buf("hello\nworld\ntest");

        assert_eq!(find_line_start(&buf, 0), 0);
        assert_eq!(find_line_start(&buf, 3), 0);
        assert_eq!(find_line_start(&buf, 5), 0); // at newline
        assert_eq!(find_line_start(&buf, 6), 6); // start of "world"
        assert_eq!(find_line_start(&buf, 8), 6);
        assert_eq!(find_line_start(&buf, 12), 12); // start of "test"
    }

    #[test]
    fn test_find_line_end() {
        let buf = make_buf("hello\nworld\ntest");

        assert_eq!(find_line_end(&buf, 0), 5);
        assert_eq!(find_line_end(&buf, 3), 5);
        assert_eq!(find_line_end(&buf, 6), 11);
        assert_eq!(find_line_end(&buf, 12), 16);
    }

    #[test]
    fn test_find_word_boundary_backward() {
        let buf = make_buf("hello world test");

        assert_eq!(find_word_boundary_backward(&buf, 16), 12); // from end
        assert_eq!(find_word_boundary_backward(&buf, 12), 6); // from "test"
        assert_eq!(find_word_boundary_backward(&buf, 11), 6); // from space before "test"
        assert_eq!(find_word_boundary_backward(&buf, 5), 0); // from end of "hello"
    }

    #[test]
    fn test_find_word_boundary_forward() {
        let buf = make_buf("hello world test");

        assert_eq!(find_word_boundary_forward(&buf, 0), 6); // from start
        assert_eq!(find_word_boundary_forward(&buf, 6), 12); // from space
        assert_eq!(find_word_boundary_forward(&buf, 12), 16); // from "test"
    }

    #[test]
    fn test_detect_list_context_unordered() {
        let buf = make_buf("- item one\n* item two\n+ item three");

        let ctx = detect_list_context(&buf, 5);
        assert!(matches!(
            ctx,
            Some(ListContext::Unordered { marker: '-', .. })
        ));

        let ctx = detect_list_context(&buf, 16);
        assert!(matches!(
            ctx,
            Some(ListContext::Unordered { marker: '*', .. })
        ));

        let ctx = detect_list_context(&buf, 28);
        assert!(matches!(
            ctx,
            Some(ListContext::Unordered { marker: '+', .. })
        ));
    }

    #[test]
    fn test_detect_list_context_ordered() {
        let buf = make_buf("1. first\n12. second");

        let ctx = detect_list_context(&buf, 5);
        assert!(matches!(ctx, Some(ListContext::Ordered { number: 1, .. })));

        let ctx = detect_list_context(&buf, 15);
        assert!(matches!(ctx, Some(ListContext::Ordered { number: 12, .. })));
    }

    #[test]
    fn test_detect_list_context_indented() {
        let buf = make_buf("  - nested item");

        match detect_list_context(&buf, 10) {
            Some(ListContext::Unordered { indent, marker }) => {
                assert_eq!(indent, "  ");
                assert_eq!(marker, '-');
            }
            other => panic!("expected unordered context, got {other:?}"),
        }
    }

    #[test]
    fn test_detect_list_context_only_before_caret() {
        // Caret inside the indent: no marker seen yet, no list context.
        let buf = make_buf("- item");
        assert_eq!(detect_list_context(&buf, 1), None);
        assert_eq!(detect_list_context(&buf, 0), None);
    }

    #[test]
    fn test_detect_list_context_plain_text() {
        let buf = make_buf("not a list\n-dash without space");
        assert_eq!(detect_list_context(&buf, 8), None);
        assert_eq!(detect_list_context(&buf, 25), None);
    }

    #[test]
    fn test_detect_list_context_overflowing_number() {
        let buf = make_buf("99999999999999999999999999. huge");
        assert_eq!(detect_list_context(&buf, 30), None);
    }

    #[test]
    fn test_continue_list_ordered() {
        // "1. first", caret at end of line -> "1. first\n2. ", caret 12.
        let result = continue_list_str("1. first", 8).unwrap().unwrap();
        assert_eq!(result.text, "1. first\n2. ");
        assert_eq!(result.start, 12);
        assert_eq!(result.end, 12);
    }

    #[test]
    fn test_continue_list_unordered() {
        let result = continue_list_str("- item", 6).unwrap().unwrap();
        assert_eq!(result.text, "- item\n- ");
        assert_eq!(result.start, 9);
    }

    #[test]
    fn test_continue_list_keeps_indent() {
        let result = continue_list_str("  * deep", 8).unwrap().unwrap();
        assert_eq!(result.text, "  * deep\n  * ");
        assert_eq!(result.start, 13);
    }

    #[test]
    fn test_continue_list_mid_line() {
        // Only the text before the caret decides; the tail stays in place.
        let result = continue_list_str("2. one two", 6).unwrap().unwrap();
        assert_eq!(result.text, "2. one\n3.  two");
        assert_eq!(result.start, 10);
    }

    #[test]
    fn test_continue_list_not_a_list() {
        assert_eq!(continue_list_str("plain text", 5).unwrap(), None);
        assert_eq!(continue_list_str("", 0).unwrap(), None);
    }

    #[test]
    fn test_continue_list_out_of_bounds() {
        assert_eq!(
            continue_list_str("abc", 4),
            Err(EditError::OutOfBounds { offset: 4, len: 3 })
        );
    }
}
