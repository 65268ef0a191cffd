//! The toolbar formatting engine.
//!
//! `Directive` is the closed set of formatting operations the toolbar and
//! keymap can trigger, each reduced to a prefix/suffix string pair.
//! `apply_format` is the toggle-wrap engine: it either wraps the selection
//! in the markers or, when the selection already carries them, strips them
//! off again, so every formatting button behaves as an on/off switch.

use serde::{Deserialize, Serialize};

use crate::error::{check_selection, EditError};
use crate::text::{EditorRope, TextBuffer};
use crate::types::{Applied, Selection};

/// Fixed table block inserted by [`Directive::Table`].
const TABLE_SKELETON: &str =
    "| Header 1 | Header 2 |\n|------------|------------|\n| Content 1 | Content 2 |";

/// A formatting operation, reduced to the marker text it inserts.
///
/// Line-anchored directives (heading, quote, list markers) have a prefix
/// ending in a space and an empty suffix; wrapping directives carry the
/// same marker on both sides. `Link` and `Image` are asymmetric and never
/// toggle off in practice, since `](url)` does not occur as a selection
/// suffix in ordinary text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Directive {
    Heading1,
    Heading2,
    Heading3,
    Bold,
    Italic,
    Strikethrough,
    Code,
    CodeBlock,
    Link,
    Image,
    Quote,
    BulletList,
    NumberedList,
    Table,
}

impl Directive {
    /// Marker inserted before the selection.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Heading1 => "# ",
            Self::Heading2 => "## ",
            Self::Heading3 => "### ",
            Self::Bold => "**",
            Self::Italic => "*",
            Self::Strikethrough => "~~",
            Self::Code => "`",
            Self::CodeBlock => "\n```\n",
            Self::Link => "[",
            Self::Image => "![",
            Self::Quote => "> ",
            Self::BulletList => "- ",
            Self::NumberedList => "1. ",
            Self::Table => TABLE_SKELETON,
        }
    }

    /// Marker inserted after the selection.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Heading1
            | Self::Heading2
            | Self::Heading3
            | Self::Quote
            | Self::BulletList
            | Self::NumberedList
            | Self::Table => "",
            Self::Bold => "**",
            Self::Italic => "*",
            Self::Strikethrough => "~~",
            Self::Code => "`",
            Self::CodeBlock => "\n```",
            Self::Link | Self::Image => "](url)",
        }
    }
}

/// Apply a prefix/suffix formatting pair to the selection, toggling.
///
/// If the selected text already starts with `prefix` and ends with `suffix`
/// (and is long enough to contain both), the markers are stripped and the
/// selection collapses onto the unwrapped text. Otherwise the markers are
/// inserted around the selection and the selection shifts past the prefix.
///
/// Line-anchored prefixes (ending in a space) get a `\n` prepended when the
/// insertion point is not at the start of a line, so block markers always
/// open a fresh line.
///
/// Returns the new selection; the buffer is edited in place.
pub fn apply_format<B: TextBuffer>(
    buf: &mut B,
    selection: Selection,
    prefix: &str,
    suffix: &str,
) -> Result<Selection, EditError> {
    let (start, end) = (selection.start(), selection.end());
    let len = buf.len_chars();
    if end > len {
        return Err(EditError::OutOfBounds { offset: end, len });
    }

    let Some(selected) = buf.slice(start..end) else {
        return Err(EditError::OutOfBounds { offset: end, len });
    };

    let prefix_chars = prefix.chars().count();
    let suffix_chars = suffix.chars().count();
    let selected_chars = end - start;

    // Toggle-off before apply: a formatting button acts as an on/off
    // switch. The length guard keeps symmetric markers from extracting a
    // negative-length remainder out of a too-short selection.
    let already_formatted = selected.starts_with(prefix)
        && selected.ends_with(suffix)
        && selected_chars >= prefix_chars + suffix_chars;

    if already_formatted {
        // starts_with/ends_with guarantee the byte boundaries line up.
        let inner = &selected[prefix.len()..selected.len() - suffix.len()];
        let inner_chars = selected_chars - prefix_chars - suffix_chars;
        tracing::trace!(prefix, "format toggle-off");
        buf.replace(start..end, inner);
        return Ok(Selection::new(start, start + inner_chars));
    }

    // Line-anchored markers must begin a fresh line.
    let line_anchored = prefix.ends_with(' ');
    let at_line_start = start == 0 || buf.char_at(start - 1) == Some('\n');
    let needs_newline = line_anchored && !at_line_start;

    let final_prefix = if needs_newline {
        format!("\n{prefix}")
    } else {
        prefix.to_owned()
    };
    let shift = prefix_chars + usize::from(needs_newline);

    // Insert the suffix first so `start` stays valid.
    buf.insert(end, suffix);
    buf.insert(start, &final_prefix);

    Ok(Selection::new(start + shift, end + shift))
}

/// Apply a [`Directive`] to the selection, toggling. See [`apply_format`].
pub fn apply_directive<B: TextBuffer>(
    buf: &mut B,
    selection: Selection,
    directive: Directive,
) -> Result<Selection, EditError> {
    apply_format(buf, selection, directive.prefix(), directive.suffix())
}

/// String-level form of [`apply_format`], for hosts that hold the buffer as
/// a plain string. Offsets are character offsets and must satisfy
/// `start <= end <= len`.
pub fn apply_format_str(
    text: &str,
    start: usize,
    end: usize,
    prefix: &str,
    suffix: &str,
) -> Result<Applied, EditError> {
    check_selection(start, end, text.chars().count())?;

    let mut rope = EditorRope::from_str(text);
    let sel = apply_format(&mut rope, Selection::new(start, end), prefix, suffix)?;
    Ok(Applied {
        text: rope.to_string(),
        start: sel.start(),
        end: sel.end(),
    })
}

/// String-level form of [`apply_directive`].
pub fn apply_directive_str(
    text: &str,
    start: usize,
    end: usize,
    directive: Directive,
) -> Result<Applied, EditError> {
    apply_format_str(text, start, end, directive.prefix(), directive.suffix())
}
