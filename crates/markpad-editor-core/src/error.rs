//! Error types for editor operations.

/// Contract-violation errors raised by transformation entry points.
///
/// The transformer has no I/O, so the only failure class is a caller
/// supplying offsets that do not describe a valid selection. These fail
/// fast instead of clamping: the host event handlers are expected to pass
/// offsets straight from the input surface, and masking a bad pair would
/// hide a host-side bug.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    /// Selection start is past selection end.
    #[error("selection start {start} is past end {end}")]
    InvertedSelection { start: usize, end: usize },

    /// An offset points past the end of the buffer.
    #[error("offset {offset} is out of bounds for a buffer of {len} chars")]
    OutOfBounds { offset: usize, len: usize },
}

/// Validate a raw `(start, end)` pair against a buffer length.
pub(crate) fn check_selection(start: usize, end: usize, len: usize) -> Result<(), EditError> {
    if start > end {
        return Err(EditError::InvertedSelection { start, end });
    }
    if end > len {
        return Err(EditError::OutOfBounds { offset: end, len });
    }
    Ok(())
}
