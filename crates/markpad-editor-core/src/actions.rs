//! Editor actions and input types.
//!
//! Platform-agnostic definitions for editor operations. `EditorAction`
//! represents semantic editing operations decoupled from how they were
//! triggered (toolbar click, keyboard shortcut, programmatic call), and the
//! `Key`/`Modifiers`/`KeyCombo` types describe keyboard input the same way
//! across hosts. `Keymap` binds combos to actions and is serializable so
//! hosts can persist user-customized bindings.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::formatting::Directive;

/// A range in the document, measured in character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Normalize range so start <= end.
    pub fn normalize(self) -> Self {
        if self.start <= self.end {
            self
        } else {
            Self {
                start: self.end,
                end: self.start,
            }
        }
    }
}

impl From<std::ops::Range<usize>> for Range {
    fn from(r: std::ops::Range<usize>) -> Self {
        Self::new(r.start, r.end)
    }
}

impl From<Range> for std::ops::Range<usize> {
    fn from(r: Range) -> Self {
        r.start..r.end
    }
}

/// All possible editor actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditorAction {
    // === Text Insertion ===
    /// Insert text at the given range (replacing any selected content).
    Insert { text: String, range: Range },

    /// Insert a paragraph break (Enter), continuing lists.
    InsertParagraph { range: Range },

    /// A raw printable keystroke, routed through auto-pairing first.
    TypeKey { key: char, range: Range },

    // === Deletion ===
    /// Delete content backward (Backspace).
    DeleteBackward { range: Range },

    /// Delete content forward (Delete key).
    DeleteForward { range: Range },

    /// Delete word backward (Ctrl/Alt+Backspace).
    DeleteWordBackward { range: Range },

    /// Delete word forward (Ctrl/Alt+Delete).
    DeleteWordForward { range: Range },

    /// Delete to start of line (Cmd+Backspace on Mac).
    DeleteToLineStart { range: Range },

    /// Delete to end of line (Cmd+Delete on Mac).
    DeleteToLineEnd { range: Range },

    // === History ===
    /// Undo the last change.
    Undo,

    /// Redo the last undone change.
    Redo,

    // === Formatting ===
    /// Apply a formatting directive to the selection, toggling.
    ApplyDirective { directive: Directive },

    // === Selection ===
    /// Select all content.
    SelectAll,

    /// Move cursor to position.
    MoveCursor { offset: usize },

    /// Extend selection to position.
    ExtendSelection { offset: usize },
}

impl EditorAction {
    /// Update the range in actions that use one.
    pub fn with_range(self, range: Range) -> Self {
        match self {
            Self::Insert { text, .. } => Self::Insert { text, range },
            Self::InsertParagraph { .. } => Self::InsertParagraph { range },
            Self::TypeKey { key, .. } => Self::TypeKey { key, range },
            Self::DeleteBackward { .. } => Self::DeleteBackward { range },
            Self::DeleteForward { .. } => Self::DeleteForward { range },
            Self::DeleteWordBackward { .. } => Self::DeleteWordBackward { range },
            Self::DeleteWordForward { .. } => Self::DeleteWordForward { range },
            Self::DeleteToLineStart { .. } => Self::DeleteToLineStart { range },
            Self::DeleteToLineEnd { .. } => Self::DeleteToLineEnd { range },
            other => other,
        }
    }
}

/// Key values for keyboard input.
///
/// Platform-agnostic key representation. Platform-specific code converts
/// from native key events to this enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// A character key.
    Character(SmolStr),

    /// Unknown/unidentified key.
    Unidentified,

    // === Whitespace / editing ===
    Backspace,
    Delete,
    Enter,
    Tab,
    Escape,
    Space,

    // === Navigation ===
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    PageUp,
    PageDown,

    // === Modifiers ===
    Alt,
    CapsLock,
    Control,
    Meta,
    Shift,

    // === Function keys ===
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,

    // === Clipboard / editing commands ===
    Copy,
    Cut,
    Paste,
    Undo,
    Redo,
}

impl Key {
    /// Create a character key.
    pub fn character(s: impl Into<SmolStr>) -> Self {
        Self::Character(s.into())
    }

    /// Check if this is a navigation key.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::ArrowLeft
                | Self::ArrowRight
                | Self::ArrowUp
                | Self::ArrowDown
                | Self::Home
                | Self::End
                | Self::PageUp
                | Self::PageDown
        )
    }

    /// Check if this is a modifier key.
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            Self::Alt | Self::CapsLock | Self::Control | Self::Meta | Self::Shift
        )
    }
}

/// Modifier key state for a key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const ALT: Self = Self {
        ctrl: false,
        alt: true,
        shift: false,
        meta: false,
    };

    pub const SHIFT: Self = Self {
        ctrl: false,
        alt: false,
        shift: true,
        meta: false,
    };

    pub const META: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: true,
    };

    pub const CTRL_SHIFT: Self = Self {
        ctrl: true,
        alt: false,
        shift: true,
        meta: false,
    };

    pub const META_SHIFT: Self = Self {
        ctrl: false,
        alt: false,
        shift: true,
        meta: true,
    };

    /// Get the primary modifier for the platform (Cmd on Mac, Ctrl elsewhere).
    pub fn primary(is_mac: bool) -> Self {
        if is_mac { Self::META } else { Self::CTRL }
    }

    /// Get the primary modifier + Shift for the platform.
    pub fn primary_shift(is_mac: bool) -> Self {
        if is_mac {
            Self::META_SHIFT
        } else {
            Self::CTRL_SHIFT
        }
    }
}

/// A key combination for triggering an action.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyCombo {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyCombo {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn ctrl(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::CTRL,
        }
    }

    pub fn meta(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::META,
        }
    }

    pub fn shift(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::SHIFT,
        }
    }

    pub fn primary(key: Key, is_mac: bool) -> Self {
        Self {
            key,
            modifiers: Modifiers::primary(is_mac),
        }
    }

    pub fn primary_shift(key: Key, is_mac: bool) -> Self {
        Self {
            key,
            modifiers: Modifiers::primary_shift(is_mac),
        }
    }
}

/// Result of handling a keydown event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeydownResult {
    /// Event was handled, prevent default.
    Handled,
    /// Event was not a keybinding, let platform handle it.
    NotHandled,
    /// Event should be passed through (navigation, etc.).
    PassThrough,
}

/// Mapping from key combinations to editor actions.
///
/// Stored as an ordered binding list rather than a map so it serializes
/// cleanly (JSON has no compound keys). Lookups are linear; realistic maps
/// hold a handful of entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Keymap {
    bindings: Vec<(KeyCombo, EditorAction)>,
}

impl Keymap {
    /// Create an empty keymap.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Bind a combo to an action, replacing any existing binding for it.
    pub fn bind(&mut self, combo: KeyCombo, action: EditorAction) {
        if let Some(existing) = self.bindings.iter_mut().find(|(c, _)| *c == combo) {
            existing.1 = action;
        } else {
            self.bindings.push((combo, action));
        }
    }

    /// Remove the binding for a combo, if any.
    pub fn unbind(&mut self, combo: &KeyCombo) {
        self.bindings.retain(|(c, _)| c != combo);
    }

    /// Look up the action for a combo, parameterized with the current range.
    pub fn lookup(&self, combo: &KeyCombo, range: Range) -> Option<EditorAction> {
        self.bindings
            .iter()
            .find(|(c, _)| c == combo)
            .map(|(_, action)| action.clone().with_range(range))
    }

    /// The stock editor shortcuts, keyed to the platform's primary
    /// modifier (Cmd on Mac, Ctrl elsewhere).
    pub fn default_for_platform(is_mac: bool) -> Self {
        let primary = Modifiers::primary(is_mac);
        let primary_shift = Modifiers::primary_shift(is_mac);

        let mut map = Self::empty();
        map.bind(
            KeyCombo::with_modifiers(Key::character("b"), primary),
            EditorAction::ApplyDirective {
                directive: Directive::Bold,
            },
        );
        map.bind(
            KeyCombo::with_modifiers(Key::character("i"), primary),
            EditorAction::ApplyDirective {
                directive: Directive::Italic,
            },
        );
        map.bind(
            KeyCombo::with_modifiers(Key::character("k"), primary),
            EditorAction::ApplyDirective {
                directive: Directive::Link,
            },
        );
        map.bind(
            KeyCombo::with_modifiers(Key::character("z"), primary),
            EditorAction::Undo,
        );
        map.bind(
            KeyCombo::with_modifiers(Key::character("z"), primary_shift),
            EditorAction::Redo,
        );
        map.bind(
            KeyCombo::with_modifiers(Key::character("y"), primary),
            EditorAction::Redo,
        );
        map.bind(
            KeyCombo::with_modifiers(Key::character("a"), primary),
            EditorAction::SelectAll,
        );
        map
    }
}
