//! Canonical shortcut identifiers and combo resolution.
//!
//! This module turns a raw [`KeyInput`] into a [`ShortcutId`], the canonical
//! lowercase string a registry binds against. The form is `[modifier+]base`:
//!
//! - `modifier` is at most one of `ctrl`, `meta`, `alt`, `shift`, chosen in
//!   that fixed priority order when several are held
//! - `base` is the bare letter/digit for `KeyX`/`DigitX` physical codes, and
//!   the physical identifier verbatim for everything else
//!
//! Examples: Ctrl held with physical `KeyA` resolves to `"ctrl+a"`,
//! `Digit3` alone to `"3"`, `Escape` to `"escape"`.
//!
//! Resolution works from physical identifiers so that two events a user
//! perceives as the same shortcut produce the same id regardless of keyboard
//! layout. It is a pure function of (modifier flags, physical code,
//! composing flag).

use std::fmt;

use crate::events::{KeyInput, KeyboardModifiers};

/// A canonical, lowercase shortcut identifier.
///
/// Construction always canonicalizes to lowercase, so `"Ctrl+A"`, `"ctrl+a"`
/// and the resolver's own output all compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortcutId(String);

impl ShortcutId {
    /// Create a shortcut id, canonicalizing to lowercase.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().to_ascii_lowercase())
    }

    /// The canonical string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `+`-separated parts of the id (modifier first, if present).
    pub fn parts(&self) -> impl Iterator<Item = &str> {
        self.0.split('+')
    }
}

impl fmt::Display for ShortcutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShortcutId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ShortcutId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

/// A single recorded modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// The Control key.
    Ctrl,
    /// The Meta/Super key.
    Meta,
    /// The Alt key.
    Alt,
    /// The Shift key.
    Shift,
}

impl Modifier {
    /// The prefix this modifier contributes to a [`ShortcutId`].
    pub fn prefix(self) -> &'static str {
        match self {
            Modifier::Ctrl => "ctrl",
            Modifier::Meta => "meta",
            Modifier::Alt => "alt",
            Modifier::Shift => "shift",
        }
    }

    /// Pick the highest-priority active modifier, if any.
    ///
    /// Priority order is ctrl, meta, alt, shift; only the first active one
    /// is recorded. True multi-modifier combos are not supported - the
    /// engine deliberately models "single modifier + base key" only.
    pub fn first_active(modifiers: KeyboardModifiers) -> Option<Self> {
        if modifiers.control {
            Some(Modifier::Ctrl)
        } else if modifiers.meta {
            Some(Modifier::Meta)
        } else if modifiers.alt {
            Some(Modifier::Alt)
        } else if modifiers.shift {
            Some(Modifier::Shift)
        } else {
            None
        }
    }
}

/// Outcome of resolving a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The event is part of an uncommitted IME composition.
    ///
    /// Dispatch must treat it as unmatched but consumed: acting on an
    /// uncommitted composition produces wrong results.
    Composing,
    /// The canonical shortcut identifier for the event.
    Shortcut(ShortcutId),
}

/// Resolve a key event to its canonical shortcut identifier.
///
/// Events with no recognizable base key still produce an id from the raw
/// physical identifier, so registry lookups fail closed (no match) rather
/// than erroring.
pub fn resolve(input: &KeyInput) -> Resolution {
    if input.composing {
        return Resolution::Composing;
    }

    let base = base_key(&input.code);
    let id = match Modifier::first_active(input.modifiers) {
        Some(modifier) => ShortcutId::new(format!("{}+{}", modifier.prefix(), base)),
        None => ShortcutId::new(base),
    };

    Resolution::Shortcut(id)
}

/// Extract the base key from a physical identifier.
///
/// `Digit3` becomes `3` and `KeyA` becomes `A`; special keys (`Escape`,
/// `ArrowUp`, ...) pass through verbatim. A bare `Digit`/`Key` prefix with
/// nothing after it is not stripped.
fn base_key(code: &str) -> &str {
    if let Some(rest) = code.strip_prefix("Digit")
        && !rest.is_empty()
    {
        return rest;
    }
    if let Some(rest) = code.strip_prefix("Key")
        && !rest.is_empty()
    {
        return rest;
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shortcut(input: &KeyInput) -> ShortcutId {
        match resolve(input) {
            Resolution::Shortcut(id) => id,
            Resolution::Composing => panic!("unexpected composing resolution"),
        }
    }

    #[test]
    fn test_ctrl_letter() {
        let input = KeyInput::new("KeyA", KeyboardModifiers::CTRL);
        assert_eq!(shortcut(&input).as_str(), "ctrl+a");
    }

    #[test]
    fn test_bare_digit() {
        let input = KeyInput::new("Digit3", KeyboardModifiers::NONE);
        assert_eq!(shortcut(&input).as_str(), "3");
    }

    #[test]
    fn test_special_key_verbatim() {
        let input = KeyInput::new("Escape", KeyboardModifiers::NONE);
        assert_eq!(shortcut(&input).as_str(), "escape");

        let input = KeyInput::new("ArrowUp", KeyboardModifiers::NONE);
        assert_eq!(shortcut(&input).as_str(), "arrowup");
    }

    #[test]
    fn test_alt_digit() {
        let input = KeyInput::new("Digit1", KeyboardModifiers::ALT);
        assert_eq!(shortcut(&input).as_str(), "alt+1");
    }

    #[test]
    fn test_modifier_priority_order() {
        // ctrl wins over everything
        let all = KeyboardModifiers {
            shift: true,
            control: true,
            alt: true,
            meta: true,
        };
        let input = KeyInput::new("KeyS", all);
        assert_eq!(shortcut(&input).as_str(), "ctrl+s");

        // meta wins over alt and shift
        let input = KeyInput::new(
            "KeyS",
            KeyboardModifiers {
                shift: true,
                control: false,
                alt: true,
                meta: true,
            },
        );
        assert_eq!(shortcut(&input).as_str(), "meta+s");

        // alt wins over shift
        let input = KeyInput::new(
            "KeyS",
            KeyboardModifiers {
                shift: true,
                control: false,
                alt: true,
                meta: false,
            },
        );
        assert_eq!(shortcut(&input).as_str(), "alt+s");
    }

    #[test]
    fn test_composing_short_circuits() {
        let input = KeyInput::new("KeyA", KeyboardModifiers::CTRL).with_composing(true);
        assert_eq!(resolve(&input), Resolution::Composing);
    }

    #[test]
    fn test_resolution_is_pure() {
        let input = KeyInput::new("KeyQ", KeyboardModifiers::SHIFT);
        assert_eq!(resolve(&input), resolve(&input.clone()));
    }

    #[test]
    fn test_unrecognized_code_fails_closed() {
        // No prefix to strip, no catalog consultation: the raw identifier
        // comes through lowercased and simply won't match any binding.
        let input = KeyInput::new("LaunchMail", KeyboardModifiers::NONE);
        assert_eq!(shortcut(&input).as_str(), "launchmail");
    }

    #[test]
    fn test_bare_prefix_not_stripped() {
        let input = KeyInput::new("Key", KeyboardModifiers::NONE);
        assert_eq!(shortcut(&input).as_str(), "key");

        let input = KeyInput::new("Digit", KeyboardModifiers::NONE);
        assert_eq!(shortcut(&input).as_str(), "digit");
    }

    #[test]
    fn test_shortcut_id_canonicalizes() {
        assert_eq!(ShortcutId::from("Ctrl+A"), ShortcutId::from("ctrl+a"));
        let id = ShortcutId::new("Alt+1");
        let parts: Vec<_> = id.parts().collect();
        assert_eq!(parts, vec!["alt", "1"]);
    }
}
