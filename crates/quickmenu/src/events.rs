//! Input event types.
//!
//! These are the crate's own event shapes, independent of any windowing
//! library. Hosts that run on winit can build them through
//! [`crate::keyboard::KeyboardInputHandler`]; other hosts fill them in
//! directly.
//!
//! A [`KeyInput`] identifies the pressed key by its *physical* identifier
//! (`"KeyA"`, `"Digit3"`, `"Escape"`), the same naming the W3C UI Events
//! `code` values use. Working from physical identifiers keeps shortcut
//! matching stable across keyboard layouts: the key in the `A` position
//! resolves the same way on QWERTY and AZERTY.

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held.
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        shift: false,
        control: true,
        alt: false,
        meta: false,
    };

    /// Alt modifier only.
    pub const ALT: Self = Self {
        shift: false,
        control: false,
        alt: true,
        meta: false,
    };

    /// Meta modifier only.
    pub const META: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: true,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }

    /// Check if no modifiers are pressed.
    pub fn none(&self) -> bool {
        !self.any()
    }
}

/// Common data for all input events.
///
/// The accepted flag models suppression of the host's default handling:
/// an accepted event must not trigger default behavior or propagate further.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    accepted: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing default handling and further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// A key-press event as seen by the shortcut engine.
#[derive(Debug, Clone)]
pub struct KeyInput {
    /// Base event data.
    pub base: EventBase,
    /// The physical key identifier, e.g. `"KeyA"`, `"Digit3"`, `"Escape"`.
    pub code: String,
    /// Modifier keys held during the event.
    pub modifiers: KeyboardModifiers,
    /// Whether an uncommitted input-method composition is in progress.
    ///
    /// While composing, the key stream belongs to the IME; shortcuts must
    /// not fire on it.
    pub composing: bool,
    /// Whether this is an auto-repeat event (key held down).
    pub is_repeat: bool,
}

impl KeyInput {
    /// Create a new key input event.
    pub fn new(code: impl Into<String>, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            code: code.into(),
            modifiers,
            composing: false,
            is_repeat: false,
        }
    }

    /// Mark the event as part of an IME composition.
    pub fn with_composing(mut self, composing: bool) -> Self {
        self.composing = composing;
        self
    }

    /// Mark the event as an auto-repeat.
    pub fn with_repeat(mut self, is_repeat: bool) -> Self {
        self.is_repeat = is_repeat;
        self
    }

    /// Accept the event (suppress default handling).
    pub fn accept(&mut self) {
        self.base.accept();
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.base.is_accepted()
    }
}

/// Pointer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PointerButton {
    /// Primary button (usually left).
    Left = 0,
    /// Secondary button (usually right) - the context-menu trigger.
    Right = 1,
    /// Middle button.
    Middle = 2,
}

/// A pointer-press event, used for the menu-open gesture on the container.
#[derive(Debug, Clone)]
pub struct PointerInput {
    /// Base event data.
    pub base: EventBase,
    /// The pressed button.
    pub button: PointerButton,
    /// Position in container-local coordinates.
    pub position: quickmenu_core::Point,
}

impl PointerInput {
    /// Create a new pointer input event.
    pub fn new(button: PointerButton, position: quickmenu_core::Point) -> Self {
        Self {
            base: EventBase::new(),
            button,
            position,
        }
    }

    /// Accept the event (suppress default handling).
    pub fn accept(&mut self) {
        self.base.accept();
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.base.is_accepted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_constants() {
        assert!(KeyboardModifiers::NONE.none());
        assert!(KeyboardModifiers::CTRL.control);
        assert!(!KeyboardModifiers::CTRL.shift);
        assert!(KeyboardModifiers::ALT.any());
    }

    #[test]
    fn test_event_accept_and_ignore() {
        let mut input = KeyInput::new("KeyA", KeyboardModifiers::NONE);
        assert!(!input.is_accepted());
        input.accept();
        assert!(input.is_accepted());
        input.base.ignore();
        assert!(!input.is_accepted());
    }

    #[test]
    fn test_key_input_builders() {
        let input = KeyInput::new("Escape", KeyboardModifiers::NONE)
            .with_composing(true)
            .with_repeat(true);
        assert!(input.composing);
        assert!(input.is_repeat);
        assert_eq!(input.code, "Escape");
    }
}
