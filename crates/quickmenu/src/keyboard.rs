//! Keyboard and IME conversion from platform events.
//!
//! The menu core's own event types ([`KeyInput`]) are platform-independent;
//! this module translates winit keyboard and IME events into them. Hosts on
//! other platforms can skip it entirely and fill in [`KeyInput`] themselves.
//!
//! The main entry point is [`KeyboardInputHandler`], which tracks modifier
//! and composition state across events:
//!
//! ```ignore
//! use quickmenu::keyboard::KeyboardInputHandler;
//!
//! let mut handler = KeyboardInputHandler::new();
//!
//! // In the winit event loop:
//! // WindowEvent::ModifiersChanged(m) => handler.update_modifiers(&m),
//! // WindowEvent::Ime(ime) => handler.process_ime_event(&ime),
//! // WindowEvent::KeyboardInput { event, .. } => {
//! //     let mut input = handler.key_input(&event);
//! //     menu.dispatch(&mut input);
//! // }
//! ```

use winit::event::{Ime, KeyEvent, Modifiers};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::events::{KeyInput, KeyboardModifiers};

/// Converts winit modifiers to [`KeyboardModifiers`].
pub fn from_winit_modifiers(modifiers: &Modifiers) -> KeyboardModifiers {
    let state = modifiers.state();
    KeyboardModifiers {
        shift: state.shift_key(),
        control: state.control_key(),
        alt: state.alt_key(),
        meta: state.super_key(),
    }
}

/// Converts a winit physical key to its W3C-style code name.
///
/// These are the identifiers the combo resolver consumes: `"KeyA"`,
/// `"Digit3"`, `"Escape"`, `"ArrowUp"`, ... Unmapped keys come through as
/// `"Unidentified"`, which resolves to an id no binding matches.
pub fn physical_key_code(physical: &PhysicalKey) -> &'static str {
    match physical {
        PhysicalKey::Code(code) => key_code_name(code),
        PhysicalKey::Unidentified(_) => "Unidentified",
    }
}

fn key_code_name(code: &KeyCode) -> &'static str {
    match code {
        // Letters
        KeyCode::KeyA => "KeyA",
        KeyCode::KeyB => "KeyB",
        KeyCode::KeyC => "KeyC",
        KeyCode::KeyD => "KeyD",
        KeyCode::KeyE => "KeyE",
        KeyCode::KeyF => "KeyF",
        KeyCode::KeyG => "KeyG",
        KeyCode::KeyH => "KeyH",
        KeyCode::KeyI => "KeyI",
        KeyCode::KeyJ => "KeyJ",
        KeyCode::KeyK => "KeyK",
        KeyCode::KeyL => "KeyL",
        KeyCode::KeyM => "KeyM",
        KeyCode::KeyN => "KeyN",
        KeyCode::KeyO => "KeyO",
        KeyCode::KeyP => "KeyP",
        KeyCode::KeyQ => "KeyQ",
        KeyCode::KeyR => "KeyR",
        KeyCode::KeyS => "KeyS",
        KeyCode::KeyT => "KeyT",
        KeyCode::KeyU => "KeyU",
        KeyCode::KeyV => "KeyV",
        KeyCode::KeyW => "KeyW",
        KeyCode::KeyX => "KeyX",
        KeyCode::KeyY => "KeyY",
        KeyCode::KeyZ => "KeyZ",

        // Digits
        KeyCode::Digit0 => "Digit0",
        KeyCode::Digit1 => "Digit1",
        KeyCode::Digit2 => "Digit2",
        KeyCode::Digit3 => "Digit3",
        KeyCode::Digit4 => "Digit4",
        KeyCode::Digit5 => "Digit5",
        KeyCode::Digit6 => "Digit6",
        KeyCode::Digit7 => "Digit7",
        KeyCode::Digit8 => "Digit8",
        KeyCode::Digit9 => "Digit9",

        // Function keys
        KeyCode::F1 => "F1",
        KeyCode::F2 => "F2",
        KeyCode::F3 => "F3",
        KeyCode::F4 => "F4",
        KeyCode::F5 => "F5",
        KeyCode::F6 => "F6",
        KeyCode::F7 => "F7",
        KeyCode::F8 => "F8",
        KeyCode::F9 => "F9",
        KeyCode::F10 => "F10",
        KeyCode::F11 => "F11",
        KeyCode::F12 => "F12",

        // Navigation
        KeyCode::ArrowUp => "ArrowUp",
        KeyCode::ArrowDown => "ArrowDown",
        KeyCode::ArrowLeft => "ArrowLeft",
        KeyCode::ArrowRight => "ArrowRight",
        KeyCode::Home => "Home",
        KeyCode::End => "End",
        KeyCode::PageUp => "PageUp",
        KeyCode::PageDown => "PageDown",

        // Editing
        KeyCode::Backspace => "Backspace",
        KeyCode::Delete => "Delete",
        KeyCode::Insert => "Insert",
        KeyCode::Enter => "Enter",
        KeyCode::Tab => "Tab",
        KeyCode::Space => "Space",
        KeyCode::Escape => "Escape",

        // Modifiers
        KeyCode::ShiftLeft => "ShiftLeft",
        KeyCode::ShiftRight => "ShiftRight",
        KeyCode::ControlLeft => "ControlLeft",
        KeyCode::ControlRight => "ControlRight",
        KeyCode::AltLeft => "AltLeft",
        KeyCode::AltRight => "AltRight",
        KeyCode::SuperLeft => "MetaLeft",
        KeyCode::SuperRight => "MetaRight",

        // Locks
        KeyCode::CapsLock => "CapsLock",
        KeyCode::NumLock => "NumLock",
        KeyCode::ScrollLock => "ScrollLock",

        // Punctuation
        KeyCode::Minus => "Minus",
        KeyCode::Equal => "Equal",
        KeyCode::BracketLeft => "BracketLeft",
        KeyCode::BracketRight => "BracketRight",
        KeyCode::Backslash => "Backslash",
        KeyCode::Semicolon => "Semicolon",
        KeyCode::Quote => "Quote",
        KeyCode::Comma => "Comma",
        KeyCode::Period => "Period",
        KeyCode::Slash => "Slash",
        KeyCode::Backquote => "Backquote",

        // Numpad
        KeyCode::Numpad0 => "Numpad0",
        KeyCode::Numpad1 => "Numpad1",
        KeyCode::Numpad2 => "Numpad2",
        KeyCode::Numpad3 => "Numpad3",
        KeyCode::Numpad4 => "Numpad4",
        KeyCode::Numpad5 => "Numpad5",
        KeyCode::Numpad6 => "Numpad6",
        KeyCode::Numpad7 => "Numpad7",
        KeyCode::Numpad8 => "Numpad8",
        KeyCode::Numpad9 => "Numpad9",
        KeyCode::NumpadAdd => "NumpadAdd",
        KeyCode::NumpadSubtract => "NumpadSubtract",
        KeyCode::NumpadMultiply => "NumpadMultiply",
        KeyCode::NumpadDivide => "NumpadDivide",
        KeyCode::NumpadDecimal => "NumpadDecimal",
        KeyCode::NumpadEnter => "NumpadEnter",

        _ => "Unidentified",
    }
}

/// Current state of the input method editor.
///
/// Tracks whether an uncommitted preedit (composition) exists so key events
/// arriving mid-composition can be flagged and kept away from shortcut
/// matching.
#[derive(Debug, Clone, Default)]
pub struct ImeState {
    enabled: bool,
    preedit: Option<String>,
}

impl ImeState {
    /// Create a new state with IME disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the IME is currently enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether an uncommitted composition is in progress.
    pub fn is_composing(&self) -> bool {
        self.preedit.is_some()
    }

    /// The current preedit text, if any.
    pub fn preedit_text(&self) -> Option<&str> {
        self.preedit.as_deref()
    }

    /// Update from a winit IME event.
    pub fn process_ime_event(&mut self, event: &Ime) {
        match event {
            Ime::Enabled => {
                self.enabled = true;
            }
            Ime::Preedit(text, _cursor) => {
                self.preedit = if text.is_empty() {
                    None
                } else {
                    Some(text.clone())
                };
            }
            Ime::Commit(_) => {
                self.preedit = None;
            }
            Ime::Disabled => {
                self.enabled = false;
                self.preedit = None;
            }
        }
    }
}

/// Stateful converter from winit events to [`KeyInput`] values.
///
/// Tracks the modifier state (winit reports it out-of-band via
/// `ModifiersChanged`) and the IME composition state across events.
#[derive(Debug, Default)]
pub struct KeyboardInputHandler {
    modifiers: KeyboardModifiers,
    ime: ImeState,
}

impl KeyboardInputHandler {
    /// Create a handler with no modifiers pressed and IME idle.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current modifier state.
    pub fn modifiers(&self) -> KeyboardModifiers {
        self.modifiers
    }

    /// The current IME state.
    pub fn ime(&self) -> &ImeState {
        &self.ime
    }

    /// Update the tracked modifier state.
    pub fn update_modifiers(&mut self, modifiers: &Modifiers) {
        self.modifiers = from_winit_modifiers(modifiers);
    }

    /// Update the tracked IME state.
    pub fn process_ime_event(&mut self, event: &Ime) {
        self.ime.process_ime_event(event);
    }

    /// Build a [`KeyInput`] for a winit key event, stamping the tracked
    /// modifier and composition state.
    pub fn key_input(&self, event: &KeyEvent) -> KeyInput {
        KeyInput::new(physical_key_code(&event.physical_key), self.modifiers)
            .with_composing(self.ime.is_composing())
            .with_repeat(event.repeat)
    }
}
