//! Focus capture for shortcut activation.
//!
//! Shortcut registries are activated by focus, not by global key listening.
//! Each menu node owns a [`FocusTarget`]: an explicit focus-capture handle
//! whose contract is "activate on focus-gained, deactivate on focus-lost",
//! independent of whichever concrete focus mechanism the host platform
//! offers. The host reports focus transitions by calling
//! [`focus`](FocusTarget::focus) and [`blur`](FocusTarget::blur); the
//! owning node connects its registry's activation to the two signals.
//!
//! Focus is exclusive by nature: when the host moves focus to another
//! target, it blurs this one, which is what makes exactly one registry
//! reachable per focus scope without any global bookkeeping.

use std::sync::atomic::{AtomicBool, Ordering};

use quickmenu_core::Signal;
use quickmenu_core::logging::targets;

/// An explicit focus-capture target.
///
/// `focus()` and `blur()` are idempotent: refocusing an already-focused
/// target does not re-emit, so connected slots never see duplicate
/// transitions.
#[derive(Default)]
pub struct FocusTarget {
    focused: AtomicBool,
    /// Emitted when the target gains focus.
    pub focus_gained: Signal<()>,
    /// Emitted when the target loses focus.
    pub focus_lost: Signal<()>,
}

impl FocusTarget {
    /// Create a new, unfocused target.
    pub fn new() -> Self {
        Self {
            focused: AtomicBool::new(false),
            focus_gained: Signal::new(),
            focus_lost: Signal::new(),
        }
    }

    /// Check whether the target currently holds focus.
    pub fn is_focused(&self) -> bool {
        self.focused.load(Ordering::SeqCst)
    }

    /// Report focus gained. Emits `focus_gained` on a real transition.
    pub fn focus(&self) {
        if !self.focused.swap(true, Ordering::SeqCst) {
            tracing::trace!(target: targets::FOCUS, "focus gained");
            self.focus_gained.emit(());
        }
    }

    /// Report focus lost. Emits `focus_lost` on a real transition.
    pub fn blur(&self) {
        if self.focused.swap(false, Ordering::SeqCst) {
            tracing::trace!(target: targets::FOCUS, "focus lost");
            self.focus_lost.emit(());
        }
    }
}

static_assertions::assert_impl_all!(FocusTarget: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_focus_transitions() {
        let target = FocusTarget::new();
        assert!(!target.is_focused());

        target.focus();
        assert!(target.is_focused());

        target.blur();
        assert!(!target.is_focused());
    }

    #[test]
    fn test_transitions_emit_once() {
        let target = FocusTarget::new();
        let gained = Arc::new(AtomicUsize::new(0));
        let lost = Arc::new(AtomicUsize::new(0));

        let gained_clone = gained.clone();
        target.focus_gained.connect(move |_| {
            let _ = gained_clone.fetch_add(1, Ordering::SeqCst);
        });
        let lost_clone = lost.clone();
        target.focus_lost.connect(move |_| {
            let _ = lost_clone.fetch_add(1, Ordering::SeqCst);
        });

        target.focus();
        target.focus(); // already focused, no re-emit
        assert_eq!(gained.load(Ordering::SeqCst), 1);

        target.blur();
        target.blur(); // already blurred, no re-emit
        assert_eq!(lost.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drives_registry_activation() {
        use crate::events::{KeyInput, KeyboardModifiers};
        use crate::registry::ShortcutRegistry;

        let target = FocusTarget::new();
        let registry = Arc::new(ShortcutRegistry::new());
        registry.bind("ctrl+k", || {});

        let registry_gain = registry.clone();
        target.focus_gained.connect(move |_| {
            registry_gain.activate();
        });
        let registry_lose = registry.clone();
        target.focus_lost.connect(move |_| {
            registry_lose.deactivate();
        });

        let mut input = KeyInput::new("KeyK", KeyboardModifiers::CTRL);
        assert!(!registry.dispatch(&mut input));

        target.focus();
        let mut input = KeyInput::new("KeyK", KeyboardModifiers::CTRL);
        assert!(registry.dispatch(&mut input));

        target.blur();
        let mut input = KeyInput::new("KeyK", KeyboardModifiers::CTRL);
        assert!(!registry.dispatch(&mut input));
    }
}
