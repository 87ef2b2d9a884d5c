//! Per-menu shortcut registry and dispatch.
//!
//! Each menu node owns one registry mapping [`ShortcutId`]s to action
//! callbacks. A registry only fires while *active*; activation is driven by
//! the node's focus-capture target rather than by global key listening, so
//! background host shortcuts are untouched while the menu is closed.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use quickmenu_core::logging::targets;

use crate::combo::{self, Resolution, ShortcutId};
use crate::events::KeyInput;

/// Callback invoked when a bound shortcut fires.
pub type ShortcutCallback = Arc<dyn Fn() + Send + Sync>;

/// A focus-scoped map from shortcut identifiers to action callbacks.
///
/// Later bindings for the same id silently overwrite earlier ones - one
/// callback per id per registry, no conflict error. Bindings registered
/// while inactive exist but do not fire until [`activate`](Self::activate).
#[derive(Default)]
pub struct ShortcutRegistry {
    bindings: Mutex<HashMap<ShortcutId, ShortcutCallback>>,
    active: AtomicBool,
}

impl ShortcutRegistry {
    /// Create a new, inactive registry with no bindings.
    pub fn new() -> Self {
        Self {
            bindings: Mutex::new(HashMap::new()),
            active: AtomicBool::new(false),
        }
    }

    /// Bind a callback to a shortcut id, overwriting any existing binding.
    pub fn bind(&self, id: impl Into<ShortcutId>, callback: impl Fn() + Send + Sync + 'static) {
        let id = id.into();
        tracing::trace!(target: targets::REGISTRY, shortcut = %id, "binding shortcut");
        let _ = self.bindings.lock().insert(id, Arc::new(callback));
    }

    /// Make this registry's bindings eligible to fire.
    pub fn activate(&self) {
        self.active.store(true, Ordering::SeqCst);
    }

    /// Stop this registry's bindings from firing.
    pub fn deactivate(&self) {
        self.active.store(false, Ordering::SeqCst);
    }

    /// Check whether the registry is currently active.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Drop all bindings. Activation state is untouched.
    pub fn clear(&self) {
        self.bindings.lock().clear();
    }

    /// Number of current bindings.
    pub fn binding_count(&self) -> usize {
        self.bindings.lock().len()
    }

    /// Check whether a shortcut id is currently bound.
    pub fn contains(&self, id: &ShortcutId) -> bool {
        self.bindings.lock().contains_key(id)
    }

    /// Dispatch a key event against this registry.
    ///
    /// Returns `true` when the event was handled:
    ///
    /// - inactive registry: unmatched, `false`, event untouched
    /// - composing event: `true` with no action invoked and no suppression -
    ///   the key stream belongs to the IME, but it must not fall through to
    ///   shortcut defaults either
    /// - resolved id with a binding: the event is accepted (default behavior
    ///   and propagation suppressed), the callback runs, `true`
    /// - resolved id without a binding: `false`, event untouched, so input
    ///   falls through to the host's default behavior
    pub fn dispatch(&self, input: &mut KeyInput) -> bool {
        if !self.is_active() {
            return false;
        }

        match combo::resolve(input) {
            Resolution::Composing => {
                tracing::trace!(target: targets::REGISTRY, "composing event consumed");
                true
            }
            Resolution::Shortcut(id) => {
                let callback = self.bindings.lock().get(&id).cloned();
                match callback {
                    Some(callback) => {
                        tracing::debug!(target: targets::REGISTRY, shortcut = %id, "shortcut matched");
                        input.accept();
                        callback();
                        true
                    }
                    None => {
                        tracing::trace!(target: targets::REGISTRY, shortcut = %id, "no binding");
                        false
                    }
                }
            }
        }
    }
}

static_assertions::assert_impl_all!(ShortcutRegistry: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::KeyboardModifiers;
    use std::sync::atomic::AtomicUsize;

    fn counting_registry(id: &str) -> (ShortcutRegistry, Arc<AtomicUsize>) {
        let registry = ShortcutRegistry::new();
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        registry.bind(id, move || {
            let _ = count_clone.fetch_add(1, Ordering::SeqCst);
        });
        (registry, count)
    }

    #[test]
    fn test_dispatch_requires_activation() {
        let (registry, count) = counting_registry("alt+1");
        let mut input = KeyInput::new("Digit1", KeyboardModifiers::ALT);

        // Bound but inactive: unmatched, callback untouched.
        assert!(!registry.dispatch(&mut input));
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(!input.is_accepted());

        registry.activate();
        let mut input = KeyInput::new("Digit1", KeyboardModifiers::ALT);
        assert!(registry.dispatch(&mut input));
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(input.is_accepted());
    }

    #[test]
    fn test_dispatch_invokes_exactly_once() {
        let (registry, count) = counting_registry("ctrl+a");
        registry.activate();

        let mut input = KeyInput::new("KeyA", KeyboardModifiers::CTRL);
        assert!(registry.dispatch(&mut input));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unmatched_leaves_event_unsuppressed() {
        let (registry, count) = counting_registry("ctrl+a");
        registry.activate();

        let mut input = KeyInput::new("KeyB", KeyboardModifiers::CTRL);
        assert!(!registry.dispatch(&mut input));
        assert!(!input.is_accepted());
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_composing_is_consumed_without_action() {
        let (registry, count) = counting_registry("ctrl+a");
        registry.activate();

        let mut input = KeyInput::new("KeyA", KeyboardModifiers::CTRL).with_composing(true);
        assert!(registry.dispatch(&mut input));
        assert_eq!(count.load(Ordering::SeqCst), 0);
        // Composition keys keep their default behavior.
        assert!(!input.is_accepted());
    }

    #[test]
    fn test_rebinding_overwrites() {
        let registry = ShortcutRegistry::new();
        registry.activate();

        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let first_clone = first.clone();
        registry.bind("ctrl+s", move || {
            let _ = first_clone.fetch_add(1, Ordering::SeqCst);
        });
        let second_clone = second.clone();
        registry.bind("ctrl+s", move || {
            let _ = second_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(registry.binding_count(), 1);

        let mut input = KeyInput::new("KeyS", KeyboardModifiers::CTRL);
        assert!(registry.dispatch(&mut input));
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clear_removes_bindings() {
        let (registry, count) = counting_registry("ctrl+a");
        registry.activate();
        registry.clear();

        let mut input = KeyInput::new("KeyA", KeyboardModifiers::CTRL);
        assert!(!registry.dispatch(&mut input));
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(registry.binding_count(), 0);
        // Clearing does not deactivate.
        assert!(registry.is_active());
    }

    #[test]
    fn test_contains() {
        let (registry, _count) = counting_registry("alt+x");
        assert!(registry.contains(&ShortcutId::from("alt+x")));
        assert!(!registry.contains(&ShortcutId::from("alt+y")));
    }
}
