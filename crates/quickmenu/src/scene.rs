//! The element scene: an explicit, owned element tree.
//!
//! The menu core is headless. Instead of reaching into a global document, it
//! renders into a [`Scene`] the host owns: a keyed arena of elements with a
//! class, a parent-relative rectangle, a visibility flag, and optional text
//! content. The host mirrors the scene into whatever it actually draws with
//! and feeds input back in container-local coordinates.
//!
//! Elements are addressed by [`ElementId`] handles; hosts may additionally
//! register names for container elements so a menu can be constructed
//! against `"sidebar"` instead of a raw id. There is no global lookup by
//! class marker - every element a menu reuses across renders is held as an
//! owned handle.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use quickmenu_core::Rect;
use quickmenu_core::logging::targets;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Handle to an element in a [`Scene`].
    pub struct ElementId;
}

/// One element in the scene tree.
#[derive(Debug, Clone)]
struct Element {
    class: String,
    /// Rectangle relative to the parent element (or to the scene root for
    /// parentless elements).
    rect: Rect,
    visible: bool,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    /// Text or markup payload for leaf content.
    text: Option<String>,
}

impl Element {
    fn new(class: String) -> Self {
        Self {
            class,
            rect: Rect::ZERO,
            visible: true,
            parent: None,
            children: Vec::new(),
            text: None,
        }
    }
}

/// A construction-time reference to a container element.
#[derive(Debug, Clone)]
pub enum ContainerTarget {
    /// A direct element handle.
    Id(ElementId),
    /// A host-registered element name.
    Named(String),
}

impl ContainerTarget {
    /// Human-readable form for error messages.
    pub fn describe(&self) -> String {
        match self {
            ContainerTarget::Id(id) => format!("{id:?}"),
            ContainerTarget::Named(name) => name.clone(),
        }
    }
}

impl From<ElementId> for ContainerTarget {
    fn from(id: ElementId) -> Self {
        ContainerTarget::Id(id)
    }
}

impl From<&str> for ContainerTarget {
    fn from(name: &str) -> Self {
        ContainerTarget::Named(name.to_string())
    }
}

impl From<String> for ContainerTarget {
    fn from(name: String) -> Self {
        ContainerTarget::Named(name)
    }
}

#[derive(Default)]
struct SceneInner {
    elements: SlotMap<ElementId, Element>,
    names: HashMap<String, ElementId>,
}

/// A shared, mutable element tree.
///
/// Cloning a `Scene` clones the handle; all clones view the same tree.
#[derive(Clone, Default)]
pub struct Scene {
    inner: Arc<RwLock<SceneInner>>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parentless element with the given style class.
    pub fn create_element(&self, class: impl Into<String>) -> ElementId {
        let class = class.into();
        tracing::trace!(target: targets::SCENE, class = %class, "creating element");
        self.inner.write().elements.insert(Element::new(class))
    }

    /// Create a parentless element and register a name for it.
    ///
    /// A later registration under the same name replaces the earlier one.
    pub fn create_named(&self, class: impl Into<String>, name: impl Into<String>) -> ElementId {
        let id = self.create_element(class);
        let _ = self.inner.write().names.insert(name.into(), id);
        id
    }

    /// Resolve a container target to a live element.
    pub fn resolve(&self, target: &ContainerTarget) -> Option<ElementId> {
        let inner = self.inner.read();
        let id = match target {
            ContainerTarget::Id(id) => *id,
            ContainerTarget::Named(name) => *inner.names.get(name)?,
        };
        inner.elements.contains_key(id).then_some(id)
    }

    /// Check whether an element is still alive.
    pub fn contains(&self, id: ElementId) -> bool {
        self.inner.read().elements.contains_key(id)
    }

    /// Append `child` to `parent`'s child list, detaching it from any
    /// previous parent. Returns `false` if either element is stale.
    pub fn append_child(&self, parent: ElementId, child: ElementId) -> bool {
        let mut inner = self.inner.write();
        if !inner.elements.contains_key(parent) || !inner.elements.contains_key(child) {
            return false;
        }

        if let Some(old_parent) = inner.elements[child].parent
            && let Some(old) = inner.elements.get_mut(old_parent)
        {
            old.children.retain(|&c| c != child);
        }

        inner.elements[child].parent = Some(parent);
        inner.elements[parent].children.push(child);
        true
    }

    /// Remove an element and its entire subtree.
    ///
    /// Safe to call with a stale id. Names pointing into the removed
    /// subtree are dropped as well.
    pub fn remove_element(&self, id: ElementId) {
        let mut inner = self.inner.write();
        if !inner.elements.contains_key(id) {
            return;
        }

        // Detach from the parent's child list first.
        if let Some(parent) = inner.elements[id].parent
            && let Some(parent_element) = inner.elements.get_mut(parent)
        {
            parent_element.children.retain(|&c| c != id);
        }

        // Collect and drop the whole subtree.
        let mut stack = vec![id];
        let mut removed = Vec::new();
        while let Some(current) = stack.pop() {
            if let Some(element) = inner.elements.remove(current) {
                stack.extend(element.children);
                removed.push(current);
            }
        }
        inner.names.retain(|_, target| !removed.contains(target));

        tracing::trace!(target: targets::SCENE, count = removed.len(), "removed element subtree");
    }

    /// The element's style class.
    pub fn class(&self, id: ElementId) -> Option<String> {
        self.inner.read().elements.get(id).map(|e| e.class.clone())
    }

    /// The element's parent-relative rectangle.
    pub fn rect(&self, id: ElementId) -> Option<Rect> {
        self.inner.read().elements.get(id).map(|e| e.rect)
    }

    /// Set the element's parent-relative rectangle.
    pub fn set_rect(&self, id: ElementId, rect: Rect) {
        if let Some(element) = self.inner.write().elements.get_mut(id) {
            element.rect = rect;
        }
    }

    /// The element's visibility flag.
    pub fn is_visible(&self, id: ElementId) -> bool {
        self.inner
            .read()
            .elements
            .get(id)
            .is_some_and(|e| e.visible)
    }

    /// Set the element's visibility flag.
    pub fn set_visible(&self, id: ElementId, visible: bool) {
        if let Some(element) = self.inner.write().elements.get_mut(id) {
            element.visible = visible;
        }
    }

    /// The element's text payload.
    pub fn text(&self, id: ElementId) -> Option<String> {
        self.inner.read().elements.get(id).and_then(|e| e.text.clone())
    }

    /// Set the element's text payload.
    pub fn set_text(&self, id: ElementId, text: impl Into<String>) {
        if let Some(element) = self.inner.write().elements.get_mut(id) {
            element.text = Some(text.into());
        }
    }

    /// The element's parent, if any.
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.inner.read().elements.get(id).and_then(|e| e.parent)
    }

    /// The element's children, in order.
    pub fn children(&self, id: ElementId) -> Vec<ElementId> {
        self.inner
            .read()
            .elements
            .get(id)
            .map(|e| e.children.clone())
            .unwrap_or_default()
    }
}

static_assertions::assert_impl_all!(Scene: Send, Sync);
