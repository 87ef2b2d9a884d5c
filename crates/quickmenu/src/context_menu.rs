//! The public menu facade.
//!
//! [`ContextMenu`] is the thin surface a host application talks to: it
//! resolves the container, owns the root [`MenuNode`], and forwards
//! locate/show/dispatch calls. All the real behavior lives in the node and
//! the shortcut engine.
//!
//! # Example
//!
//! ```
//! use quickmenu::context_menu::{ContextMenu, MenuConfig};
//! use quickmenu::menu::MenuEntry;
//! use quickmenu::scene::Scene;
//! use quickmenu_core::{Point, Rect};
//!
//! let scene = Scene::new();
//! let container = scene.create_named("container", "main");
//! scene.set_rect(container, Rect::new(0.0, 0.0, 800.0, 600.0));
//!
//! let config = MenuConfig {
//!     items: vec![MenuEntry::new("Reload").with_shortcut("ctrl+r").on_click(|| {})],
//!     ..MenuConfig::default()
//! };
//! let menu = ContextMenu::new(config, &scene, "main").unwrap();
//! menu.locate(Point::new(120.0, 80.0));
//! ```

use quickmenu_core::Point;

use crate::error::{MenuError, MenuResult};
use crate::events::{KeyInput, PointerInput};
use crate::menu::{MenuEntry, MenuNode, MenuStyle};
use crate::scene::{ContainerTarget, ElementId, Scene};
use std::sync::Arc;

/// Recognized construction options.
#[derive(Debug, Clone)]
pub struct MenuConfig {
    /// The ordered menu entries.
    pub items: Vec<MenuEntry>,
    /// Whether the menu-open press on the container is accepted (suppressing
    /// the host's default handling of it). Defaults to `true`.
    pub stop_propagation_on_open: bool,
    /// Layout metrics for this menu.
    pub style: MenuStyle,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            stop_propagation_on_open: true,
            style: MenuStyle::default(),
        }
    }
}

/// A contextual popup menu bound to a host container.
pub struct ContextMenu {
    root: Arc<MenuNode>,
    container: ElementId,
    stop_propagation_on_open: bool,
}

impl ContextMenu {
    /// Construct a menu inside the given container.
    ///
    /// Fails with [`MenuError::ContainerNotFound`] if the named/given
    /// container does not resolve to a live element; no part of the widget
    /// is constructed in that case.
    pub fn new(
        config: MenuConfig,
        scene: &Scene,
        container: impl Into<ContainerTarget>,
    ) -> MenuResult<Self> {
        let target = container.into();
        let container = scene
            .resolve(&target)
            .ok_or_else(|| MenuError::ContainerNotFound(target.describe()))?;

        let root = MenuNode::new_root(scene.clone(), container, config.items, config.style);

        Ok(Self {
            root,
            container,
            stop_propagation_on_open: config.stop_propagation_on_open,
        })
    }

    /// Show the menu and place its root layout at `(x + offset_x,
    /// y + offset_y)` relative to the container, where the offsets flip the
    /// menu away from container edges it would otherwise overflow.
    pub fn locate(&self, point: Point) {
        self.root.locate(point);
    }

    /// Forward a keyboard event to the active registry chain.
    ///
    /// Returns whether the event was handled. Unhandled events are left
    /// unsuppressed so they fall through to the host's default behavior.
    pub fn dispatch(&self, input: &mut KeyInput) -> bool {
        self.root.dispatch(input)
    }

    /// Hide the menu, collapsing any open cascade. Always safe to call.
    pub fn hide(&self) {
        self.root.hide();
    }

    /// Check whether the menu is currently visible.
    pub fn is_visible(&self) -> bool {
        self.root.is_visible()
    }

    /// Re-render with a new entry list.
    ///
    /// Previous rows, shortcut bindings, and any cached submenu are
    /// discarded and rebuilt; the menu's position and identity are
    /// preserved.
    pub fn set_items(&self, items: Vec<MenuEntry>) {
        self.root.rebuild(items);
    }

    /// Handle the menu-open press on the container.
    ///
    /// Accepts the event when `stop_propagation_on_open` is set and moves
    /// input focus to the menu's receiver, which activates the root shortcut
    /// registry.
    pub fn open_pressed(&self, input: &mut PointerInput) {
        if self.stop_propagation_on_open {
            input.accept();
        }
        self.root.focus_receiver();
    }

    /// The root menu node, for hosts forwarding pointer events directly.
    pub fn root(&self) -> &Arc<MenuNode> {
        &self.root
    }

    /// The container element this menu renders into.
    pub fn container(&self) -> ElementId {
        self.container
    }
}

static_assertions::assert_impl_all!(ContextMenu: Send, Sync);
