//! quickmenu - a contextual popup-menu widget core.
//!
//! Given a declarative list of menu entries (possibly nested into submenus),
//! quickmenu renders a positioned menu into a host-owned element scene,
//! dispatches pointer clicks, and binds single-key and modifier-combo
//! keyboard shortcuts to menu actions while the menu is open.
//!
//! The crate is headless: it owns geometry, visibility, shortcut state, and
//! the element tree, while the host does the actual drawing and feeds input
//! back in. Two subsystems carry the design:
//!
//! - the **shortcut engine** ([`keymap`], [`combo`], [`registry`],
//!   [`focus`]): raw key events are resolved to canonical [`ShortcutId`]s
//!   and routed to the one registry whose focus target holds focus
//! - the **cascade engine** ([`placement`], [`menu`]): boundary-aware menu
//!   placement plus show/hide propagation across parent/child menu nodes
//!
//! # Example
//!
//! ```
//! use quickmenu::{ContextMenu, MenuConfig, MenuEntry, Scene};
//! use quickmenu_core::{Point, Rect};
//!
//! let scene = Scene::new();
//! let container = scene.create_named("container", "editor");
//! scene.set_rect(container, Rect::new(0.0, 0.0, 800.0, 600.0));
//!
//! let config = MenuConfig {
//!     items: vec![
//!         MenuEntry::new("Cut").with_shortcut("ctrl+x").on_click(|| {}),
//!         MenuEntry::new("Copy").with_shortcut("ctrl+c").on_click(|| {}),
//!     ],
//!     ..MenuConfig::default()
//! };
//!
//! let menu = ContextMenu::new(config, &scene, "editor")?;
//! menu.locate(Point::new(240.0, 180.0));
//! # Ok::<(), quickmenu::MenuError>(())
//! ```

pub mod combo;
pub mod context_menu;
pub mod error;
pub mod events;
pub mod focus;
pub mod keyboard;
pub mod keymap;
pub mod menu;
pub mod placement;
pub mod registry;
pub mod scene;

pub use combo::{Resolution, ShortcutId};
pub use context_menu::{ContextMenu, MenuConfig};
pub use error::{MenuError, MenuResult};
pub use events::{KeyInput, KeyboardModifiers, PointerButton, PointerInput};
pub use focus::FocusTarget;
pub use menu::{ContentSource, ItemContent, MenuEntry, MenuNode, MenuStyle};
pub use placement::{BoundaryHint, EDGE_MARGIN, boundary_hint};
pub use registry::ShortcutRegistry;
pub use scene::{ContainerTarget, ElementId, Scene};

// Re-export the core geometry types users need for placement calls.
pub use quickmenu_core::{Point, Rect, Size};
