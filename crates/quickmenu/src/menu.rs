//! Menu entries and the menu node.
//!
//! A [`MenuNode`] is one visual menu instance - the root menu or a submenu.
//! It renders its entries into the scene, owns a [`ShortcutRegistry`] scoped
//! by its own focus target, lazily instantiates a child node for nested
//! entries, and manages show/hide/placement.
//!
//! Root and nested menus render as *siblings* inside the host container
//! (with distinct style classes) rather than nesting in the element tree;
//! visual nesting is decoupled from layout and event-bubbling nesting.
//!
//! # Example
//!
//! ```
//! use quickmenu::menu::MenuEntry;
//!
//! let items = vec![
//!     MenuEntry::new("Open").with_shortcut("ctrl+o").on_click(|| {}),
//!     MenuEntry::new("Recent").with_children(vec![
//!         MenuEntry::new("notes.txt").on_click(|| {}),
//!     ]),
//! ];
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use quickmenu_core::logging::targets;
use quickmenu_core::{Point, Rect, Size};

use crate::combo::ShortcutId;
use crate::events::KeyInput;
use crate::focus::FocusTarget;
use crate::placement::{self, BoundaryHint};
use crate::registry::ShortcutRegistry;
use crate::scene::{ElementId, Scene};

/// Style class of a root menu layout surface.
pub const LAYOUT_CLASS: &str = "quickmenu-layout";
/// Style class of a submenu layout surface.
pub const SUBMENU_CLASS: &str = "quickmenu-submenu";
/// Style class of the invisible focus-receiving element.
pub const RECEIVER_CLASS: &str = "quickmenu-receiver";
/// Style class of an interactive item row.
pub const ITEM_CLASS: &str = "quickmenu-item";
/// Style class of a currently-disabled item row.
pub const ITEM_DISABLED_CLASS: &str = "quickmenu-item disabled";
/// Style class of the submenu arrow affordance.
pub const ARROW_CLASS: &str = "quickmenu-arrow";

// ============================================================================
// Item content
// ============================================================================

/// Host-supplied custom content for an entry.
///
/// A source is resolved once at entry-creation time into an [`ItemContent`];
/// the row build never branches on the source shape again.
#[derive(Clone)]
pub enum ContentSource {
    /// Literal markup text, rendered by the host as-is.
    Markup(String),
    /// A live element already present in the scene.
    Element(ElementId),
    /// A factory producing an element; a factory that produces nothing
    /// falls back to the entry's plain label text.
    Factory(Arc<dyn Fn() -> Option<ElementId> + Send + Sync>),
}

impl ContentSource {
    fn resolve(&self, label: &str) -> ItemContent {
        match self {
            ContentSource::Markup(markup) => ItemContent::Markup(markup.clone()),
            ContentSource::Element(id) => ItemContent::Element(*id),
            ContentSource::Factory(factory) => match factory() {
                Some(id) => ItemContent::Element(id),
                None => ItemContent::Text(label.to_string()),
            },
        }
    }
}

impl fmt::Debug for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentSource::Markup(markup) => f.debug_tuple("Markup").field(markup).finish(),
            ContentSource::Element(id) => f.debug_tuple("Element").field(id).finish(),
            ContentSource::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

/// The displayable node an entry renders as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemContent {
    /// Markup text set as the row's payload.
    Markup(String),
    /// An element appended into the row.
    Element(ElementId),
    /// Plain label text.
    Text(String),
}

// ============================================================================
// MenuEntry
// ============================================================================

/// One declarative menu item supplied by the host.
///
/// Entries are immutable from the menu's perspective; they are walked to
/// build a [`MenuNode`] and cloned into shortcut callbacks. The disabled
/// predicate is evaluated fresh on every render and every interaction, never
/// cached, so hosts can drive enablement from their own state.
#[derive(Clone, Default)]
pub struct MenuEntry {
    label: String,
    action: Option<Arc<dyn Fn() + Send + Sync>>,
    disabled: Option<Arc<dyn Fn() -> bool + Send + Sync>>,
    shortcuts: Vec<ShortcutId>,
    children: Vec<MenuEntry>,
    content: Option<ItemContent>,
}

impl MenuEntry {
    /// Create an entry with a display label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Set the click action.
    pub fn on_click(mut self, action: impl Fn() + Send + Sync + 'static) -> Self {
        self.action = Some(Arc::new(action));
        self
    }

    /// Set the disabled predicate.
    pub fn disabled_when(mut self, predicate: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.disabled = Some(Arc::new(predicate));
        self
    }

    /// Bind a keyboard shortcut to this entry. May be called repeatedly.
    pub fn with_shortcut(mut self, id: impl Into<ShortcutId>) -> Self {
        self.shortcuts.push(id.into());
        self
    }

    /// Bind several keyboard shortcuts at once.
    pub fn with_shortcuts<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ShortcutId>,
    {
        self.shortcuts.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Nest child entries, turning this entry into a submenu.
    pub fn with_children(mut self, children: Vec<MenuEntry>) -> Self {
        self.children = children;
        self
    }

    /// Attach custom content, resolved immediately into a displayable node.
    pub fn with_content(mut self, source: ContentSource) -> Self {
        self.content = Some(source.resolve(&self.label));
        self
    }

    /// The display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Evaluate the disabled predicate. Entries without one are enabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled.as_ref().is_some_and(|predicate| predicate())
    }

    /// Whether this entry nests a submenu.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// The nested entries.
    pub fn children(&self) -> &[MenuEntry] {
        &self.children
    }

    /// The bound shortcut ids.
    pub fn shortcuts(&self) -> &[ShortcutId] {
        &self.shortcuts
    }

    /// Whether a click action is set.
    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// Invoke the click action, if any.
    pub fn trigger(&self) {
        if let Some(action) = &self.action {
            action();
        }
    }

    /// The displayable node for this entry; plain label text when no custom
    /// content was supplied.
    pub fn resolved_content(&self) -> ItemContent {
        self.content
            .clone()
            .unwrap_or_else(|| ItemContent::Text(self.label.clone()))
    }
}

impl fmt::Debug for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuEntry")
            .field("label", &self.label)
            .field("shortcuts", &self.shortcuts)
            .field("children", &self.children.len())
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

// ============================================================================
// Menu style
// ============================================================================

/// Layout metrics used for menu size calculation.
#[derive(Debug, Clone)]
pub struct MenuStyle {
    /// Height of one item row.
    pub item_height: f32,
    /// Vertical padding above and below the item list.
    pub padding: f32,
    /// Border width around the layout.
    pub border_width: f32,
    /// Horizontal padding on each side of a row's text.
    pub h_padding: f32,
    /// Minimum menu width.
    pub min_width: f32,
    /// Estimated width per label character.
    pub char_width: f32,
    /// Width reserved for the submenu arrow.
    pub arrow_width: f32,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            item_height: 24.0,
            padding: 4.0,
            border_width: 1.0,
            h_padding: 16.0,
            min_width: 100.0,
            char_width: 7.0,
            arrow_width: 8.0,
        }
    }
}

// ============================================================================
// MenuNode
// ============================================================================

/// One item row's scene element and vertical offset inside the layout.
#[derive(Debug, Clone)]
struct Row {
    element: ElementId,
    offset_y: f32,
}

struct NodeState {
    entries: Vec<MenuEntry>,
    rows: Vec<Row>,
    /// Parent menu for submenu chains. Set at the single point where a child
    /// node is instantiated; never mutated elsewhere, which keeps the
    /// child/parent links a simple path.
    parent: Weak<MenuNode>,
    /// The currently open (or cached-hidden) submenu. At most one per node.
    child: Option<Arc<MenuNode>>,
    child_index: Option<usize>,
}

/// One renderable, positionable menu instance with its own shortcut scope.
///
/// # Lifecycle
///
/// Created when its entry list is first rendered; rebuilt in place when the
/// menu is re-rendered with new items; hidden (not destroyed) when
/// dismissed, so repeated show/hide is cheap. The layout element, receiver
/// element, container position, and the link to a parent menu all survive a
/// rebuild; the cached submenu does not.
///
/// # States
///
/// `Hidden` and `Visible`, starting `Hidden`. A node leaves `Visible` on
/// [`hide`](Self::hide), on a non-disabled item click, or when an ancestor
/// or descendant is hidden.
pub struct MenuNode {
    scene: Scene,
    container: ElementId,
    layout: ElementId,
    receiver: ElementId,
    style: MenuStyle,
    registry: Arc<ShortcutRegistry>,
    focus: Arc<FocusTarget>,
    visible: AtomicBool,
    state: RwLock<NodeState>,
}

impl MenuNode {
    /// Create the root menu node for a container.
    pub(crate) fn new_root(
        scene: Scene,
        container: ElementId,
        entries: Vec<MenuEntry>,
        style: MenuStyle,
    ) -> Arc<Self> {
        Self::with_class(scene, container, entries, style, LAYOUT_CLASS)
    }

    fn with_class(
        scene: Scene,
        container: ElementId,
        entries: Vec<MenuEntry>,
        style: MenuStyle,
        class: &str,
    ) -> Arc<Self> {
        let layout = scene.create_element(class);
        scene.set_visible(layout, false);
        let _ = scene.append_child(container, layout);

        // The focus-receiving element is created once and reused across
        // rebuilds so listeners never accumulate on repeated construction.
        let receiver = scene.create_element(RECEIVER_CLASS);
        scene.set_visible(receiver, false);
        let _ = scene.append_child(layout, receiver);

        let registry = Arc::new(ShortcutRegistry::new());
        let focus = Arc::new(FocusTarget::new());

        let registry_gain = registry.clone();
        focus.focus_gained.connect(move |_| registry_gain.activate());
        let registry_lose = registry.clone();
        focus.focus_lost.connect(move |_| registry_lose.deactivate());

        let node = Arc::new(Self {
            scene,
            container,
            layout,
            receiver,
            style,
            registry,
            focus,
            visible: AtomicBool::new(false),
            state: RwLock::new(NodeState {
                entries: Vec::new(),
                rows: Vec::new(),
                parent: Weak::new(),
                child: None,
                child_index: None,
            }),
        });
        node.rebuild(entries);
        node
    }

    // =========================================================================
    // Build / rebuild
    // =========================================================================

    /// Replace this node's entries, discarding the previous visual list and
    /// all shortcut bindings and rebuilding from scratch.
    ///
    /// The node's position in the container and its link to a parent menu
    /// are untouched, so repeated show calls on an already-open menu refresh
    /// content without re-parenting issues. The cached submenu, if any, is
    /// dropped: it was built from the old entry list and must never be
    /// re-shown against the new one.
    pub fn rebuild(self: &Arc<Self>, entries: Vec<MenuEntry>) {
        tracing::debug!(target: targets::MENU, count = entries.len(), "rebuilding menu node");

        self.discard_submenu();

        {
            let state = self.state.read();
            for row in &state.rows {
                self.scene.remove_element(row.element);
            }
        }
        self.registry.clear();

        let size = self.preferred_size(&entries);
        let origin = self
            .scene
            .rect(self.layout)
            .map(|rect| rect.origin)
            .unwrap_or(Point::ZERO);
        self.scene.set_rect(self.layout, Rect { origin, size });

        let rows = self.build_rows(&entries, size);

        let mut state = self.state.write();
        state.entries = entries;
        state.rows = rows;
    }

    fn build_rows(self: &Arc<Self>, entries: &[MenuEntry], size: Size) -> Vec<Row> {
        let style = &self.style;
        let mut rows = Vec::with_capacity(entries.len());
        let mut offset_y = style.border_width + style.padding;
        let row_width = size.width - style.border_width * 2.0;

        for entry in entries {
            // Disabled state is re-evaluated at render time.
            let class = if entry.is_disabled() {
                ITEM_DISABLED_CLASS
            } else {
                ITEM_CLASS
            };
            let element = self.scene.create_element(class);
            self.scene.set_rect(
                element,
                Rect::new(style.border_width, offset_y, row_width, style.item_height),
            );
            let _ = self.scene.append_child(self.layout, element);

            match entry.resolved_content() {
                ItemContent::Markup(markup) => self.scene.set_text(element, markup),
                ItemContent::Text(text) => self.scene.set_text(element, text),
                ItemContent::Element(content) => {
                    let _ = self.scene.append_child(element, content);
                }
            }

            if entry.has_children() {
                let arrow = self.scene.create_element(ARROW_CLASS);
                let _ = self.scene.append_child(element, arrow);
            }

            self.bind_entry_shortcuts(entry);

            rows.push(Row { element, offset_y });
            offset_y += style.item_height;
        }

        rows
    }

    fn bind_entry_shortcuts(self: &Arc<Self>, entry: &MenuEntry) {
        for id in entry.shortcuts() {
            let entry = entry.clone();
            let node = Arc::downgrade(self);
            self.registry.bind(id.clone(), move || {
                if entry.is_disabled() {
                    return;
                }
                entry.trigger();
                if let Some(node) = node.upgrade() {
                    node.hide();
                }
            });
        }
    }

    fn preferred_size(&self, entries: &[MenuEntry]) -> Size {
        let style = &self.style;
        let mut width: f32 = 0.0;
        let mut height = style.padding * 2.0;

        for entry in entries {
            height += style.item_height;
            let text_width = entry.label().chars().count() as f32 * style.char_width;
            let arrow = if entry.has_children() {
                style.arrow_width
            } else {
                0.0
            };
            width = width.max(style.h_padding * 2.0 + text_width + arrow);
        }

        width = width.max(style.min_width) + style.border_width * 2.0;
        height += style.border_width * 2.0;

        Size::new(width, height)
    }

    // =========================================================================
    // Visibility & cascade
    // =========================================================================

    /// Check whether the node is visible.
    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    /// Show the node at its current position.
    pub fn show(&self) {
        if !self.visible.swap(true, Ordering::SeqCst) {
            tracing::debug!(target: targets::MENU, "showing menu node");
            self.scene.set_visible(self.layout, true);
        }
    }

    /// Hide the node and collapse the entire open cascade.
    ///
    /// Hiding any node also hides its current child and its parent, so one
    /// hide call closes the whole chain - a menu action or an outside click
    /// closes everything, not just the clicked level. Idempotent on a hidden
    /// node, which is also what terminates the parent/child recursion.
    pub fn hide(&self) {
        if !self.visible.swap(false, Ordering::SeqCst) {
            return;
        }
        tracing::debug!(target: targets::MENU, "hiding menu node");
        self.scene.set_visible(self.layout, false);
        self.focus.blur();

        let (child, parent) = {
            let state = self.state.read();
            (state.child.clone(), state.parent.upgrade())
        };
        if let Some(child) = child {
            child.hide();
        }
        if let Some(parent) = parent {
            parent.hide();
        }
    }

    /// Hide this node and its descendants only, leaving ancestors open.
    fn hide_subtree(&self) {
        if !self.visible.swap(false, Ordering::SeqCst) {
            return;
        }
        self.scene.set_visible(self.layout, false);
        self.focus.blur();

        let child = self.state.read().child.clone();
        if let Some(child) = child {
            child.hide_subtree();
        }
    }

    /// Close the open submenu, if any, keeping it cached for cheap re-open.
    pub fn close_submenu(&self) {
        let child = self.state.read().child.clone();
        if let Some(child) = child {
            let child_had_focus = child.focus.is_focused();
            child.hide_subtree();
            if child_had_focus && self.is_visible() {
                self.focus.focus();
            }
        }
    }

    /// Drop the cached submenu entirely, removing its elements.
    fn discard_submenu(&self) {
        let old = {
            let mut state = self.state.write();
            state.child_index = None;
            state.child.take()
        };
        if let Some(old) = old {
            let had_focus = old.focus.is_focused();
            old.hide_subtree();
            if had_focus && self.is_visible() {
                self.focus.focus();
            }
        }
    }

    // =========================================================================
    // Pointer interaction
    // =========================================================================

    /// Handle the pointer entering the row at `index`.
    ///
    /// Rows with nested entries open their submenu here; the child node is
    /// instantiated lazily on first hover and positioned against this
    /// node's layout box. Hovering any other row closes the open submenu.
    pub fn pointer_entered_row(self: &Arc<Self>, index: usize) {
        let (has_children, same_child) = {
            let state = self.state.read();
            (
                state.entries.get(index).is_some_and(MenuEntry::has_children),
                state.child_index == Some(index),
            )
        };

        if same_child {
            // Cached child: reposition and show.
            let child = self.state.read().child.clone();
            if let Some(child) = child {
                self.place_child(&child, index);
                child.show();
                self.move_focus_to(&child);
            }
            return;
        }

        // Hovering a different row: drop the previous submenu entirely.
        self.discard_submenu();

        if !has_children {
            return;
        }

        let nested = {
            let state = self.state.read();
            state.entries[index].children().to_vec()
        };
        let child = MenuNode::with_class(
            self.scene.clone(),
            self.container,
            nested,
            self.style.clone(),
            SUBMENU_CLASS,
        );
        child.set_parent(self);
        self.place_child(&child, index);
        child.show();

        {
            let mut state = self.state.write();
            state.child = Some(child.clone());
            state.child_index = Some(index);
        }
        self.move_focus_to(&child);
    }

    /// Handle the pointer leaving this node's own layout surface.
    ///
    /// A submenu dismisses itself (and its descendants) when the pointer
    /// leaves its surface; leaving the parent row does *not* dismiss it, so
    /// the pointer can travel from the parent row into the submenu. The
    /// dismissal goes through the parent's [`close_submenu`](Self::close_submenu),
    /// so the submenu stays cached for cheap re-open.
    pub fn pointer_left(&self) {
        let parent = self.state.read().parent.upgrade();
        if let Some(parent) = parent {
            parent.close_submenu();
        }
    }

    /// Handle a click on the row at `index`.
    ///
    /// The disabled predicate is re-evaluated here: a disabled row is a
    /// no-op and the menu stays open. An enabled row invokes its action and
    /// collapses the whole cascade; a submenu row opens its submenu instead.
    pub fn click_row(self: &Arc<Self>, index: usize) {
        let entry = {
            let state = self.state.read();
            match state.entries.get(index) {
                Some(entry) => entry.clone(),
                None => return,
            }
        };

        if entry.is_disabled() {
            tracing::trace!(target: targets::MENU, index, "click on disabled entry ignored");
            return;
        }

        if entry.has_children() {
            self.pointer_entered_row(index);
            return;
        }

        entry.trigger();
        self.hide();
    }

    // =========================================================================
    // Placement
    // =========================================================================

    /// The node's current rendered size.
    pub fn size(&self) -> Size {
        self.scene
            .rect(self.layout)
            .map(|rect| rect.size)
            .unwrap_or(Size::ZERO)
    }

    /// Move the layout to a container-local origin, keeping its size.
    pub fn move_to(&self, origin: Point) {
        if let Some(rect) = self.scene.rect(self.layout) {
            self.scene.set_rect(self.layout, rect.at(origin));
        }
    }

    /// Compute the boundary offsets for opening this node at `candidate`.
    pub fn boundary_hint(&self, candidate: Point) -> BoundaryHint {
        placement::boundary_hint(candidate, self.size(), self.container_bounds())
    }

    /// Show the node and place it at the candidate point, flipped away from
    /// container edges it would otherwise overflow.
    pub fn locate(&self, point: Point) {
        self.show();
        let hint = self.boundary_hint(point);
        self.move_to(hint.apply(point));
    }

    fn container_bounds(&self) -> Size {
        self.scene
            .rect(self.container)
            .map(|rect| rect.size)
            .unwrap_or(Size::ZERO)
    }

    fn place_child(&self, child: &Arc<MenuNode>, index: usize) {
        let parent_rect = self.scene.rect(self.layout).unwrap_or(Rect::ZERO);
        let row_top = parent_rect.top()
            + self
                .state
                .read()
                .rows
                .get(index)
                .map(|row| row.offset_y)
                .unwrap_or(0.0);
        let origin = placement::submenu_position(
            parent_rect,
            row_top,
            child.size(),
            self.container_bounds(),
        );
        child.move_to(origin);
    }

    // =========================================================================
    // Focus & dispatch
    // =========================================================================

    /// Give input focus to this node's receiver, activating its registry.
    pub fn focus_receiver(&self) {
        self.focus.focus();
    }

    /// Dispatch a key event down the registry chain.
    ///
    /// Tries this node's registry first, then the open submenu recursively.
    /// Only the registry whose focus target currently holds focus actually
    /// fires, so exactly one level of the cascade handles shortcuts.
    pub fn dispatch(&self, input: &mut KeyInput) -> bool {
        if self.registry.dispatch(input) {
            return true;
        }
        let child = self.state.read().child.clone();
        child.is_some_and(|child| child.dispatch(input))
    }

    /// Keyboard mode follows the open submenu: focusing the child blurs this
    /// node, making the child's registry the reachable one.
    fn move_focus_to(&self, child: &Arc<MenuNode>) {
        if self.focus.is_focused() {
            self.focus.blur();
            child.focus.focus();
        }
    }

    /// Record the parent link. This is the only place the link is mutated;
    /// it is called exactly once per child, right after instantiation.
    fn set_parent(self: &Arc<Self>, parent: &Arc<MenuNode>) {
        debug_assert!(
            !Arc::ptr_eq(self, parent),
            "a menu node cannot be its own parent"
        );
        self.state.write().parent = Arc::downgrade(parent);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// This node's shortcut registry.
    pub fn registry(&self) -> &Arc<ShortcutRegistry> {
        &self.registry
    }

    /// This node's focus-capture target.
    pub fn focus_target(&self) -> &Arc<FocusTarget> {
        &self.focus
    }

    /// The layout surface element.
    pub fn layout_element(&self) -> ElementId {
        self.layout
    }

    /// The focus-receiver element.
    pub fn receiver_element(&self) -> ElementId {
        self.receiver
    }

    /// Number of entries in the current build.
    pub fn entry_count(&self) -> usize {
        self.state.read().entries.len()
    }

    /// The open (or cached-hidden) submenu node, if any.
    pub fn open_submenu(&self) -> Option<Arc<MenuNode>> {
        self.state.read().child.clone()
    }

    /// The parent node for submenu chains, if still alive.
    pub fn parent_node(&self) -> Option<Arc<MenuNode>> {
        self.state.read().parent.upgrade()
    }
}

impl Drop for MenuNode {
    fn drop(&mut self) {
        // Rows and the receiver live under the layout; child layouts are
        // siblings and are removed by their own drop.
        self.scene.remove_element(self.layout);
    }
}

impl fmt::Debug for MenuNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuNode")
            .field("layout", &self.layout)
            .field("visible", &self.is_visible())
            .field("entries", &self.entry_count())
            .finish()
    }
}

static_assertions::assert_impl_all!(MenuNode: Send, Sync);
static_assertions::assert_impl_all!(MenuEntry: Send, Sync);
