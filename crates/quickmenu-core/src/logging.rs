//! Logging facilities for quickmenu.
//!
//! quickmenu uses the `tracing` crate for instrumentation. The library never
//! installs a subscriber itself; hosts that want log output install one, for
//! example:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```
//!
//! The constants below name the per-subsystem targets so hosts can filter,
//! e.g. `RUST_LOG=quickmenu::registry=trace`.

/// Target names for log filtering.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "quickmenu_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "quickmenu_core::signal";
    /// Shortcut registry and dispatch target.
    pub const REGISTRY: &str = "quickmenu::registry";
    /// Menu node lifecycle and cascade target.
    pub const MENU: &str = "quickmenu::menu";
    /// Element scene target.
    pub const SCENE: &str = "quickmenu::scene";
    /// Focus capture target.
    pub const FOCUS: &str = "quickmenu::focus";
}
