//! Core systems for quickmenu.
//!
//! This crate provides the foundational pieces shared by the quickmenu
//! widget crate:
//!
//! - **Geometry**: `Point`, `Size`, `Rect` used for placement math
//! - **Signal/Slot System**: type-safe notification between components
//! - **Logging targets**: `tracing` target names for per-subsystem filtering
//!
//! # Signal/Slot Example
//!
//! ```
//! use quickmenu_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```

pub mod geometry;
pub mod logging;
pub mod signal;

pub use geometry::{Point, Rect, Size};
pub use signal::{ConnectionId, Signal};
