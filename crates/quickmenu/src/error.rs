//! Error types for quickmenu.
//!
//! Only configuration mistakes are fatal. Lookup misses (an unknown key name
//! against the catalog, an unmatched shortcut against a registry) and
//! disabled-action suppression are silent non-errors by design: they degrade
//! to "unhandled" so input falls through to the host's default behavior.

use thiserror::Error;

/// Errors that can occur while constructing or driving a menu.
#[derive(Error, Debug)]
pub enum MenuError {
    /// The given container could not be resolved to a live scene element.
    #[error("container `{0}` cannot be resolved to an existing element")]
    ContainerNotFound(String),
}

/// Result type for menu operations.
pub type MenuResult<T> = Result<T, MenuError>;
