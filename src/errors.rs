//! Crate error types
//!
//! Theme application keeps a boolean outer contract; these are the typed
//! errors produced behind it and surfaced through the `try_*` variants.

use thiserror::Error;

use crate::style::StyleTargetError;

/// Errors from loading or applying a theme document.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Theme file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Document is not well-formed XML
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The style target rejected a write
    #[error("Style target error: {0}")]
    Target(#[from] StyleTargetError),
}
