//! lexstyle - file-to-language detection and editor style-table configuration
//!
//! Maps a source file to a language identity, then fills an editing widget's
//! indexed style slots and keyword sets from per-language defaults, optionally
//! overlaid with an externally authored XML theme document. The widget itself
//! stays behind the [`StyleTarget`] trait; this crate only decides what goes
//! into each slot.

pub mod config;
pub mod errors;
pub mod language;
pub mod style;
pub mod styler;
pub mod theme;

// Public API re-exports
pub use config::{ConfigError, StylerConfig};
pub use errors::ThemeError;
pub use language::{Language, LanguageRegistry};
pub use style::{ResolvedStyle, StyleSheet, StyleTarget, StyleTargetError};
pub use styler::DocumentStyler;
pub use theme::{ApplyFlags, Color, StyleEntry, ThemeDocument, ThemeResolver};
