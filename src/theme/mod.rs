//! Theme module - document parsing and style resolution

pub mod document;
pub mod resolver;
pub mod types;

// Public API re-exports
pub use document::{LexerBlock, ParseReport, SkipReason, SkippedNode, StyleEntry, ThemeDocument};
pub use resolver::{ApplyFlags, SpecialStyle, ThemeResolver, DEFAULT_STYLE, GLOBAL_OVERRIDE};
pub use types::{Color, ColorError, FontStyle, DEFAULT_FONT_NAME, DEFAULT_FONT_SIZE};
