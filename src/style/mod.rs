//! Style target surface and in-memory sheet

pub mod sheet;
pub mod store;

// Public API re-exports
pub use sheet::{ResolvedStyle, StyleSheet, WidgetColors, DEFAULT_SLOT, KEYWORD_SET_COUNT};
pub use store::{StyleTarget, StyleTargetError};
