//! StyleTarget - the widget-facing style surface
//!
//! The editing widget owns the real style table; this trait is the slice of
//! its surface the styler writes to. Slot setters are fallible so a real
//! widget can reject an out-of-range slot, which the resolver folds into its
//! boolean result.

use thiserror::Error;

use crate::theme::types::Color;

/// A style target rejected a write.
#[derive(Error, Debug)]
pub enum StyleTargetError {
    #[error("style slot {0} out of range")]
    SlotOutOfRange(u32),

    #[error("keyword set {0} out of range")]
    KeywordSetOutOfRange(usize),
}

/// The style surface of an editing widget.
///
/// Indexed slots hold per-category rendering attributes; the named setters
/// cover widget-level concerns. There is deliberately no caret background
/// setter: the modelled widget surface has none.
pub trait StyleTarget {
    /// The distinguished slot holding the baseline style.
    fn default_slot(&self) -> u32;

    /// Reset every slot and named property to the built-in baseline.
    fn reset(&mut self);

    /// Copy the default slot's record onto every slot.
    fn clear_all_to_default(&mut self);

    fn set_foreground(&mut self, slot: u32, color: Color) -> Result<(), StyleTargetError>;
    fn set_background(&mut self, slot: u32, color: Color) -> Result<(), StyleTargetError>;
    fn set_bold(&mut self, slot: u32, bold: bool) -> Result<(), StyleTargetError>;
    fn set_italic(&mut self, slot: u32, italic: bool) -> Result<(), StyleTargetError>;
    fn set_font(&mut self, slot: u32, name: &str) -> Result<(), StyleTargetError>;
    fn set_size(&mut self, slot: u32, size: u32) -> Result<(), StyleTargetError>;

    fn set_selection_foreground(&mut self, color: Color);
    fn set_selection_background(&mut self, color: Color);
    fn set_caret_foreground(&mut self, color: Color);
    fn set_edge_color(&mut self, color: Color);
    fn set_fold_margin_highlight(&mut self, color: Color);
    fn set_fold_margin_fill(&mut self, color: Color);
    fn set_whitespace_foreground(&mut self, color: Color);
    fn set_whitespace_background(&mut self, color: Color);
    fn set_current_line_background(&mut self, color: Color);

    /// Assign a space-delimited keyword list to one of the widget's keyword
    /// sets, verbatim.
    fn set_keywords(&mut self, set: usize, words: &str) -> Result<(), StyleTargetError>;
}
