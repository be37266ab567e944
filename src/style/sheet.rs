//! StyleSheet - in-memory StyleTarget implementation
//!
//! Used by tests and by hosts that stage a resolved style set before pushing
//! it into a real widget.

use crate::style::store::{StyleTarget, StyleTargetError};
use crate::theme::types::{Color, DEFAULT_FONT_NAME, DEFAULT_FONT_SIZE};

/// Slot index conventionally holding the baseline style.
pub const DEFAULT_SLOT: u32 = 32;

/// Number of keyword sets the modelled widget exposes.
pub const KEYWORD_SET_COUNT: usize = 9;

const SLOT_COUNT: usize = 128;

/// One resolved style slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedStyle {
    pub foreground: Color,
    pub background: Color,
    pub bold: bool,
    pub italic: bool,
    pub font_name: String,
    pub font_size: u32,
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        Self {
            foreground: Color::BLACK,
            background: Color::WHITE,
            bold: false,
            italic: false,
            font_name: DEFAULT_FONT_NAME.to_string(),
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

/// Widget-level colors set by the special-style pass.
///
/// `None` means the theme never touched the property and the widget keeps
/// its own default.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WidgetColors {
    pub selection_foreground: Option<Color>,
    pub selection_background: Option<Color>,
    pub caret_foreground: Option<Color>,
    pub edge: Option<Color>,
    pub fold_margin_highlight: Option<Color>,
    pub fold_margin_fill: Option<Color>,
    pub whitespace_foreground: Option<Color>,
    pub whitespace_background: Option<Color>,
    pub current_line_background: Option<Color>,
}

/// In-memory style table with the full [`StyleTarget`] surface.
#[derive(Clone, Debug)]
pub struct StyleSheet {
    slots: Vec<ResolvedStyle>,
    default_slot: u32,
    colors: WidgetColors,
    keywords: Vec<Option<String>>,
}

impl StyleSheet {
    /// Sheet with the conventional layout (128 slots, default slot 32).
    pub fn new() -> Self {
        Self::with_layout(SLOT_COUNT, DEFAULT_SLOT)
    }

    /// Sheet with a caller-chosen slot count and default slot. The count is
    /// grown if needed so the default slot is always addressable.
    pub fn with_layout(slot_count: usize, default_slot: u32) -> Self {
        let slot_count = slot_count.max(default_slot as usize + 1);
        Self {
            slots: vec![ResolvedStyle::default(); slot_count],
            default_slot,
            colors: WidgetColors::default(),
            keywords: vec![None; KEYWORD_SET_COUNT],
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Read one slot's resolved record.
    pub fn slot(&self, id: u32) -> Option<&ResolvedStyle> {
        self.slots.get(id as usize)
    }

    /// Widget-level colors written so far.
    pub fn colors(&self) -> &WidgetColors {
        &self.colors
    }

    /// Keyword list stored in a set, if any.
    pub fn keywords(&self, set: usize) -> Option<&str> {
        self.keywords.get(set)?.as_deref()
    }

    fn slot_mut(&mut self, id: u32) -> Result<&mut ResolvedStyle, StyleTargetError> {
        self.slots
            .get_mut(id as usize)
            .ok_or(StyleTargetError::SlotOutOfRange(id))
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleTarget for StyleSheet {
    fn default_slot(&self) -> u32 {
        self.default_slot
    }

    fn reset(&mut self) {
        self.slots.fill(ResolvedStyle::default());
        self.colors = WidgetColors::default();
        self.keywords = vec![None; self.keywords.len()];
    }

    fn clear_all_to_default(&mut self) {
        let baseline = self.slots[self.default_slot as usize].clone();
        self.slots.fill(baseline);
    }

    fn set_foreground(&mut self, slot: u32, color: Color) -> Result<(), StyleTargetError> {
        self.slot_mut(slot)?.foreground = color;
        Ok(())
    }

    fn set_background(&mut self, slot: u32, color: Color) -> Result<(), StyleTargetError> {
        self.slot_mut(slot)?.background = color;
        Ok(())
    }

    fn set_bold(&mut self, slot: u32, bold: bool) -> Result<(), StyleTargetError> {
        self.slot_mut(slot)?.bold = bold;
        Ok(())
    }

    fn set_italic(&mut self, slot: u32, italic: bool) -> Result<(), StyleTargetError> {
        self.slot_mut(slot)?.italic = italic;
        Ok(())
    }

    fn set_font(&mut self, slot: u32, name: &str) -> Result<(), StyleTargetError> {
        self.slot_mut(slot)?.font_name = name.to_string();
        Ok(())
    }

    fn set_size(&mut self, slot: u32, size: u32) -> Result<(), StyleTargetError> {
        self.slot_mut(slot)?.font_size = size;
        Ok(())
    }

    fn set_selection_foreground(&mut self, color: Color) {
        self.colors.selection_foreground = Some(color);
    }

    fn set_selection_background(&mut self, color: Color) {
        self.colors.selection_background = Some(color);
    }

    fn set_caret_foreground(&mut self, color: Color) {
        self.colors.caret_foreground = Some(color);
    }

    fn set_edge_color(&mut self, color: Color) {
        self.colors.edge = Some(color);
    }

    fn set_fold_margin_highlight(&mut self, color: Color) {
        self.colors.fold_margin_highlight = Some(color);
    }

    fn set_fold_margin_fill(&mut self, color: Color) {
        self.colors.fold_margin_fill = Some(color);
    }

    fn set_whitespace_foreground(&mut self, color: Color) {
        self.colors.whitespace_foreground = Some(color);
    }

    fn set_whitespace_background(&mut self, color: Color) {
        self.colors.whitespace_background = Some(color);
    }

    fn set_current_line_background(&mut self, color: Color) {
        self.colors.current_line_background = Some(color);
    }

    fn set_keywords(&mut self, set: usize, words: &str) -> Result<(), StyleTargetError> {
        let slot = self
            .keywords
            .get_mut(set)
            .ok_or(StyleTargetError::KeywordSetOutOfRange(set))?;
        *slot = Some(words.to_string());
        Ok(())
    }
}
