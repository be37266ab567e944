//! ThemeResolver - applies a parsed theme document onto a style target
//!
//! Precedence for the default slot: "Global override" (when enabled) writes
//! first, "Default Style" writes after it unconditionally, then the whole
//! table is cleared to that baseline before per-category styles land on top.
//!
//! Every public `apply_*` operation returns a plain success flag and never
//! panics or propagates; styling is cosmetic and must not take the host down.
//! The typed error behind a `false` is logged and available through the
//! `try_*` variants.

use crate::errors::ThemeError;
use crate::language::Language;
use crate::style::StyleTarget;
use crate::theme::document::{StyleEntry, ThemeDocument};

/// Entry name overriding the default slot ahead of "Default Style".
pub const GLOBAL_OVERRIDE: &str = "Global override";

/// Entry name holding the baseline style for the default slot.
pub const DEFAULT_STYLE: &str = "Default Style";

/// Entries applied straight onto the slot they declare rather than through a
/// named widget property.
const DIRECT_SLOT_STYLES: &[&str] = &[
    "Indent guideline style",
    "Brace highlight style",
    "Bad brace colour",
    "Line number margin",
    "Bookmark margin",
    "Fold",
    "Fold active",
    "Find Mark Style",
    "Smart HighLighting",
    "Incremental highlight all",
    "Tags match highlighting",
    "Tags attribute",
    "Mark colour",
];

/// Named entries that map to widget-level settings instead of numbered slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpecialStyle {
    SelectedText,
    Caret,
    Edge,
    FoldMargin,
    WhiteSpace,
    CurrentLine,
}

impl SpecialStyle {
    /// Exact-name lookup; unknown names are not special (and get ignored by
    /// the special-style pass, keeping themes forward compatible).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Selected text colour" => Some(Self::SelectedText),
            "Caret colour" => Some(Self::Caret),
            "Edge colour" => Some(Self::Edge),
            "Fold margin" => Some(Self::FoldMargin),
            "White space symbol" => Some(Self::WhiteSpace),
            "Current line background colour" => Some(Self::CurrentLine),
            _ => None,
        }
    }
}

/// Flags gating the optional parts of theme application.
#[derive(Clone, Copy, Debug)]
pub struct ApplyFlags {
    /// Apply the "Global override" entry before "Default Style"
    pub use_global_override: bool,
    /// Let the theme change the default slot's font name and size
    pub apply_font: bool,
    /// Apply "Selected text colour"
    pub use_selection_colors: bool,
    /// Apply "Fold margin"
    pub use_margin_colors: bool,
    /// Apply "White space symbol"
    pub use_whitespace: bool,
}

impl Default for ApplyFlags {
    fn default() -> Self {
        Self {
            use_global_override: true,
            apply_font: true,
            use_selection_colors: true,
            use_margin_colors: true,
            use_whitespace: true,
        }
    }
}

/// Resolves named theme entries and writes them into a [`StyleTarget`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ThemeResolver {
    flags: ApplyFlags,
}

impl ThemeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flags(flags: ApplyFlags) -> Self {
        Self { flags }
    }

    pub fn flags(&self) -> &ApplyFlags {
        &self.flags
    }

    /// First-match lookup among the document's top-level style definitions.
    ///
    /// Absence is not an error; callers fall back to defaults.
    pub fn resolve_entry<'a>(&self, doc: &'a ThemeDocument, name: &str) -> Option<&'a StyleEntry> {
        doc.find_style(name)
    }

    /// Reset the target and establish its baseline from "Global override"
    /// (when enabled) and "Default Style".
    pub fn apply_global_and_default(&self, doc: &ThemeDocument, target: &mut dyn StyleTarget) -> bool {
        swallow(
            "global/default pass",
            self.try_apply_global_and_default(doc, target),
        )
    }

    /// Fallible form of [`apply_global_and_default`](Self::apply_global_and_default).
    pub fn try_apply_global_and_default(
        &self,
        doc: &ThemeDocument,
        target: &mut dyn StyleTarget,
    ) -> Result<(), ThemeError> {
        target.reset();

        if self.flags.use_global_override {
            if let Some(entry) = doc.find_style(GLOBAL_OVERRIDE) {
                self.apply_to_default_slots(entry, target)?;
            }
        }
        // Default Style has the final word for the baseline, whether or not
        // the override ran.
        if let Some(entry) = doc.find_style(DEFAULT_STYLE) {
            self.apply_to_default_slots(entry, target)?;
        }

        target.clear_all_to_default();
        Ok(())
    }

    /// Walk every top-level style definition and dispatch the special ones.
    pub fn apply_special_styles(&self, doc: &ThemeDocument, target: &mut dyn StyleTarget) -> bool {
        swallow(
            "special-style pass",
            self.try_apply_special_styles(doc, target),
        )
    }

    /// Fallible form of [`apply_special_styles`](Self::apply_special_styles).
    pub fn try_apply_special_styles(
        &self,
        doc: &ThemeDocument,
        target: &mut dyn StyleTarget,
    ) -> Result<(), ThemeError> {
        for entry in &doc.styles {
            if DIRECT_SLOT_STYLES.contains(&entry.name.as_str()) {
                self.apply_to_declared_slot(entry, target)?;
                continue;
            }

            let Some(special) = SpecialStyle::from_name(&entry.name) else {
                continue;
            };
            match special {
                SpecialStyle::SelectedText => {
                    if self.flags.use_selection_colors {
                        if let Some(fg) = entry.fg {
                            target.set_selection_foreground(fg);
                        }
                        if let Some(bg) = entry.bg {
                            target.set_selection_background(bg);
                        }
                    }
                }
                SpecialStyle::Caret => {
                    // The target surface has no caret background property.
                    if let Some(fg) = entry.fg {
                        target.set_caret_foreground(fg);
                    }
                }
                SpecialStyle::Edge => {
                    if let Some(fg) = entry.fg {
                        target.set_edge_color(fg);
                    }
                }
                SpecialStyle::FoldMargin => {
                    if self.flags.use_margin_colors {
                        if let Some(fg) = entry.fg {
                            target.set_fold_margin_highlight(fg);
                        }
                        if let Some(bg) = entry.bg {
                            target.set_fold_margin_fill(bg);
                        }
                    }
                }
                SpecialStyle::WhiteSpace => {
                    if self.flags.use_whitespace {
                        if let Some(fg) = entry.fg {
                            target.set_whitespace_foreground(fg);
                        }
                        if let Some(bg) = entry.bg {
                            target.set_whitespace_background(bg);
                        }
                    }
                }
                SpecialStyle::CurrentLine => {
                    if let Some(bg) = entry.bg {
                        target.set_current_line_background(bg);
                    }
                }
            }
        }
        Ok(())
    }

    /// Apply the per-language block matching `language` onto its declared
    /// slots. A missing block is success with nothing changed.
    pub fn apply_lexer_styles(
        &self,
        doc: &ThemeDocument,
        target: &mut dyn StyleTarget,
        language: Language,
    ) -> bool {
        swallow(
            "lexer-style pass",
            self.try_apply_lexer_styles(doc, target, language),
        )
    }

    /// Fallible form of [`apply_lexer_styles`](Self::apply_lexer_styles).
    pub fn try_apply_lexer_styles(
        &self,
        doc: &ThemeDocument,
        target: &mut dyn StyleTarget,
        language: Language,
    ) -> Result<(), ThemeError> {
        let block_name = language.theme_name();
        let Some(block) = doc.find_lexer(block_name) else {
            log::debug!("theme has no '{block_name}' block");
            return Ok(());
        };

        for entry in &block.styles {
            // Colors only land when the entry declares both; a half-specified
            // entry keeps the slot's current colors.
            if let (Some(fg), Some(bg)) = (entry.fg, entry.bg) {
                target.set_foreground(entry.slot, fg)?;
                target.set_background(entry.slot, bg)?;
            }
            target.set_bold(entry.slot, entry.bold)?;
            target.set_italic(entry.slot, entry.italic)?;
        }
        Ok(())
    }

    /// Write an entry onto slot 0 and the target's default slot, when
    /// distinct. The entry's own declared slot is not consulted here.
    fn apply_to_default_slots(
        &self,
        entry: &StyleEntry,
        target: &mut dyn StyleTarget,
    ) -> Result<(), ThemeError> {
        let default_slot = target.default_slot();
        let mut slots = [Some(0), None];
        if default_slot != 0 {
            slots[1] = Some(default_slot);
        }

        for slot in slots.into_iter().flatten() {
            if let Some(fg) = entry.fg {
                target.set_foreground(slot, fg)?;
            }
            if let Some(bg) = entry.bg {
                target.set_background(slot, bg)?;
            }
            // Explicit false is meaningful for the font flags.
            target.set_bold(slot, entry.bold)?;
            target.set_italic(slot, entry.italic)?;
            if self.flags.apply_font && slot == default_slot {
                target.set_font(slot, &entry.font_name)?;
                target.set_size(slot, entry.font_size)?;
            }
        }
        Ok(())
    }

    /// Write an entry onto the slot it declares; font attributes only reach
    /// the default slot.
    fn apply_to_declared_slot(
        &self,
        entry: &StyleEntry,
        target: &mut dyn StyleTarget,
    ) -> Result<(), ThemeError> {
        if let Some(fg) = entry.fg {
            target.set_foreground(entry.slot, fg)?;
        }
        if let Some(bg) = entry.bg {
            target.set_background(entry.slot, bg)?;
        }
        target.set_bold(entry.slot, entry.bold)?;
        target.set_italic(entry.slot, entry.italic)?;
        if entry.slot == target.default_slot() {
            target.set_font(entry.slot, &entry.font_name)?;
            target.set_size(entry.slot, entry.font_size)?;
        }
        Ok(())
    }
}

fn swallow(what: &str, result: Result<(), ThemeError>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("{what} failed: {e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleSheet;
    use crate::theme::types::Color;

    fn doc(xml: &str) -> ThemeDocument {
        ThemeDocument::parse(xml).unwrap()
    }

    #[test]
    fn test_default_style_scenario() {
        let doc = doc(
            r#"<Styles><WidgetStyle name="Default Style" styleID="0" fgColor="FF0000" bgColor="000000" fontStyle="1"/></Styles>"#,
        );
        let mut sheet = StyleSheet::new();
        let resolver = ThemeResolver::with_flags(ApplyFlags {
            use_global_override: false,
            apply_font: true,
            ..ApplyFlags::default()
        });

        assert!(resolver.apply_global_and_default(&doc, &mut sheet));

        let slot0 = sheet.slot(0).unwrap();
        assert_eq!(slot0.foreground, Color::rgb(255, 0, 0));
        assert_eq!(slot0.background, Color::BLACK);
        assert!(slot0.bold);
        assert!(!slot0.italic);
    }

    #[test]
    fn test_global_override_gated_by_flag() {
        let doc = doc(
            r#"
            <Styles>
                <WidgetStyle name="Global override" styleID="0" fgColor="00FF00" bgColor="00FF00"/>
                <WidgetStyle name="Default Style" styleID="0" fgColor="FF0000"/>
            </Styles>
        "#,
        );

        let mut sheet = StyleSheet::new();
        let off = ThemeResolver::with_flags(ApplyFlags {
            use_global_override: false,
            ..ApplyFlags::default()
        });
        assert!(off.apply_global_and_default(&doc, &mut sheet));

        // Override colors never landed; Default Style still did. Its absent
        // background keeps the baseline value.
        let slot0 = sheet.slot(0).unwrap();
        assert_eq!(slot0.foreground, Color::RED);
        assert_ne!(slot0.background, Color::GREEN);

        let mut sheet = StyleSheet::new();
        let on = ThemeResolver::new();
        assert!(on.apply_global_and_default(&doc, &mut sheet));

        // Default Style runs after the override and wins the foreground; the
        // override's background survives because Default Style omits one.
        let slot0 = sheet.slot(0).unwrap();
        assert_eq!(slot0.foreground, Color::RED);
        assert_eq!(slot0.background, Color::GREEN);
    }

    #[test]
    fn test_absent_color_preserves_prior_value() {
        let doc = doc(r#"<Styles><WidgetStyle name="Fold" styleID="7" fontStyle="1"/></Styles>"#);
        let mut sheet = StyleSheet::new();
        sheet
            .set_foreground(7, Color::BLUE)
            .and_then(|_| sheet.set_background(7, Color::GREEN))
            .unwrap();

        assert!(ThemeResolver::new().apply_special_styles(&doc, &mut sheet));

        let slot = sheet.slot(7).unwrap();
        assert_eq!(slot.foreground, Color::BLUE);
        assert_eq!(slot.background, Color::GREEN);
        assert!(slot.bold);
    }

    #[test]
    fn test_clear_all_establishes_baseline() {
        let doc = doc(
            r#"<Styles><WidgetStyle name="Default Style" fgColor="123456" bgColor="654321"/></Styles>"#,
        );
        let mut sheet = StyleSheet::new();
        assert!(ThemeResolver::new().apply_global_and_default(&doc, &mut sheet));

        // Every slot now carries the baseline.
        let baseline = sheet.slot(sheet.default_slot()).unwrap().clone();
        assert_eq!(sheet.slot(77).unwrap(), &baseline);
        assert_eq!(baseline.foreground, Color::rgb(0x12, 0x34, 0x56));
    }

    #[test]
    fn test_resolve_entry_absent_is_none() {
        let doc = doc(r#"<Styles><WidgetStyle name="Something" styleID="1"/></Styles>"#);
        assert!(ThemeResolver::new().resolve_entry(&doc, "Fold").is_none());
    }

    #[test]
    fn test_lexer_colors_require_both() {
        let doc = doc(
            r#"
            <Styles>
                <LexerStyle name="cpp">
                    <WordsStyle name="COMMENT" styleID="1" fgColor="008000" fontStyle="2"/>
                    <WordsStyle name="NUMBER" styleID="4" fgColor="FF8000" bgColor="FFFFFF"/>
                </LexerStyle>
            </Styles>
        "#,
        );
        let mut sheet = StyleSheet::new();
        let before = sheet.slot(1).unwrap().clone();

        assert!(ThemeResolver::new().apply_lexer_styles(&doc, &mut sheet, Language::Cpp));

        // Half-specified entry: colors untouched, font flags still applied.
        let comment = sheet.slot(1).unwrap();
        assert_eq!(comment.foreground, before.foreground);
        assert_eq!(comment.background, before.background);
        assert!(comment.italic);

        let number = sheet.slot(4).unwrap();
        assert_eq!(number.foreground, Color::rgb(0xFF, 0x80, 0x00));
        assert_eq!(number.background, Color::WHITE);
    }

    #[test]
    fn test_unmapped_language_falls_back_to_text() {
        let doc = doc(r#"<Styles><LexerStyle name="cpp"/></Styles>"#);
        let mut sheet = StyleSheet::new();

        // Nfo has no block of its own and resolves against "text", which this
        // document lacks; that is success with nothing changed.
        assert_eq!(Language::Nfo.theme_name(), "text");
        assert!(ThemeResolver::new().apply_lexer_styles(&doc, &mut sheet, Language::Nfo));
        assert_eq!(sheet.slot(0).unwrap(), &crate::style::ResolvedStyle::default());
    }

    #[test]
    fn test_special_styles_dispatch() {
        let doc = doc(
            r#"
            <Styles>
                <WidgetStyle name="Selected text colour" styleID="0" fgColor="FFFFFF" bgColor="0000FF"/>
                <WidgetStyle name="Caret colour" styleID="2069" fgColor="FF0000" bgColor="00FF00"/>
                <WidgetStyle name="Edge colour" styleID="0" fgColor="808080"/>
                <WidgetStyle name="Fold margin" styleID="0" fgColor="111111" bgColor="222222"/>
                <WidgetStyle name="White space symbol" styleID="0" fgColor="333333"/>
                <WidgetStyle name="Current line background colour" styleID="0" bgColor="444444"/>
                <WidgetStyle name="Future entry kind" styleID="0" fgColor="555555"/>
            </Styles>
        "#,
        );
        let mut sheet = StyleSheet::new();
        assert!(ThemeResolver::new().apply_special_styles(&doc, &mut sheet));

        let colors = sheet.colors();
        assert_eq!(colors.selection_foreground, Some(Color::WHITE));
        assert_eq!(colors.selection_background, Some(Color::BLUE));
        // Caret background is intentionally unsupported.
        assert_eq!(colors.caret_foreground, Some(Color::RED));
        assert_eq!(colors.edge, Some(Color::rgb(0x80, 0x80, 0x80)));
        assert_eq!(colors.fold_margin_highlight, Some(Color::rgb(0x11, 0x11, 0x11)));
        assert_eq!(colors.fold_margin_fill, Some(Color::rgb(0x22, 0x22, 0x22)));
        assert_eq!(colors.whitespace_foreground, Some(Color::rgb(0x33, 0x33, 0x33)));
        assert_eq!(colors.whitespace_background, None);
        assert_eq!(colors.current_line_background, Some(Color::rgb(0x44, 0x44, 0x44)));
    }

    #[test]
    fn test_special_styles_respect_flags() {
        let doc = doc(
            r#"
            <Styles>
                <WidgetStyle name="Selected text colour" fgColor="FFFFFF" bgColor="0000FF"/>
                <WidgetStyle name="Fold margin" fgColor="111111" bgColor="222222"/>
                <WidgetStyle name="White space symbol" fgColor="333333" bgColor="444444"/>
                <WidgetStyle name="Current line background colour" bgColor="555555"/>
            </Styles>
        "#,
        );
        let mut sheet = StyleSheet::new();
        let resolver = ThemeResolver::with_flags(ApplyFlags {
            use_selection_colors: false,
            use_margin_colors: false,
            use_whitespace: false,
            ..ApplyFlags::default()
        });
        assert!(resolver.apply_special_styles(&doc, &mut sheet));

        let colors = sheet.colors();
        assert_eq!(colors.selection_foreground, None);
        assert_eq!(colors.fold_margin_fill, None);
        assert_eq!(colors.whitespace_foreground, None);
        // Current line is not gated.
        assert_eq!(colors.current_line_background, Some(Color::rgb(0x55, 0x55, 0x55)));
    }

    #[test]
    fn test_out_of_range_slot_collapses_to_false() {
        let doc = doc(r#"<Styles><WidgetStyle name="Fold" styleID="9999" fgColor="111111" bgColor="222222"/></Styles>"#);
        let mut sheet = StyleSheet::new();

        assert!(!ThemeResolver::new().apply_special_styles(&doc, &mut sheet));
        assert!(ThemeResolver::new()
            .try_apply_special_styles(&doc, &mut sheet)
            .is_err());
    }

    #[test]
    fn test_full_document_round_trip() {
        let doc = doc(
            r#"
            <Styles>
                <WidgetStyle name="Default Style" styleID="0" fgColor="010203" bgColor="FAFBFC"/>
                <LexerStyle name="python">
                    <WordsStyle name="COMMENTLINE" styleID="1" fgColor="008000" bgColor="FFFFFF"/>
                    <WordsStyle name="NUMBER" styleID="2" fgColor="FF8000" bgColor="FFFFFF"/>
                    <WordsStyle name="STRING" styleID="3" fgColor="808080" bgColor="FFFFFF"/>
                </LexerStyle>
            </Styles>
        "#,
        );
        let mut sheet = StyleSheet::new();
        let resolver = ThemeResolver::new();
        assert!(resolver.apply_global_and_default(&doc, &mut sheet));
        assert!(resolver.apply_lexer_styles(&doc, &mut sheet, Language::Python));

        assert_eq!(sheet.slot(0).unwrap().foreground, Color::rgb(1, 2, 3));
        assert_eq!(sheet.slot(1).unwrap().foreground, Color::rgb(0, 0x80, 0));
        assert_eq!(sheet.slot(2).unwrap().foreground, Color::rgb(0xFF, 0x80, 0));
        assert_eq!(sheet.slot(3).unwrap().foreground, Color::rgb(0x80, 0x80, 0x80));
        for slot in [1, 2, 3] {
            assert_eq!(sheet.slot(slot).unwrap().background, Color::WHITE);
        }
    }
}
