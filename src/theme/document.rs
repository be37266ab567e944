//! Theme document parsing
//!
//! A theme document is XML with two relevant node kinds: top-level
//! `<WidgetStyle .../>` definitions, and `<LexerStyle name="...">` blocks
//! whose `<WordsStyle .../>` children style one rendering category each for a
//! single language. Everything else in the document is ignored.
//!
//! Attributes are validated once here, so resolution works on typed entries.
//! Nodes that cannot be used at all (no name, unusable slot id) are excluded
//! and recorded in the parse report instead of faulting a later apply pass.

use std::fs;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::errors::ThemeError;
use crate::theme::types::{Color, FontStyle, DEFAULT_FONT_NAME, DEFAULT_FONT_SIZE};

/// One named style definition, normalized from document attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleEntry {
    /// Entry name, e.g. "Default Style" or a category like "COMMENT".
    pub name: String,
    /// Declared style slot (`styleID`); 0 when not declared.
    pub slot: u32,
    /// Foreground color; `None` means "leave the slot's current value".
    pub fg: Option<Color>,
    /// Background color; same absence rule as `fg`.
    pub bg: Option<Color>,
    pub bold: bool,
    pub italic: bool,
    pub font_name: String,
    pub font_size: u32,
}

/// Styles scoped to one language, keyed by the block's `name` attribute.
#[derive(Clone, Debug)]
pub struct LexerBlock {
    pub name: String,
    pub styles: Vec<StyleEntry>,
}

/// Why a node was excluded during parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// No usable `name` attribute
    MissingName,
    /// `styleID` present but not a non-negative integer
    BadSlotId,
}

/// A node excluded during parsing.
#[derive(Clone, Debug)]
pub struct SkippedNode {
    /// Element name as it appeared in the document
    pub element: String,
    pub reason: SkipReason,
}

/// Nodes excluded while parsing a document.
#[derive(Clone, Debug, Default)]
pub struct ParseReport {
    pub skipped: Vec<SkippedNode>,
}

impl ParseReport {
    fn skip(&mut self, element: &str, reason: SkipReason) {
        log::debug!("skipping <{}> node: {:?}", element, reason);
        self.skipped.push(SkippedNode {
            element: element.to_string(),
            reason,
        });
    }
}

/// A parsed theme document.
///
/// Top-level styles and lexer blocks keep document order; lookups are
/// first-match, so an earlier node shadows a later one with the same name.
#[derive(Clone, Debug, Default)]
pub struct ThemeDocument {
    pub styles: Vec<StyleEntry>,
    pub lexers: Vec<LexerBlock>,
    pub report: ParseReport,
}

impl ThemeDocument {
    /// Parse a theme document from a string.
    ///
    /// Only malformed XML is an error; unexpected document shapes simply
    /// yield fewer entries.
    pub fn parse(input: &str) -> Result<Self, ThemeError> {
        let mut reader = Reader::from_str(input);
        let mut doc = ThemeDocument::default();
        let mut current_lexer: Option<LexerBlock> = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) if is_lexer_element(&e) => {
                    if let Some(name) = attr_value(&e, b"name").filter(|n| !n.trim().is_empty()) {
                        if let Some(block) = current_lexer.take() {
                            doc.lexers.push(block);
                        }
                        current_lexer = Some(LexerBlock {
                            name,
                            styles: Vec::new(),
                        });
                    } else {
                        doc.report.skip(&element_name(&e), SkipReason::MissingName);
                    }
                }
                Event::End(e) if e.local_name().as_ref() == b"LexerStyle" => {
                    if let Some(block) = current_lexer.take() {
                        doc.lexers.push(block);
                    }
                }
                Event::Start(e) | Event::Empty(e) if is_style_element(&e) => {
                    match entry_from_element(&e) {
                        Ok(entry) => match current_lexer.as_mut() {
                            Some(block) => block.styles.push(entry),
                            None => doc.styles.push(entry),
                        },
                        Err(reason) => doc.report.skip(&element_name(&e), reason),
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(doc)
    }

    /// Load and parse a theme document from a file.
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// First-match lookup among top-level style definitions.
    pub fn find_style(&self, name: &str) -> Option<&StyleEntry> {
        self.styles.iter().find(|s| s.name == name)
    }

    /// First-match lookup among per-language blocks.
    pub fn find_lexer(&self, name: &str) -> Option<&LexerBlock> {
        self.lexers.iter().find(|l| l.name == name)
    }
}

fn is_lexer_element(e: &BytesStart) -> bool {
    e.local_name().as_ref() == b"LexerStyle"
}

fn is_style_element(e: &BytesStart) -> bool {
    matches!(e.local_name().as_ref(), b"WidgetStyle" | b"WordsStyle")
}

fn element_name(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

/// Read one attribute as a string, `None` when absent or undecodable.
fn attr_value(e: &BytesStart, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.local_name().as_ref() == key)
        .and_then(|a| a.unescape_value().ok())
        .map(|v| v.into_owned())
}

/// Read one attribute, treating absent and blank alike.
fn attr_or_empty(e: &BytesStart, key: &[u8]) -> String {
    attr_value(e, key)
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

/// Decode a bare hex triplet attribute. Absent, blank and malformed values
/// all mean "color not specified".
fn attr_color(e: &BytesStart, key: &[u8]) -> Option<Color> {
    let raw = attr_or_empty(e, key);
    if raw.is_empty() {
        return None;
    }
    Color::from_hex(&format!("#{raw}")).ok()
}

fn entry_from_element(e: &BytesStart) -> Result<StyleEntry, SkipReason> {
    let name = attr_or_empty(e, b"name");
    if name.is_empty() {
        return Err(SkipReason::MissingName);
    }

    let raw_slot = attr_or_empty(e, b"styleID");
    let slot = if raw_slot.is_empty() {
        0
    } else {
        raw_slot.parse::<u32>().map_err(|_| SkipReason::BadSlotId)?
    };

    let style = FontStyle(attr_or_empty(e, b"fontStyle").parse().unwrap_or(0));

    let font_name = match attr_or_empty(e, b"fontName") {
        n if n.is_empty() => DEFAULT_FONT_NAME.to_string(),
        n => n,
    };
    let font_size = attr_or_empty(e, b"fontSize")
        .parse::<u32>()
        .ok()
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_FONT_SIZE);

    Ok(StyleEntry {
        name,
        slot,
        fg: attr_color(e, b"fgColor"),
        bg: attr_color(e, b"bgColor"),
        bold: style.bold(),
        italic: style.italic(),
        font_name,
        font_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
        <Styles>
            <GlobalStyles>
                <WidgetStyle name="Default Style" styleID="0" fgColor="FF0000" bgColor="000000" fontStyle="1"/>
                <WidgetStyle name="Caret colour" styleID="2069" fgColor="8000FF"/>
            </GlobalStyles>
            <LexerStyles>
                <LexerStyle name="cpp">
                    <WordsStyle name="COMMENT" styleID="1" fgColor="008000" bgColor="FFFFFF"/>
                    <WordsStyle name="NUMBER" styleID="4" fgColor="FF8000"/>
                </LexerStyle>
            </LexerStyles>
        </Styles>
    "#;

    #[test]
    fn test_parse_globals_and_lexers() {
        let doc = ThemeDocument::parse(SAMPLE).unwrap();

        assert_eq!(doc.styles.len(), 2);
        assert_eq!(doc.lexers.len(), 1);
        assert!(doc.report.skipped.is_empty());

        let default = doc.find_style("Default Style").unwrap();
        assert_eq!(default.slot, 0);
        assert_eq!(default.fg, Some(Color::RED));
        assert_eq!(default.bg, Some(Color::BLACK));
        assert!(default.bold);
        assert!(!default.italic);

        let cpp = doc.find_lexer("cpp").unwrap();
        assert_eq!(cpp.styles.len(), 2);
        assert_eq!(cpp.styles[0].name, "COMMENT");
        assert_eq!(cpp.styles[1].bg, None);
    }

    #[test]
    fn test_find_style_is_first_match() {
        let doc = ThemeDocument::parse(
            r#"
            <Styles>
                <WidgetStyle name="Fold" styleID="3" fgColor="111111"/>
                <WidgetStyle name="Fold" styleID="7" fgColor="222222"/>
            </Styles>
        "#,
        )
        .unwrap();

        let fold = doc.find_style("Fold").unwrap();
        assert_eq!(fold.slot, 3);
        assert_eq!(fold.fg, Some(Color::rgb(0x11, 0x11, 0x11)));
    }

    #[test]
    fn test_missing_name_is_skipped() {
        let doc = ThemeDocument::parse(
            r#"
            <Styles>
                <WidgetStyle styleID="5" fgColor="000000"/>
                <WidgetStyle name="  " styleID="6"/>
                <WidgetStyle name="Kept" styleID="7"/>
            </Styles>
        "#,
        )
        .unwrap();

        assert_eq!(doc.styles.len(), 1);
        assert_eq!(doc.styles[0].name, "Kept");
        assert_eq!(doc.report.skipped.len(), 2);
        assert!(doc
            .report
            .skipped
            .iter()
            .all(|s| s.reason == SkipReason::MissingName));
    }

    #[test]
    fn test_bad_slot_id_is_skipped() {
        let doc = ThemeDocument::parse(
            r#"<Styles><WidgetStyle name="Broken" styleID="banana"/></Styles>"#,
        )
        .unwrap();

        assert!(doc.styles.is_empty());
        assert_eq!(doc.report.skipped[0].reason, SkipReason::BadSlotId);
    }

    #[test]
    fn test_blank_and_malformed_colors_are_absent() {
        let doc = ThemeDocument::parse(
            r#"
            <Styles>
                <WidgetStyle name="A" styleID="1" fgColor="" bgColor="zzzzzz"/>
                <WidgetStyle name="B" styleID="2"/>
            </Styles>
        "#,
        )
        .unwrap();

        let a = doc.find_style("A").unwrap();
        assert_eq!(a.fg, None);
        assert_eq!(a.bg, None);

        let b = doc.find_style("B").unwrap();
        assert_eq!(b.fg, None);
        assert_eq!(b.bg, None);
    }

    #[test]
    fn test_attribute_defaults() {
        let doc =
            ThemeDocument::parse(r#"<Styles><WidgetStyle name="A" fontSize="0"/></Styles>"#)
                .unwrap();

        let a = doc.find_style("A").unwrap();
        assert_eq!(a.slot, 0);
        assert_eq!(a.font_name, DEFAULT_FONT_NAME);
        assert_eq!(a.font_size, DEFAULT_FONT_SIZE);
        assert!(!a.bold);
        assert!(!a.italic);
    }

    #[test]
    fn test_unknown_elements_ignored() {
        let doc = ThemeDocument::parse(
            r#"
            <Styles>
                <Mystery name="nope"/>
                <WidgetStyle name="Real" styleID="1"/>
            </Styles>
        "#,
        )
        .unwrap();

        assert_eq!(doc.styles.len(), 1);
        assert!(doc.report.skipped.is_empty());
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        assert!(ThemeDocument::parse("<Styles><WidgetStyle").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let doc = ThemeDocument::load(file.path()).unwrap();
        assert!(doc.find_style("Default Style").is_some());

        assert!(ThemeDocument::load(Path::new("/no/such/theme.xml")).is_err());
    }
}
