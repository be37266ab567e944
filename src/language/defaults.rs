//! Per-language default style tables
//!
//! The values a language's categories take when no theme document is loaded
//! or a category is missing from the theme. Slot numbering follows the
//! modelled widget's per-lexer style ids. Process-wide immutable data; the
//! resolver only reads it.

use crate::language::id::Language;
use crate::theme::types::Color;

/// One category default in a language's style table.
#[derive(Clone, Copy, Debug)]
pub struct CategoryStyle {
    pub name: &'static str,
    pub slot: u32,
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub italic: bool,
}

const fn cat(name: &'static str, slot: u32, fg: Color) -> CategoryStyle {
    CategoryStyle {
        name,
        slot,
        fg,
        bg: Color::WHITE,
        bold: false,
        italic: false,
    }
}

const fn cat_bold(name: &'static str, slot: u32, fg: Color) -> CategoryStyle {
    CategoryStyle {
        name,
        slot,
        fg,
        bg: Color::WHITE,
        bold: true,
        italic: false,
    }
}

const fn cat_italic(name: &'static str, slot: u32, fg: Color) -> CategoryStyle {
    CategoryStyle {
        name,
        slot,
        fg,
        bg: Color::WHITE,
        bold: false,
        italic: true,
    }
}

// Shared default palette
const PLAIN: Color = Color::BLACK;
const COMMENT: Color = Color::rgb(0x00, 0x80, 0x00);
const NUMBER: Color = Color::rgb(0xFF, 0x80, 0x00);
const KEYWORD: Color = Color::rgb(0x00, 0x00, 0xFF);
const STRING: Color = Color::rgb(0x80, 0x80, 0x80);
const PREPROC: Color = Color::rgb(0x80, 0x40, 0x00);
const OPERATOR: Color = Color::rgb(0x00, 0x00, 0x80);
const TYPE: Color = Color::rgb(0x80, 0x00, 0xFF);
const LABEL: Color = Color::rgb(0xFF, 0x00, 0x00);
const TAG: Color = Color::rgb(0x00, 0x00, 0x80);
const ATTRIBUTE: Color = Color::rgb(0xFF, 0x00, 0x00);
const VARIABLE: Color = Color::rgb(0x00, 0x80, 0x80);

const TEXT_STYLES: &[CategoryStyle] = &[cat("DEFAULT", 0, PLAIN)];

const C_FAMILY_STYLES: &[CategoryStyle] = &[
    cat("DEFAULT", 0, PLAIN),
    cat("COMMENT", 1, COMMENT),
    cat("COMMENT LINE", 2, COMMENT),
    cat_italic("COMMENT DOC", 3, COMMENT),
    cat("NUMBER", 4, NUMBER),
    cat_bold("INSTRUCTION WORD", 5, KEYWORD),
    cat("STRING", 6, STRING),
    cat("CHARACTER", 7, STRING),
    cat("PREPROCESSOR", 9, PREPROC),
    cat_bold("OPERATOR", 10, OPERATOR),
    cat("IDENTIFIER", 11, PLAIN),
    cat_bold("TYPE WORD", 16, TYPE),
];

const PYTHON_STYLES: &[CategoryStyle] = &[
    cat("DEFAULT", 0, PLAIN),
    cat("COMMENTLINE", 1, COMMENT),
    cat("NUMBER", 2, NUMBER),
    cat("STRING", 3, STRING),
    cat("CHARACTER", 4, STRING),
    cat_bold("KEYWORDS", 5, KEYWORD),
    cat("TRIPLE", 6, STRING),
    cat("TRIPLEDOUBLE", 7, STRING),
    cat_bold("CLASSNAME", 8, TYPE),
    cat_bold("DEFNAME", 9, Color::rgb(0xFF, 0x00, 0xFF)),
    cat_bold("OPERATOR", 10, OPERATOR),
    cat("IDENTIFIER", 11, PLAIN),
    cat_italic("COMMENTBLOCK", 12, COMMENT),
];

const PERL_STYLES: &[CategoryStyle] = &[
    cat("DEFAULT", 0, PLAIN),
    cat("COMMENTLINE", 2, COMMENT),
    cat_italic("POD", 3, COMMENT),
    cat("NUMBER", 4, NUMBER),
    cat_bold("WORD", 5, KEYWORD),
    cat("STRING", 6, STRING),
    cat("CHARACTER", 7, STRING),
    cat_bold("OPERATOR", 10, OPERATOR),
    cat("IDENTIFIER", 11, PLAIN),
    cat("SCALAR", 12, VARIABLE),
    cat("ARRAY", 13, VARIABLE),
    cat("HASH", 14, VARIABLE),
];

const RUBY_STYLES: &[CategoryStyle] = &[
    cat("DEFAULT", 0, PLAIN),
    cat("COMMENTLINE", 2, COMMENT),
    cat("NUMBER", 4, NUMBER),
    cat_bold("WORD", 5, KEYWORD),
    cat("STRING", 6, STRING),
    cat("CHARACTER", 7, STRING),
    cat_bold("CLASSNAME", 8, TYPE),
    cat_bold("DEFNAME", 9, Color::rgb(0xFF, 0x00, 0xFF)),
    cat_bold("OPERATOR", 10, OPERATOR),
    cat("IDENTIFIER", 11, PLAIN),
];

const LUA_STYLES: &[CategoryStyle] = &[
    cat("DEFAULT", 0, PLAIN),
    cat("COMMENT", 1, COMMENT),
    cat("COMMENTLINE", 2, COMMENT),
    cat_italic("COMMENTDOC", 3, COMMENT),
    cat("NUMBER", 4, NUMBER),
    cat_bold("WORD", 5, KEYWORD),
    cat("STRING", 6, STRING),
    cat("CHARACTER", 7, STRING),
    cat("LITERALSTRING", 8, STRING),
    cat("PREPROCESSOR", 9, PREPROC),
    cat_bold("OPERATOR", 10, OPERATOR),
    cat("IDENTIFIER", 11, PLAIN),
    cat_bold("WORD2", 13, TYPE),
];

const MARKUP_STYLES: &[CategoryStyle] = &[
    cat("DEFAULT", 0, PLAIN),
    cat_bold("TAG", 1, TAG),
    cat("UNKNOWN TAG", 2, LABEL),
    cat("ATTRIBUTE", 3, ATTRIBUTE),
    cat("UNKNOWN ATTRIBUTE", 4, LABEL),
    cat("NUMBER", 5, NUMBER),
    cat("DOUBLESTRING", 6, STRING),
    cat("SINGLESTRING", 7, STRING),
    cat("COMMENT", 9, COMMENT),
    cat("ENTITY", 10, TYPE),
    cat("CDATA", 17, Color::rgb(0xFF, 0x80, 0x00)),
];

const CSS_STYLES: &[CategoryStyle] = &[
    cat("DEFAULT", 0, PLAIN),
    cat_bold("TAG", 1, TAG),
    cat("CLASS", 2, PLAIN),
    cat_bold("PSEUDOCLASS", 3, TYPE),
    cat("UNKNOWN PSEUDOCLASS", 4, LABEL),
    cat_bold("OPERATOR", 5, OPERATOR),
    cat("IDENTIFIER", 6, KEYWORD),
    cat("UNKNOWN IDENTIFIER", 7, LABEL),
    cat("VALUE", 8, NUMBER),
    cat("COMMENT", 9, COMMENT),
    cat_bold("ID", 10, TYPE),
    cat_bold("IMPORTANT", 11, LABEL),
    cat("DIRECTIVE", 12, PREPROC),
];

const SQL_STYLES: &[CategoryStyle] = &[
    cat("DEFAULT", 0, PLAIN),
    cat("COMMENT", 1, COMMENT),
    cat("COMMENT LINE", 2, COMMENT),
    cat("NUMBER", 4, NUMBER),
    cat_bold("KEYWORD", 5, KEYWORD),
    cat("STRING", 6, STRING),
    cat("CHARACTER", 7, STRING),
    cat_bold("OPERATOR", 10, OPERATOR),
    cat("IDENTIFIER", 11, PLAIN),
];

const PASCAL_STYLES: &[CategoryStyle] = &[
    cat("DEFAULT", 0, PLAIN),
    cat("COMMENT", 2, COMMENT),
    cat("COMMENT LINE", 4, COMMENT),
    cat("PREPROCESSOR", 5, PREPROC),
    cat("NUMBER", 6, NUMBER),
    cat("HEX NUMBER", 7, NUMBER),
    cat_bold("WORD", 9, KEYWORD),
    cat("STRING", 10, STRING),
    cat("CHARACTER", 12, STRING),
    cat_bold("OPERATOR", 13, OPERATOR),
];

const VB_STYLES: &[CategoryStyle] = &[
    cat("DEFAULT", 0, PLAIN),
    cat("COMMENT", 1, COMMENT),
    cat("NUMBER", 2, NUMBER),
    cat_bold("KEYWORD", 3, KEYWORD),
    cat("STRING", 4, STRING),
    cat("PREPROCESSOR", 5, PREPROC),
    cat_bold("OPERATOR", 6, OPERATOR),
    cat("IDENTIFIER", 7, PLAIN),
    cat("DATE", 8, NUMBER),
];

const FORTRAN_STYLES: &[CategoryStyle] = &[
    cat("DEFAULT", 0, PLAIN),
    cat("COMMENT", 1, COMMENT),
    cat("NUMBER", 2, NUMBER),
    cat("STRING1", 3, STRING),
    cat("STRING2", 4, STRING),
    cat_bold("OPERATOR", 6, OPERATOR),
    cat("IDENTIFIER", 7, PLAIN),
    cat_bold("WORD", 8, KEYWORD),
    cat("WORD2", 9, TYPE),
    cat("WORD3", 10, TYPE),
    cat("PREPROCESSOR", 11, PREPROC),
];

const TEX_STYLES: &[CategoryStyle] = &[
    cat("DEFAULT", 0, PLAIN),
    cat("SPECIAL", 1, LABEL),
    cat("GROUP", 2, OPERATOR),
    cat("SYMBOL", 3, NUMBER),
    cat_bold("COMMAND", 4, KEYWORD),
    cat("TEXT", 5, PLAIN),
];

const MAKEFILE_STYLES: &[CategoryStyle] = &[
    cat("DEFAULT", 0, PLAIN),
    cat("COMMENT", 1, COMMENT),
    cat("PREPROCESSOR", 2, PREPROC),
    cat("VARIABLE", 3, VARIABLE),
    cat_bold("OPERATOR", 4, OPERATOR),
    cat_bold("TARGET", 5, LABEL),
];

const BATCH_STYLES: &[CategoryStyle] = &[
    cat("DEFAULT", 0, PLAIN),
    cat("COMMENT", 1, COMMENT),
    cat_bold("KEYWORDS", 2, KEYWORD),
    cat_bold("LABEL", 3, LABEL),
    cat("HIDE SYBOL", 4, STRING),
    cat_bold("COMMAND", 5, PLAIN),
    cat("VARIABLE", 6, VARIABLE),
    cat_bold("OPERATOR", 7, OPERATOR),
];

const INI_STYLES: &[CategoryStyle] = &[
    cat("DEFAULT", 0, PLAIN),
    cat("COMMENT", 1, COMMENT),
    cat_bold("SECTION", 2, TAG),
    cat("ASSIGNMENT", 3, LABEL),
    cat("DEFVAL", 4, NUMBER),
    cat("KEY", 5, VARIABLE),
];

const BASH_STYLES: &[CategoryStyle] = &[
    cat("DEFAULT", 0, PLAIN),
    cat("ERROR", 1, LABEL),
    cat("COMMENTLINE", 2, COMMENT),
    cat("NUMBER", 3, NUMBER),
    cat_bold("WORD", 4, KEYWORD),
    cat("STRING", 5, STRING),
    cat("CHARACTER", 6, STRING),
    cat_bold("OPERATOR", 7, OPERATOR),
    cat("IDENTIFIER", 8, PLAIN),
    cat("SCALAR", 9, VARIABLE),
    cat("PARAM", 10, VARIABLE),
    cat("BACKTICKS", 11, STRING),
];

const NSIS_STYLES: &[CategoryStyle] = &[
    cat("DEFAULT", 0, PLAIN),
    cat("COMMENT", 1, COMMENT),
    cat("STRING DOUBLE QUOTE", 2, STRING),
    cat("STRING LEFT QUOTE", 3, STRING),
    cat("STRING RIGHT QUOTE", 4, STRING),
    cat_bold("FUNCTION", 5, KEYWORD),
    cat("VARIABLE", 6, VARIABLE),
    cat_bold("LABEL", 7, LABEL),
    cat("USER DEFINED", 8, TYPE),
];

/// Default style table for a language.
pub fn style_table(language: Language) -> &'static [CategoryStyle] {
    match language {
        Language::Text | Language::Nfo => TEXT_STYLES,
        // The C family shares one slot layout
        Language::C
        | Language::Cpp
        | Language::CSharp
        | Language::ObjectiveC
        | Language::Java
        | Language::JavaScript
        | Language::Rc
        | Language::ActionScript => C_FAMILY_STYLES,
        Language::Python => PYTHON_STYLES,
        Language::Perl => PERL_STYLES,
        Language::Ruby => RUBY_STYLES,
        Language::Lua => LUA_STYLES,
        // Embedded-markup languages share the markup layout
        Language::Html | Language::Xml | Language::Php | Language::Asp => MARKUP_STYLES,
        Language::Css => CSS_STYLES,
        Language::Sql => SQL_STYLES,
        Language::Pascal => PASCAL_STYLES,
        Language::VisualBasic => VB_STYLES,
        Language::Fortran => FORTRAN_STYLES,
        Language::Tex => TEX_STYLES,
        Language::Makefile => MAKEFILE_STYLES,
        Language::Batch => BATCH_STYLES,
        Language::Ini => INI_STYLES,
        Language::Bash => BASH_STYLES,
        Language::Nsis => NSIS_STYLES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_a_table() {
        let all = [
            Language::Text,
            Language::C,
            Language::Cpp,
            Language::CSharp,
            Language::ObjectiveC,
            Language::Java,
            Language::JavaScript,
            Language::Php,
            Language::Python,
            Language::Perl,
            Language::Ruby,
            Language::Lua,
            Language::Html,
            Language::Xml,
            Language::Css,
            Language::Sql,
            Language::Pascal,
            Language::VisualBasic,
            Language::Fortran,
            Language::Tex,
            Language::Makefile,
            Language::Batch,
            Language::Ini,
            Language::Bash,
            Language::Rc,
            Language::Asp,
            Language::Nsis,
            Language::ActionScript,
            Language::Nfo,
        ];
        for lang in all {
            assert!(!style_table(lang).is_empty(), "{lang:?}");
        }
    }

    #[test]
    fn test_tables_have_unique_slots() {
        for table in [C_FAMILY_STYLES, PYTHON_STYLES, MARKUP_STYLES, CSS_STYLES] {
            let mut slots: Vec<u32> = table.iter().map(|c| c.slot).collect();
            slots.sort_unstable();
            slots.dedup();
            assert_eq!(slots.len(), table.len());
        }
    }

    #[test]
    fn test_c_family_keyword_category() {
        let instr = C_FAMILY_STYLES
            .iter()
            .find(|c| c.name == "INSTRUCTION WORD")
            .unwrap();
        assert_eq!(instr.slot, 5);
        assert!(instr.bold);
        assert_eq!(instr.fg, Color::rgb(0, 0, 0xFF));
    }
}
