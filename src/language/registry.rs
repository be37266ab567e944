//! File-to-language detection
//!
//! Extension lookup first (case-insensitive, from the association table),
//! then exact filenames, then a content sniff for XML. Anything else is
//! plain text.

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;

use crate::language::id::Language;

/// One association row: language, space-delimited extensions (no dots),
/// exact filenames matched case-insensitively.
struct LanguageAssoc {
    language: Language,
    extensions: &'static str,
    filenames: &'static [&'static str],
}

static ASSOCIATIONS: &[LanguageAssoc] = &[
    LanguageAssoc {
        language: Language::Text,
        extensions: "txt log",
        filenames: &[],
    },
    LanguageAssoc {
        language: Language::C,
        extensions: "c",
        filenames: &[],
    },
    LanguageAssoc {
        language: Language::Cpp,
        extensions: "cpp cxx cc h hpp hxx",
        filenames: &[],
    },
    LanguageAssoc {
        language: Language::CSharp,
        extensions: "cs",
        filenames: &[],
    },
    LanguageAssoc {
        language: Language::ObjectiveC,
        extensions: "m mm",
        filenames: &[],
    },
    LanguageAssoc {
        language: Language::Java,
        extensions: "java",
        filenames: &[],
    },
    LanguageAssoc {
        language: Language::JavaScript,
        extensions: "js",
        filenames: &[],
    },
    LanguageAssoc {
        language: Language::Php,
        extensions: "php php3 phtml",
        filenames: &[],
    },
    LanguageAssoc {
        language: Language::Python,
        extensions: "py pyw",
        filenames: &[],
    },
    LanguageAssoc {
        language: Language::Perl,
        extensions: "pl pm plx",
        filenames: &[],
    },
    LanguageAssoc {
        language: Language::Ruby,
        extensions: "rb rbw",
        filenames: &["rakefile"],
    },
    LanguageAssoc {
        language: Language::Lua,
        extensions: "lua",
        filenames: &[],
    },
    LanguageAssoc {
        language: Language::Html,
        extensions: "html htm shtml",
        filenames: &[],
    },
    LanguageAssoc {
        language: Language::Xml,
        extensions: "xml xsl xsd xaml",
        filenames: &[],
    },
    LanguageAssoc {
        language: Language::Css,
        extensions: "css",
        filenames: &[],
    },
    LanguageAssoc {
        language: Language::Sql,
        extensions: "sql",
        filenames: &[],
    },
    LanguageAssoc {
        language: Language::Pascal,
        extensions: "pas pp",
        filenames: &[],
    },
    LanguageAssoc {
        language: Language::VisualBasic,
        extensions: "vb bas frm",
        filenames: &[],
    },
    LanguageAssoc {
        language: Language::Fortran,
        extensions: "f for f90 f95",
        filenames: &[],
    },
    LanguageAssoc {
        language: Language::Tex,
        extensions: "tex sty",
        filenames: &[],
    },
    LanguageAssoc {
        language: Language::Makefile,
        extensions: "mak mk",
        filenames: &["makefile", "gnumakefile"],
    },
    LanguageAssoc {
        language: Language::Batch,
        extensions: "bat cmd",
        filenames: &[],
    },
    LanguageAssoc {
        language: Language::Ini,
        extensions: "ini inf reg",
        filenames: &[],
    },
    LanguageAssoc {
        language: Language::Bash,
        extensions: "sh bash",
        filenames: &[],
    },
    LanguageAssoc {
        language: Language::Rc,
        extensions: "rc rc2",
        filenames: &[],
    },
    LanguageAssoc {
        language: Language::Asp,
        extensions: "asp aspx",
        filenames: &[],
    },
    LanguageAssoc {
        language: Language::Nsis,
        extensions: "nsi nsh",
        filenames: &[],
    },
    LanguageAssoc {
        language: Language::ActionScript,
        extensions: "as mx",
        filenames: &[],
    },
    LanguageAssoc {
        language: Language::Nfo,
        extensions: "nfo",
        filenames: &[],
    },
];

/// Leading-bytes signature checked when extension lookup fails.
const XML_SIGNATURE: &[u8] = b"<?xml ";

/// Sniff a file's leading bytes; currently only XML is recognized.
pub fn sniff_content(content: &[u8]) -> Option<Language> {
    content.starts_with(XML_SIGNATURE).then_some(Language::Xml)
}

/// Extension and filename lookup tables built from the association rows.
pub struct LanguageRegistry {
    by_extension: HashMap<&'static str, Language>,
    by_filename: HashMap<&'static str, Language>,
}

static GLOBAL: Lazy<LanguageRegistry> = Lazy::new(LanguageRegistry::new);

impl LanguageRegistry {
    pub fn new() -> Self {
        let mut by_extension = HashMap::new();
        let mut by_filename = HashMap::new();

        for assoc in ASSOCIATIONS {
            for ext in assoc.extensions.split_whitespace() {
                by_extension.insert(ext, assoc.language);
            }
            for name in assoc.filenames {
                by_filename.insert(*name, assoc.language);
            }
        }

        Self {
            by_extension,
            by_filename,
        }
    }

    /// Shared registry built once.
    pub fn global() -> &'static LanguageRegistry {
        &GLOBAL
    }

    /// Case-insensitive extension lookup (no leading dot).
    pub fn from_extension(&self, ext: &str) -> Option<Language> {
        self.by_extension
            .get(ext.to_ascii_lowercase().as_str())
            .copied()
    }

    /// Case-insensitive exact-filename lookup.
    pub fn from_filename(&self, name: &str) -> Option<Language> {
        self.by_filename
            .get(name.to_ascii_lowercase().as_str())
            .copied()
    }

    /// Detect the language for a path, optionally sniffing the file's
    /// leading bytes when the name tells us nothing.
    pub fn detect(&self, path: &Path, content: Option<&[u8]>) -> Language {
        if let Some(lang) = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| self.from_filename(n))
        {
            return lang;
        }
        if let Some(lang) = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(|e| self.from_extension(e))
        {
            return lang;
        }
        content.and_then(sniff_content).unwrap_or(Language::Text)
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_extension_lookup_is_case_insensitive() {
        let reg = LanguageRegistry::new();
        assert_eq!(
            reg.detect(&PathBuf::from("FILE.CPP"), None),
            Language::Cpp
        );
        assert_eq!(reg.from_extension("Py"), Some(Language::Python));
    }

    #[test]
    fn test_filename_lookup() {
        let reg = LanguageRegistry::new();
        assert_eq!(
            reg.detect(&PathBuf::from("src/Makefile"), None),
            Language::Makefile
        );
    }

    #[test]
    fn test_sniff_xml_when_extension_unknown() {
        let reg = LanguageRegistry::new();
        let content = br#"<?xml version="1.0"?><root/>"#;
        assert_eq!(
            reg.detect(&PathBuf::from("strange.dat"), Some(content)),
            Language::Xml
        );
        // Signature must be the leading bytes
        assert_eq!(sniff_content(b" <?xml "), None);
    }

    #[test]
    fn test_unknown_falls_back_to_text() {
        let reg = LanguageRegistry::new();
        assert_eq!(
            reg.detect(&PathBuf::from("noidea.zzz"), Some(b"hello")),
            Language::Text
        );
        assert_eq!(reg.detect(&PathBuf::from("extensionless"), None), Language::Text);
    }

    #[test]
    fn test_global_registry_is_shared() {
        assert_eq!(
            LanguageRegistry::global().from_extension("lua"),
            Some(Language::Lua)
        );
    }
}
