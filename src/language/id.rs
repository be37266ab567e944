//! Language identities

/// Languages the styler can address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    Text,
    C,
    Cpp,
    CSharp,
    ObjectiveC,
    Java,
    JavaScript,
    Php,
    Python,
    Perl,
    Ruby,
    Lua,
    Html,
    Xml,
    Css,
    Sql,
    Pascal,
    VisualBasic,
    Fortran,
    Tex,
    Makefile,
    Batch,
    Ini,
    Bash,
    Rc,
    Asp,
    Nsis,
    ActionScript,
    Nfo,
}

impl Language {
    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Language::Text => "Plain Text",
            Language::C => "C",
            Language::Cpp => "C++",
            Language::CSharp => "C#",
            Language::ObjectiveC => "Objective-C",
            Language::Java => "Java",
            Language::JavaScript => "JavaScript",
            Language::Php => "PHP",
            Language::Python => "Python",
            Language::Perl => "Perl",
            Language::Ruby => "Ruby",
            Language::Lua => "Lua",
            Language::Html => "HTML",
            Language::Xml => "XML",
            Language::Css => "CSS",
            Language::Sql => "SQL",
            Language::Pascal => "Pascal",
            Language::VisualBasic => "Visual Basic",
            Language::Fortran => "Fortran",
            Language::Tex => "TeX",
            Language::Makefile => "Makefile",
            Language::Batch => "Batch",
            Language::Ini => "INI",
            Language::Bash => "Shell",
            Language::Rc => "Resource Script",
            Language::Asp => "ASP",
            Language::Nsis => "NSIS",
            Language::ActionScript => "ActionScript",
            Language::Nfo => "NFO",
        }
    }

    /// Name of this language's style block in a theme document.
    ///
    /// Languages without a dedicated block fall back to the generic "text"
    /// block.
    pub fn theme_name(self) -> &'static str {
        self.block_name().unwrap_or("text")
    }

    fn block_name(self) -> Option<&'static str> {
        match self {
            Language::Text => Some("text"),
            Language::C => Some("c"),
            Language::Cpp => Some("cpp"),
            Language::CSharp => Some("cs"),
            Language::ObjectiveC => Some("objc"),
            Language::Java => Some("java"),
            Language::JavaScript => Some("javascript"),
            Language::Php => Some("php"),
            Language::Python => Some("python"),
            Language::Perl => Some("perl"),
            Language::Ruby => Some("ruby"),
            Language::Lua => Some("lua"),
            Language::Html => Some("html"),
            Language::Xml => Some("xml"),
            Language::Css => Some("css"),
            Language::Sql => Some("sql"),
            Language::Pascal => Some("pascal"),
            Language::VisualBasic => Some("vb"),
            Language::Fortran => Some("fortran"),
            Language::Tex => Some("tex"),
            Language::Makefile => Some("makefile"),
            Language::Batch => Some("batch"),
            Language::Ini => Some("ini"),
            Language::Bash => Some("bash"),
            Language::Rc => Some("rc"),
            Language::Asp => Some("asp"),
            Language::Nsis => Some("nsis"),
            Language::ActionScript => Some("actionscript"),
            // NFO renders as plain text; no dedicated block
            Language::Nfo => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_name_mapping() {
        assert_eq!(Language::Cpp.theme_name(), "cpp");
        assert_eq!(Language::VisualBasic.theme_name(), "vb");
    }

    #[test]
    fn test_unmapped_language_uses_text() {
        assert_eq!(Language::Nfo.theme_name(), "text");
    }
}
