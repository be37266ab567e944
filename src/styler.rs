//! DocumentStyler - ties detection, defaults and theme application together
//!
//! The one-stop service a host calls on file-open or theme-change: detect the
//! language, establish the baseline, write the language's default table, let
//! the theme override what it defines, then hand the keyword lists through.

use std::path::Path;

use crate::errors::ThemeError;
use crate::language::{defaults, keywords, Language, LanguageRegistry};
use crate::style::StyleTarget;
use crate::theme::{ApplyFlags, ThemeDocument, ThemeResolver};

/// Styles a target for a document's language, with or without a theme.
pub struct DocumentStyler {
    registry: LanguageRegistry,
    resolver: ThemeResolver,
}

impl DocumentStyler {
    pub fn new() -> Self {
        Self::with_flags(ApplyFlags::default())
    }

    pub fn with_flags(flags: ApplyFlags) -> Self {
        Self {
            registry: LanguageRegistry::new(),
            resolver: ThemeResolver::with_flags(flags),
        }
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    pub fn resolver(&self) -> &ThemeResolver {
        &self.resolver
    }

    /// Detect the language for `path` and style `target` for it. Returns the
    /// detected language; styling trouble is reported by the target's state
    /// only (best effort, like every apply operation here).
    pub fn style_file(
        &self,
        path: &Path,
        content: Option<&[u8]>,
        theme: Option<&ThemeDocument>,
        target: &mut dyn StyleTarget,
    ) -> Language {
        let language = self.registry.detect(path, content);
        self.style_language(language, theme, target);
        language
    }

    /// Apply defaults and (optionally) a theme for a known language.
    ///
    /// Write order fixes the precedence: baseline, default table, theme
    /// special styles, theme lexer styles, keywords. Later writes win.
    pub fn style_language(
        &self,
        language: Language,
        theme: Option<&ThemeDocument>,
        target: &mut dyn StyleTarget,
    ) -> bool {
        let mut ok = true;

        match theme {
            Some(doc) => ok &= self.resolver.apply_global_and_default(doc, target),
            None => target.reset(),
        }

        ok &= self.apply_language_defaults(language, target);

        if let Some(doc) = theme {
            ok &= self.resolver.apply_special_styles(doc, target);
            ok &= self.resolver.apply_lexer_styles(doc, target, language);
        }

        ok &= self.apply_keywords(language, target);
        ok
    }

    /// Write a language's default category table into the target.
    pub fn apply_language_defaults(&self, language: Language, target: &mut dyn StyleTarget) -> bool {
        match self.try_apply_language_defaults(language, target) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("default table for {language:?} failed: {e}");
                false
            }
        }
    }

    fn try_apply_language_defaults(
        &self,
        language: Language,
        target: &mut dyn StyleTarget,
    ) -> Result<(), ThemeError> {
        for category in defaults::style_table(language) {
            target.set_foreground(category.slot, category.fg)?;
            target.set_background(category.slot, category.bg)?;
            target.set_bold(category.slot, category.bold)?;
            target.set_italic(category.slot, category.italic)?;
        }
        Ok(())
    }

    /// Hand the language's keyword lists through to the target, verbatim.
    pub fn apply_keywords(&self, language: Language, target: &mut dyn StyleTarget) -> bool {
        match self.try_apply_keywords(language, target) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("keyword lists for {language:?} failed: {e}");
                false
            }
        }
    }

    fn try_apply_keywords(
        &self,
        language: Language,
        target: &mut dyn StyleTarget,
    ) -> Result<(), ThemeError> {
        for (set, words) in keywords::keyword_sets(language).iter().enumerate() {
            target.set_keywords(set, words)?;
        }
        Ok(())
    }
}

impl Default for DocumentStyler {
    fn default() -> Self {
        Self::new()
    }
}
