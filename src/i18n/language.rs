//! Language type: validated page language.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use std::fmt;

/// A validated page language.
///
/// Only languages present and enabled in the registry can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code ("en" or "hi")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };

    pub const HINDI: Language = Language { code: "hi" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        let Some(config) = registry.get_by_code(code) else {
            bail!("Unknown language code: '{}'", code);
        };
        if !registry.is_enabled(code) {
            bail!("Language '{}' ({}) is not enabled", code, config.name);
        }
        Ok(Language { code: config.code })
    }

    /// The language every page session starts in.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for a Language built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }

    /// The language the toggle switches to from this one.
    pub fn toggled(&self) -> Language {
        Language {
            code: LanguageRegistry::get().next_after(self.code).code,
        }
    }

    /// Text of the toggle control while this language is active.
    pub fn toggle_label(&self) -> &'static str {
        self.config().toggle_label
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::canonical()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_english_constant() {
        assert_eq!(Language::ENGLISH.code(), "en");
        assert!(Language::ENGLISH.is_canonical());
    }

    #[test]
    fn test_hindi_constant() {
        assert_eq!(Language::HINDI.code(), "hi");
        assert_eq!(Language::HINDI.native_name(), "हिन्दी");
        assert!(!Language::HINDI.is_canonical());
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_hindi() {
        let language = Language::from_code("hi").expect("Should succeed");
        assert_eq!(language, Language::HINDI);
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("es");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    // ==================== Toggle Tests ====================

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::ENGLISH);
    }

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Language::ENGLISH.toggled(), Language::HINDI);
        assert_eq!(Language::HINDI.toggled(), Language::ENGLISH);
        assert_eq!(Language::ENGLISH.toggled().toggled(), Language::ENGLISH);
    }

    #[test]
    fn test_toggle_labels_name_the_other_language() {
        assert_eq!(Language::ENGLISH.toggle_label(), "हिन्दी");
        assert_eq!(Language::HINDI.toggle_label(), "EN");
    }

    #[test]
    fn test_display() {
        assert_eq!(Language::HINDI.to_string(), "hi");
    }
}
