//! Language registry: Single source of truth for the page languages.
//!
//! The registry is built once on first access with `OnceLock` and never
//! changes afterwards.

use std::sync::OnceLock;

/// Configuration for a supported page language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "hi")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Hindi")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "हिन्दी")
    pub native_name: &'static str,

    /// Whether this is the language the page starts in (only one should be true)
    pub is_canonical: bool,

    /// Whether the toggle may switch to this language
    pub enabled: bool,

    /// Label shown on the language toggle while this language is active.
    /// It names the language the toggle switches to.
    pub toggle_label: &'static str,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages, in toggle order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get the canonical language configuration.
    ///
    /// # Panics
    /// Panics if there is not exactly one canonical language (a configuration
    /// error in `default_languages`).
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }

    /// The enabled language after `code` in toggle order, wrapping around.
    ///
    /// Returns the canonical language when `code` is not enabled.
    pub fn next_after(&self, code: &str) -> &LanguageConfig {
        let enabled = self.list_enabled();
        match enabled.iter().position(|lang| lang.code == code) {
            Some(i) => enabled[(i + 1) % enabled.len()],
            None => self.canonical(),
        }
    }

    /// Check if a language code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

/// English (canonical) and Hindi.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_canonical: true,
            enabled: true,
            toggle_label: "हिन्दी",
        },
        LanguageConfig {
            code: "hi",
            name: "Hindi",
            native_name: "हिन्दी",
            is_canonical: false,
            enabled: true,
            toggle_label: "EN",
        },
    ]
}
