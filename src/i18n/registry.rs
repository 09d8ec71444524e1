//! Language registry: Single source of truth for tracked languages.
//!
//! The two literal lists below are edited by hand as translation work lands.
//! Everything else (metadata lookup, completion state) is derived from them
//! once, on first access, through a `OnceLock` singleton.

use std::sync::OnceLock;

/// Code of the canonical (source) language. Never counted as a target.
pub const CANONICAL_CODE: &str = "en";

/// Languages whose translation is done, including the canonical one.
pub const COMPLETED_LANGUAGES: &[&str] = &[
    "en", "nl", "de", "ar", "ru", "fr", "es", "it", "pl", "pt", "ja", "zh-CN",
];

/// Every language the site ships in, in display order.
pub const ALL_LANGUAGES: &[&str] = &[
    "en", "nl", "de", "ar", "ru", "fr", "es", "it", "pl", "pt", "ja", "zh-CN", "ko", "tr", "vi",
    "th", "id", "hi", "sv", "no", "da", "fi", "cs", "ro", "hu", "el",
];

/// Metadata for a tracked language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Language code as used in file names (e.g., "en", "zh-CN")
    pub code: &'static str,

    /// English name of the language (e.g., "Korean")
    pub name: &'static str,

    /// Native name of the language (e.g., "한국어")
    pub native_name: &'static str,

    /// Whether this is the canonical/source language (only one should be true)
    pub is_canonical: bool,

    /// Whether the translation for this language is done
    pub completed: bool,
}

impl LanguageConfig {
    /// A translation target that still needs work.
    pub fn is_remaining(&self) -> bool {
        !self.is_canonical && !self.completed
    }
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: build_languages(ALL_LANGUAGES, COMPLETED_LANGUAGES),
        })
    }

    /// Get a language configuration by its exact code.
    ///
    /// # Arguments
    /// * `code` - The language code (e.g., "ko", "zh-CN"), matched case-sensitively
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language is tracked
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All languages, in `ALL_LANGUAGES` order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Completed languages, canonical included.
    pub fn list_completed(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.completed).collect()
    }

    /// Targets that are neither canonical nor completed, in display order.
    pub fn list_remaining(&self) -> Vec<&LanguageConfig> {
        self.languages
            .iter()
            .filter(|lang| lang.is_remaining())
            .collect()
    }

    /// Get the canonical language configuration.
    ///
    /// # Panics
    /// Panics if `CANONICAL_CODE` is missing from `ALL_LANGUAGES`. The
    /// validator reports the same condition without panicking.
    pub fn canonical(&self) -> &LanguageConfig {
        self.languages
            .iter()
            .find(|lang| lang.is_canonical)
            .expect("canonical language must be listed in ALL_LANGUAGES")
    }

    /// Raw codes of every tracked language.
    pub fn all_codes(&self) -> &'static [&'static str] {
        ALL_LANGUAGES
    }

    /// Raw codes of every completed language.
    pub fn completed_codes(&self) -> &'static [&'static str] {
        COMPLETED_LANGUAGES
    }
}

fn build_languages(all: &[&'static str], completed: &[&str]) -> Vec<LanguageConfig> {
    all.iter()
        .map(|&code| {
            let (name, native_name) = language_names(code);
            LanguageConfig {
                code,
                name,
                native_name,
                is_canonical: code == CANONICAL_CODE,
                completed: completed.contains(&code),
            }
        })
        .collect()
}

/// English and native display names for a code. Unknown codes echo the code.
fn language_names(code: &'static str) -> (&'static str, &'static str) {
    match code {
        "en" => ("English", "English"),
        "nl" => ("Dutch", "Nederlands"),
        "de" => ("German", "Deutsch"),
        "ar" => ("Arabic", "العربية"),
        "ru" => ("Russian", "Русский"),
        "fr" => ("French", "Français"),
        "es" => ("Spanish", "Español"),
        "it" => ("Italian", "Italiano"),
        "pl" => ("Polish", "Polski"),
        "pt" => ("Portuguese", "Português"),
        "ja" => ("Japanese", "日本語"),
        "zh-CN" => ("Chinese (Simplified)", "简体中文"),
        "ko" => ("Korean", "한국어"),
        "tr" => ("Turkish", "Türkçe"),
        "vi" => ("Vietnamese", "Tiếng Việt"),
        "th" => ("Thai", "ไทย"),
        "id" => ("Indonesian", "Bahasa Indonesia"),
        "hi" => ("Hindi", "हिन्दी"),
        "sv" => ("Swedish", "Svenska"),
        "no" => ("Norwegian", "Norsk"),
        "da" => ("Danish", "Dansk"),
        "fi" => ("Finnish", "Suomi"),
        "cs" => ("Czech", "Čeština"),
        "ro" => ("Romanian", "Română"),
        "hu" => ("Hungarian", "Magyar"),
        "el" => ("Greek", "Ελληνικά"),
        other => (other, other),
    }
}
