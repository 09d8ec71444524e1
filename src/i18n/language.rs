//! Language type: validated language representation.
//!
//! A `Language` can only be constructed for codes present in the registry,
//! so accessors never have to deal with missing metadata.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};

/// A language known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Language code (e.g., "en", "zh-CN")
    code: &'static str,
}

impl Language {
    /// The canonical language, usable in const contexts.
    pub const ENGLISH: Language = Language { code: "en" };

    /// Create a Language from an exact language code.
    ///
    /// # Arguments
    /// * `code` - The language code, matched case-sensitively (e.g., "ko", "zh-CN")
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is registered
    /// * `Err` if the code is unknown
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) => Ok(Language { code: config.code }),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the canonical (source) language.
    ///
    /// # Returns
    /// The language every translation is made from, excluded from the counts.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// Get the language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not registered, which cannot happen for a
    /// Language built through `from_code`, `canonical` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the canonical language.
    ///
    /// # Returns
    /// `true` if this is the source language, `false` if it's a translation target.
    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }

    /// Check if the translation for this language is done.
    ///
    /// # Returns
    /// `true` if the code is listed in `COMPLETED_LANGUAGES`. Always `true`
    /// for the canonical language.
    pub fn is_completed(&self) -> bool {
        self.config().completed
    }
}
