//! Language bookkeeping for the translation tracker.
//!
//! # Architecture
//!
//! - `registry`: The hand-maintained language lists and their metadata
//! - `language`: Validated `Language` type and locale resolution
//! - `validator`: Consistency checks over the lists
//!
//! # Example
//!
//! ```rust,ignore
//! use translation_progress::i18n::{Language, LanguageRegistry};
//!
//! let korean = Language::from_code("ko")?;
//! assert!(!korean.is_completed());
//!
//! let remaining = LanguageRegistry::get().list_remaining();
//! ```

mod language;
mod registry;
mod validator;

pub use language::Language;
pub use registry::{
    LanguageConfig, LanguageRegistry, ALL_LANGUAGES, CANONICAL_CODE, COMPLETED_LANGUAGES,
};
pub use validator::{validate_lists, ValidationReport};
