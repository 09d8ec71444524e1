//! Translation progress: which languages are done and which remain.

use crate::i18n::{LanguageRegistry, CANONICAL_CODE};
use serde::Serialize;
use std::fmt;

/// Codes of `all` that are neither `canonical` nor listed in `completed`,
/// in their original order.
pub fn remaining_languages<'a>(
    all: &[&'a str],
    completed: &[&str],
    canonical: &str,
) -> Vec<&'a str> {
    all.iter()
        .copied()
        .filter(|code| *code != canonical && !completed.contains(code))
        .collect()
}

/// Snapshot of translation progress, excluding the canonical language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressReport {
    /// Number of translation targets that are done
    pub completed: usize,

    /// Number of translation targets
    pub total: usize,

    /// Targets still to translate, in display order
    pub remaining: Vec<String>,

    /// Completion as a percentage (0-100)
    pub completion_rate: f64,
}

impl ProgressReport {
    /// Build a report from arbitrary lists.
    ///
    /// `completed` codes that do not appear in `all` are ignored, so
    /// `completed + remaining.len() == total` always holds.
    pub fn compute(all: &[&str], completed: &[&str], canonical: &str) -> Self {
        let total = all.iter().filter(|code| **code != canonical).count();
        let remaining: Vec<String> = remaining_languages(all, completed, canonical)
            .into_iter()
            .map(str::to_string)
            .collect();
        let done = total - remaining.len();

        let completion_rate = if total > 0 {
            (done as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        Self {
            completed: done,
            total,
            remaining,
            completion_rate,
        }
    }

    /// Build the report for the registered language lists.
    pub fn from_registry() -> Self {
        let registry = LanguageRegistry::get();
        Self::compute(
            registry.all_codes(),
            registry.completed_codes(),
            CANONICAL_CODE,
        )
    }

    /// Check if every target language is translated.
    ///
    /// # Returns
    /// `true` when nothing remains; the second report line is then
    /// `Remaining (0): `.
    pub fn is_finished(&self) -> bool {
        self.remaining.is_empty()
    }

    /// File names still to be created, e.g. `ko.ts` for extension `ts`.
    ///
    /// # Arguments
    /// * `extension` - File extension without the leading dot
    pub fn pending_files(&self, extension: &str) -> Vec<String> {
        self.remaining
            .iter()
            .map(|code| format!("{}.{}", code, extension))
            .collect()
    }
}

impl fmt::Display for ProgressReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Completed: {}/{}", self.completed, self.total)?;
        write!(
            f,
            "Remaining ({}): {}",
            self.remaining.len(),
            self.remaining.join(", ")
        )
    }
}
