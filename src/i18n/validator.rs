//! Consistency checks for the hand-maintained language lists.
//!
//! The lists are edited by hand, so typos (a completed code that is not in
//! the full list, a duplicated entry) would silently skew the counts. The
//! validator surfaces them without stopping the report.

use std::collections::HashSet;

/// Validation report containing errors and warnings about the lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make the counts misleading
    pub errors: Vec<String>,

    /// Suspicious entries that do not affect the counts
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Check `all` and `completed` against each other.
///
/// # Arguments
/// * `all` - Every tracked language code, in display order
/// * `completed` - Codes whose translation is done
/// * `canonical` - The source language code
///
/// # Returns
/// A report with errors for problems that skew the counts and warnings for
/// entries the counts ignore.
pub fn validate_lists(all: &[&str], completed: &[&str], canonical: &str) -> ValidationReport {
    let mut report = ValidationReport::new();

    if !all.contains(&canonical) {
        report.errors.push(format!(
            "Canonical language '{}' is missing from the language list",
            canonical
        ));
    }

    for code in duplicates(all) {
        report
            .errors
            .push(format!("Language '{}' is listed more than once", code));
    }

    for code in duplicates(completed) {
        report.warnings.push(format!(
            "Language '{}' is marked completed more than once",
            code
        ));
    }

    for code in completed.iter().filter(|code| !all.contains(*code)) {
        report.warnings.push(format!(
            "Completed language '{}' is not in the language list and is ignored",
            code
        ));
    }

    if !completed.contains(&canonical) {
        report.warnings.push(format!(
            "Canonical language '{}' is not marked completed",
            canonical
        ));
    }

    report
}

/// Codes that appear more than once, each reported once, in first-seen order.
fn duplicates<'a>(codes: &[&'a str]) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    codes
        .iter()
        .filter(|&&code| !seen.insert(code) && reported.insert(code))
        .copied()
        .collect()
}
