//! Validation report types.

use serde::Serialize;

use crate::error::{ErrorCategory, ValidationError};

/// One file that failed validation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct EntryFailure {
    /// Candidate path as given by the caller.
    pub file: String,
    /// Reporting class of the failure.
    pub category: ErrorCategory,
    /// Human-readable description, suitable for a review comment.
    pub message: String,
}

impl EntryFailure {
    #[must_use]
    pub fn new(file: impl Into<String>, error: &ValidationError) -> Self {
        Self {
            file: file.into(),
            category: error.category(),
            message: error.to_string(),
        }
    }

    /// Format the failure for human-readable output.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!("{}: [{}] {}", self.file, self.category, self.message)
    }
}

/// Result of validating a batch of entry files.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct ValidationReport {
    /// Number of files validated.
    pub checked_files: usize,
    /// Number of files with a validation failure.
    pub failed_files: usize,
    /// Whether every file passed.
    pub ok: bool,
    /// One entry per failed file, in input order.
    pub failures: Vec<EntryFailure>,
}

impl ValidationReport {
    /// Build a report from per-file outcomes, keeping their order.
    #[must_use]
    pub fn from_outcomes<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = (String, Option<ValidationError>)>,
    {
        let mut checked_files = 0;
        let mut failures = Vec::new();
        for (file, error) in outcomes {
            checked_files += 1;
            if let Some(error) = error {
                failures.push(EntryFailure::new(file, &error));
            }
        }

        Self {
            checked_files,
            failed_files: failures.len(),
            ok: failures.is_empty(),
            failures,
        }
    }

    /// Number of files that passed.
    #[must_use]
    pub fn passed_files(&self) -> usize {
        self.checked_files - self.failed_files
    }

    /// Number of failures in the given category.
    #[must_use]
    pub fn count_in(&self, category: ErrorCategory) -> usize {
        self.failures
            .iter()
            .filter(|f| f.category == category)
            .count()
    }
}
