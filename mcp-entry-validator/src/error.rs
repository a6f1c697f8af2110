//! Error types for entry validation.

use serde::Serialize;
use thiserror::Error;

/// Broad class of a validation failure, used for reporting.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// The file is missing, unreadable, or sits at the wrong path.
    Structural,
    /// The front-matter block is absent or is not valid YAML.
    Syntactic,
    /// A front-matter field is missing or has the wrong shape.
    Schema,
    /// The referenced repository could not be confirmed to exist.
    External,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Structural => "structural",
            Self::Syntactic => "syntactic",
            Self::Schema => "schema",
            Self::External => "external",
        };
        f.write_str(name)
    }
}

/// The first problem found while validating a single entry file.
///
/// Each validator stops at the first failure, so a file produces at most one
/// of these. The `Display` output names the file and the violated rule and is
/// meant to be shown to a reviewer as-is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("File {path} is not in the {dir}/ directory")]
    NotInDirectory { path: String, dir: String },

    #[error("Invalid path structure: {path}. Expected: {expected}")]
    InvalidPathStructure { path: String, expected: String },

    #[error("Invalid filename: {filename}. Must be {expected} ({path})")]
    InvalidFilename {
        path: String,
        filename: String,
        expected: String,
    },

    #[error("Could not read {path}: {message}")]
    Unreadable { path: String, message: String },

    #[error("No front matter found in {path}")]
    MissingFrontMatter { path: String },

    #[error("Invalid YAML front matter in {path}: {message}")]
    FrontMatterParse { path: String, message: String },

    #[error("Missing required field: {field} in {path}")]
    MissingField { path: String, field: &'static str },

    #[error("Field {field} must be a string in {path}")]
    InvalidFieldType { path: String, field: &'static str },

    #[error(
        "Invalid GitHub repository URL: {repo} in {path}. Expected format: https://github.com/<owner>/<repo>"
    )]
    InvalidRepoUrl { path: String, repo: String },

    #[error("Category must be at least 2 characters long, got \"{category}\" in {path}")]
    CategoryTooShort { path: String, category: String },

    #[error("GitHub repository does not exist or is not accessible: {repo} in {path} (HTTP {status})")]
    RepositoryNotAccessible {
        path: String,
        repo: String,
        status: u16,
    },

    #[error("Error checking GitHub repository: {message} ({repo} in {path})")]
    RepositoryCheckFailed {
        path: String,
        repo: String,
        message: String,
    },

    #[error("Invalid logo URL: {logo} in {path}")]
    InvalidLogoUrl { path: String, logo: String },
}

impl ValidationError {
    /// The reporting class of this failure.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FileNotFound { .. }
            | Self::NotInDirectory { .. }
            | Self::InvalidPathStructure { .. }
            | Self::InvalidFilename { .. }
            | Self::Unreadable { .. } => ErrorCategory::Structural,
            Self::MissingFrontMatter { .. } | Self::FrontMatterParse { .. } => {
                ErrorCategory::Syntactic
            }
            Self::MissingField { .. }
            | Self::InvalidFieldType { .. }
            | Self::InvalidRepoUrl { .. }
            | Self::CategoryTooShort { .. }
            | Self::InvalidLogoUrl { .. } => ErrorCategory::Schema,
            Self::RepositoryNotAccessible { .. } | Self::RepositoryCheckFailed { .. } => {
                ErrorCategory::External
            }
        }
    }

    /// The path of the file this failure belongs to.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::FileNotFound { path }
            | Self::NotInDirectory { path, .. }
            | Self::InvalidPathStructure { path, .. }
            | Self::InvalidFilename { path, .. }
            | Self::Unreadable { path, .. }
            | Self::MissingFrontMatter { path }
            | Self::FrontMatterParse { path, .. }
            | Self::MissingField { path, .. }
            | Self::InvalidFieldType { path, .. }
            | Self::InvalidRepoUrl { path, .. }
            | Self::CategoryTooShort { path, .. }
            | Self::RepositoryNotAccessible { path, .. }
            | Self::RepositoryCheckFailed { path, .. }
            | Self::InvalidLogoUrl { path, .. } => path,
        }
    }
}
