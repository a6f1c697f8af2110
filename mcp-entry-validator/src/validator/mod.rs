//! Per-file validation pipeline.
//!
//! [`PathValidator`] runs first; only when it passes is the content read and
//! handed to [`FrontMatterValidator`].

use std::path::Path;

use tracing::debug;

use crate::error::ValidationError;
use crate::probe::RepoProbe;
use crate::strategy::FileSystem;
use crate::strategy::fs::{LocalFs, read_file_bounded};

pub mod front_matter;
pub mod path;
pub mod schema;

pub use front_matter::FrontMatterValidator;
pub use path::PathValidator;

/// Path check followed by front-matter check for a single entry file.
#[derive(Debug, Clone)]
pub struct EntryValidator<P, F = LocalFs> {
    paths: PathValidator<F>,
    front_matter: FrontMatterValidator<P>,
    max_file_size: u64,
}

impl<P: RepoProbe, F: FileSystem> EntryValidator<P, F> {
    /// Compose the two stages. `max_file_size` bounds [`Self::validate_file`] reads.
    #[must_use]
    pub fn new(
        paths: PathValidator<F>,
        front_matter: FrontMatterValidator<P>,
        max_file_size: u64,
    ) -> Self {
        Self {
            paths,
            front_matter,
            max_file_size,
        }
    }

    /// Validate an entry whose content the caller already holds.
    pub async fn validate(&self, path: &str, content: &str) -> Option<ValidationError> {
        if let Some(err) = self.paths.validate(path) {
            debug!(path, error = %err, "path check failed");
            return Some(err);
        }
        self.front_matter.validate(content, path).await
    }
}

impl<P: RepoProbe> EntryValidator<P, LocalFs> {
    /// Validate an entry, reading its content from disk after the path check.
    pub async fn validate_file(&self, path: &str) -> Option<ValidationError> {
        if let Some(err) = self.paths.validate(path) {
            debug!(path, error = %err, "path check failed");
            return Some(err);
        }

        let resolved = self.paths.fs().resolve(Path::new(path));
        let content = match read_file_bounded(&resolved, self.max_file_size) {
            Ok(content) => content,
            Err(e) => {
                return Some(ValidationError::Unreadable {
                    path: path.to_owned(),
                    message: e.to_string(),
                });
            }
        };

        self.front_matter.validate(&content, path).await
    }
}
