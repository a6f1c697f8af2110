//! Path and filename conformance for entry files.

use std::path::Path;

use tracing::debug;

use crate::config::{REQUIRED_FILENAME, SERVERS_DIR};
use crate::error::ValidationError;
use crate::strategy::FileSystem;
use crate::strategy::fs::LocalFs;

/// Number of `/`-separated segments in `servers/<entry-name>/mcp-server.md`.
const EXPECTED_SEGMENTS: usize = 3;

/// Checks that a candidate path is `servers/<entry-name>/mcp-server.md` and
/// exists.
#[derive(Debug, Clone, Default)]
pub struct PathValidator<F = LocalFs> {
    fs: F,
}

impl<F: FileSystem> PathValidator<F> {
    #[must_use]
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    /// The filesystem existence is probed against.
    #[must_use]
    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Validate `path`, returning the first violated rule.
    ///
    /// Checks run in order: existence, `servers/` prefix, exactly three
    /// non-empty segments, then the filename.
    #[must_use]
    pub fn validate(&self, path: &str) -> Option<ValidationError> {
        if !self.fs.exists(Path::new(path)) {
            return Some(ValidationError::FileNotFound {
                path: path.to_owned(),
            });
        }

        let in_servers = path
            .strip_prefix(SERVERS_DIR)
            .is_some_and(|rest| rest.starts_with('/'));
        if !in_servers {
            return Some(ValidationError::NotInDirectory {
                path: path.to_owned(),
                dir: SERVERS_DIR.to_owned(),
            });
        }

        let segments: Vec<&str> = path.split('/').collect();
        if segments.len() != EXPECTED_SEGMENTS || segments.iter().any(|s| s.is_empty()) {
            debug!(path, segments = segments.len(), "unexpected path depth");
            return Some(ValidationError::InvalidPathStructure {
                path: path.to_owned(),
                expected: format!("{SERVERS_DIR}/<server-name>/{REQUIRED_FILENAME}"),
            });
        }

        let filename = segments[EXPECTED_SEGMENTS - 1];
        if filename != REQUIRED_FILENAME {
            return Some(ValidationError::InvalidFilename {
                path: path.to_owned(),
                filename: filename.to_owned(),
                expected: REQUIRED_FILENAME.to_owned(),
            });
        }

        None
    }
}
