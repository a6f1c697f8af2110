//! Entry sources.
//!
//! Only the local filesystem is supported. The path validator talks to it
//! through [`FileSystem`] so tests can swap in an in-memory stand-in.

use std::path::Path;

pub mod fs;

/// Existence probe used by the path validator.
pub trait FileSystem: Send + Sync {
    /// Whether `path` names an existing file or directory.
    fn exists(&self, path: &Path) -> bool;
}
