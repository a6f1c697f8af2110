//! Filesystem entry source.
//!
//! Resolves repository-relative candidate paths against a root directory,
//! discovers every file under the servers directory, and reads entry files
//! with a bounded streaming read.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use thiserror::Error;
use walkdir::WalkDir;

use crate::config::SERVERS_DIR;
use crate::strategy::FileSystem;

/// Directories to skip during discovery
pub const SKIP_DIRS: &[&str] = &[".git", "node_modules", "target"];

/// Filesystem rooted at a directory; candidate paths are joined onto it.
#[derive(Debug, Clone)]
pub struct LocalFs {
    root: PathBuf,
}

impl LocalFs {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory candidate paths are resolved against.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a repository-relative path against the root.
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl Default for LocalFs {
    fn default() -> Self {
        Self::new(".")
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }
}

/// Why an entry file could not be read.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("file exceeds maximum size of {0} bytes")]
    TooLarge(u64),
    #[error("file is not valid UTF-8")]
    InvalidEncoding,
}

/// Read a file using a bounded streaming read, enforcing `max_file_size`.
///
/// Reads at most `max_file_size + 1` bytes so oversized files are detected
/// without loading them whole.
///
/// # Errors
///
/// Returns [`ReadError`] if the file cannot be opened or read, exceeds
/// `max_file_size`, or is not valid UTF-8.
pub fn read_file_bounded(path: &Path, max_file_size: u64) -> Result<String, ReadError> {
    let file = std::fs::File::open(path)?;

    let mut buffer = Vec::new();
    file.take(max_file_size.saturating_add(1))
        .read_to_end(&mut buffer)?;

    if buffer.len() as u64 > max_file_size {
        return Err(ReadError::TooLarge(max_file_size));
    }

    String::from_utf8(buffer).map_err(|_| ReadError::InvalidEncoding)
}

/// Check if a directory entry is a skip directory (for `WalkDir::filter_entry`).
/// Returns `true` if the entry should be **included**.
fn is_not_skip_dir(entry: &walkdir::DirEntry) -> bool {
    if entry.file_type().is_dir()
        && let Some(name) = entry.file_name().to_str()
    {
        return !SKIP_DIRS.contains(&name);
    }
    true
}

/// Find every regular file under `<root>/servers`.
///
/// Returned paths are relative to `root` and `/`-separated, the form the
/// path validator expects. Files with the wrong name or depth are included
/// on purpose so the validator can report them. A missing servers directory
/// yields an empty list.
///
/// # Errors
///
/// Returns an error on the first directory traversal failure.
pub fn discover_entries(root: &Path) -> anyhow::Result<Vec<String>> {
    let servers = root.join(SERVERS_DIR);
    if !servers.is_dir() {
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(&servers)
        .follow_links(false)
        .into_iter()
        .filter_entry(is_not_skip_dir)
    {
        let entry = entry.context("Directory traversal error")?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(root)
            .with_context(|| format!("{} is outside {}", entry.path().display(), root.display()))?;
        let joined = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        entries.push(joined);
    }

    entries.sort();
    Ok(entries)
}
