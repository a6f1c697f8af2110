//! Configuration types for entry validation.
//!
//! Split into source config (where entry files live and how they are read)
//! and probe config (how the repository existence check talks to GitHub).
//! The fixed path and document shape are constants, not configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Top-level directory every entry must live under.
pub const SERVERS_DIR: &str = "servers";

/// Filename every entry must use.
pub const REQUIRED_FILENAME: &str = "mcp-server.md";

/// Web prefix of a valid `repo` value.
pub const GITHUB_WEB_PREFIX: &str = "https://github.com/";

/// Default REST prefix the web prefix is rewritten to for the existence check.
pub const GITHUB_API_PREFIX: &str = "https://api.github.com/repos/";

/// Filesystem-specific source options.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct SourceConfig {
    /// Directory candidate paths are resolved against (default: `.`).
    pub root: PathBuf,
    /// Maximum entry file size in bytes (default: 10 MB).
    pub max_file_size: u64,
    /// Number of files validated at once (default: 4). Zero is treated as one.
    pub concurrency: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            max_file_size: 10_485_760,
            concurrency: 4,
        }
    }
}

/// Options for the GitHub repository existence check.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ProbeConfig {
    /// Prefix that replaces [`GITHUB_WEB_PREFIX`] to form the API URL.
    /// Must end with `/`. Tests point this at a local mock server.
    pub api_base: String,
    /// Optional bearer token, raises the API rate limit.
    pub token: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
    /// `User-Agent` header; the GitHub API rejects requests without one.
    pub user_agent: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            api_base: GITHUB_API_PREFIX.to_owned(),
            token: None,
            timeout: Duration::from_secs(10),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}
