//! # mcp-entry-validator
//!
//! Validator for submissions to the MCP server directory.
//!
//! Every entry is a Markdown file at `servers/<server-name>/mcp-server.md`
//! whose YAML front matter describes the server. Validation runs two stages
//! per file, each returning the first problem it finds:
//!
//! 1. [`PathValidator`] — the file exists and sits at the fixed path shape.
//! 2. [`FrontMatterValidator`] — the front matter parses, carries the
//!    required fields in the right format, and points at a GitHub
//!    repository that exists.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mcp_entry_validator::{ProbeConfig, SourceConfig, validate_entries};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let paths = vec!["servers/widget/mcp-server.md".to_owned()];
//! let report = validate_entries(&paths, &SourceConfig::default(), &ProbeConfig::default()).await?;
//! println!("Files checked: {}", report.checked_files);
//! println!("OK: {}", report.ok);
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
pub mod format;
pub mod output;
mod probe;
mod report;
mod strategy;
mod validator;

pub use config::{
    GITHUB_API_PREFIX, GITHUB_WEB_PREFIX, ProbeConfig, REQUIRED_FILENAME, SERVERS_DIR,
    SourceConfig,
};
pub use error::{ErrorCategory, ValidationError};
pub use probe::{GithubProbe, ProbeError, RepoProbe, api_url_for};
pub use report::{EntryFailure, ValidationReport};
pub use strategy::FileSystem;
pub use strategy::fs::{LocalFs, ReadError, discover_entries, read_file_bounded};
pub use validator::schema::REQUIRED_FIELDS;
pub use validator::{EntryValidator, FrontMatterValidator, PathValidator};

use futures::stream::{self, StreamExt};
use tracing::info;

/// Validate entry files on disk against GitHub.
///
/// This is the primary public API. Paths are repository-relative and are
/// resolved against `source.root`.
///
/// # Errors
///
/// Returns an error if `paths` is empty or the HTTP client cannot be built.
/// Per-file failures never error; they are collected in the report.
pub async fn validate_entries(
    paths: &[String],
    source: &SourceConfig,
    probe_config: &ProbeConfig,
) -> anyhow::Result<ValidationReport> {
    if paths.is_empty() {
        anyhow::bail!("No paths provided for validation");
    }

    let probe = GithubProbe::new(probe_config)?;
    let validator = EntryValidator::new(
        PathValidator::new(LocalFs::new(&source.root)),
        FrontMatterValidator::with_api_base(probe, probe_config.api_base.clone()),
        source.max_file_size,
    );

    Ok(validate_with(&validator, paths, source.concurrency).await)
}

/// Validate `paths` with an already-built validator.
///
/// Up to `concurrency` files are in flight at once; the report keeps input
/// order.
pub async fn validate_with<P: RepoProbe>(
    validator: &EntryValidator<P>,
    paths: &[String],
    concurrency: usize,
) -> ValidationReport {
    let outcomes: Vec<(String, Option<ValidationError>)> = stream::iter(paths)
        .map(|path| async move { (path.clone(), validator.validate_file(path).await) })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let report = ValidationReport::from_outcomes(outcomes);
    info!(
        checked = report.checked_files,
        failed = report.failed_files,
        "validation finished"
    );
    report
}
