use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use mcp_entry_validator::{
    GITHUB_API_PREFIX, ProbeConfig, SourceConfig, discover_entries, output, validate_entries,
};

use crate::logging;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "mcp-entry-validator",
    version,
    about = "Validate MCP server directory entries (path, front matter, GitHub repository)"
)]
pub struct Cli {
    /// Entry files to validate, relative to --root. `-` reads paths from stdin, one per line.
    #[arg(required_unless_present = "all")]
    pub paths: Vec<String>,

    /// Validate every file under <root>/servers instead of the given paths
    #[arg(long, conflicts_with = "paths")]
    pub all: bool,

    /// Repository root that paths are resolved against
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Number of files validated at once
    #[arg(long, default_value_t = 4)]
    pub concurrency: usize,

    /// GitHub API request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Prefix that https://github.com/ is rewritten to for the existence check
    #[arg(long, default_value = GITHUB_API_PREFIX)]
    pub api_base: String,

    /// GitHub token for authenticated API requests
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    fn source_config(&self) -> SourceConfig {
        let mut config = SourceConfig::default();
        config.root.clone_from(&self.root);
        config.concurrency = self.concurrency;
        config
    }

    fn probe_config(&self) -> ProbeConfig {
        let mut config = ProbeConfig::default();
        config.api_base.clone_from(&self.api_base);
        config.token.clone_from(&self.github_token);
        config.timeout = Duration::from_secs(self.timeout);
        config
    }
}

/// Replace each `-` argument with the non-blank lines read from `stdin`.
fn expand_paths(paths: &[String], stdin: impl BufRead) -> std::io::Result<Vec<String>> {
    if !paths.iter().any(|p| p == "-") {
        return Ok(paths.to_vec());
    }

    let piped = stdin
        .lines()
        .map(|line| line.map(|l| l.trim().to_owned()))
        .filter(|line| !matches!(line, Ok(l) if l.is_empty()))
        .collect::<std::io::Result<Vec<_>>>()?;

    let mut expanded = Vec::with_capacity(paths.len() + piped.len());
    for path in paths {
        if path == "-" {
            expanded.extend(piped.iter().cloned());
        } else {
            expanded.push(path.clone());
        }
    }
    Ok(expanded)
}

/// Parse arguments, validate, print the report. Returns whether every file passed.
pub async fn run() -> anyhow::Result<bool> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet)?;

    let paths = if cli.all {
        discover_entries(&cli.root)?
    } else {
        expand_paths(&cli.paths, std::io::stdin().lock())
            .context("Failed to read paths from stdin")?
    };

    if paths.is_empty() {
        // Nothing changed under servers/: a no-op run is a pass.
        tracing::warn!("no entry files to validate");
        return Ok(true);
    }

    let report = validate_entries(&paths, &cli.source_config(), &cli.probe_config()).await?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Human => output::write_human(&report, &mut out)?,
        OutputFormat::Json => output::write_json(&report, &mut out)?,
    }
    out.flush()?;

    Ok(report.ok)
}
