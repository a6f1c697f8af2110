//! Integration tests for `mcp_entry_validator::validate_entries`.

use std::fs;
use std::path::Path;

use mcp_entry_validator::{
    ErrorCategory, FrontMatterValidator, GithubProbe, ProbeConfig, SourceConfig,
    discover_entries, validate_entries,
};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const VALID: &str = "---
repo: https://github.com/acme/widget
category: developer-tools
language: TypeScript
start_command: npx widget
build_command: npm run build
logo: https://acme.example.com/logo.png
---

# Widget

A widget server.
";

fn write_entry(root: &Path, relative: &str, content: &str) {
    let full = root.join(relative);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(full, content).unwrap();
}

fn source_config(root: &Path) -> SourceConfig {
    let mut cfg = SourceConfig::default();
    cfg.root = root.to_path_buf();
    cfg
}

fn probe_config(server: &MockServer) -> ProbeConfig {
    let mut cfg = ProbeConfig::default();
    cfg.api_base = format!("{}/repos/", server.uri());
    cfg
}

async fn github_with(repo_path: &str, status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(repo_path))
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_validate_entries_empty_paths_errors() {
    let tmp = TempDir::new().unwrap();
    let result = validate_entries(&[], &source_config(tmp.path()), &ProbeConfig::default()).await;
    let msg = result.unwrap_err().to_string();
    assert!(msg.contains("No paths provided"), "got: {msg}");
}

#[tokio::test]
async fn test_valid_entry_passes() {
    let tmp = TempDir::new().unwrap();
    write_entry(tmp.path(), "servers/widget/mcp-server.md", VALID);
    let server = github_with("/repos/acme/widget", 200).await;

    let report = validate_entries(
        &["servers/widget/mcp-server.md".to_owned()],
        &source_config(tmp.path()),
        &probe_config(&server),
    )
    .await
    .unwrap();

    assert!(report.ok, "unexpected failures: {:?}", report.failures);
    assert_eq!(report.checked_files, 1);
    assert_eq!(report.failed_files, 0);
}

#[tokio::test]
async fn test_same_entry_validated_twice_makes_two_requests() {
    let tmp = TempDir::new().unwrap();
    write_entry(tmp.path(), "servers/widget/mcp-server.md", VALID);
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/widget"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;

    let paths = vec!["servers/widget/mcp-server.md".to_owned(); 2];
    let report = validate_entries(&paths, &source_config(tmp.path()), &probe_config(&server))
        .await
        .unwrap();

    assert!(report.ok, "unexpected failures: {:?}", report.failures);
    assert_eq!(report.checked_files, 2);
    server.verify().await;
}

#[tokio::test]
async fn test_missing_repository_is_external_failure() {
    let tmp = TempDir::new().unwrap();
    write_entry(tmp.path(), "servers/widget/mcp-server.md", VALID);
    let server = github_with("/repos/acme/widget", 404).await;

    let report = validate_entries(
        &["servers/widget/mcp-server.md".to_owned()],
        &source_config(tmp.path()),
        &probe_config(&server),
    )
    .await
    .unwrap();

    assert!(!report.ok);
    assert_eq!(report.failures.len(), 1);
    let failure = &report.failures[0];
    assert_eq!(failure.category, ErrorCategory::External);
    assert!(
        failure.message.contains("does not exist or is not accessible"),
        "got: {}",
        failure.message
    );
    assert!(failure.message.contains("servers/widget/mcp-server.md"));
}

#[tokio::test]
async fn test_unreachable_api_is_external_failure() {
    let tmp = TempDir::new().unwrap();
    write_entry(tmp.path(), "servers/widget/mcp-server.md", VALID);

    // Nothing listens on port 1.
    let mut probe = ProbeConfig::default();
    probe.api_base = "http://127.0.0.1:1/repos/".to_owned();

    let report = validate_entries(
        &["servers/widget/mcp-server.md".to_owned()],
        &source_config(tmp.path()),
        &probe,
    )
    .await
    .unwrap();

    assert!(!report.ok);
    let failure = &report.failures[0];
    assert_eq!(failure.category, ErrorCategory::External);
    assert!(
        failure.message.starts_with("Error checking GitHub repository:"),
        "got: {}",
        failure.message
    );
}

#[tokio::test]
async fn test_failed_lookup_skips_logo_check() {
    let tmp = TempDir::new().unwrap();
    let content = VALID.replace(
        "logo: https://acme.example.com/logo.png",
        "logo: not a url",
    );
    write_entry(tmp.path(), "servers/widget/mcp-server.md", &content);
    let server = github_with("/repos/acme/widget", 404).await;

    let report = validate_entries(
        &["servers/widget/mcp-server.md".to_owned()],
        &source_config(tmp.path()),
        &probe_config(&server),
    )
    .await
    .unwrap();

    assert_eq!(report.failures[0].category, ErrorCategory::External);
}

#[tokio::test]
async fn test_bad_logo_reported_after_successful_lookup() {
    let tmp = TempDir::new().unwrap();
    let content = VALID.replace(
        "logo: https://acme.example.com/logo.png",
        "logo: not a url",
    );
    write_entry(tmp.path(), "servers/widget/mcp-server.md", &content);
    let server = github_with("/repos/acme/widget", 200).await;

    let report = validate_entries(
        &["servers/widget/mcp-server.md".to_owned()],
        &source_config(tmp.path()),
        &probe_config(&server),
    )
    .await
    .unwrap();

    let failure = &report.failures[0];
    assert_eq!(failure.category, ErrorCategory::Schema);
    assert!(failure.message.contains("Invalid logo URL"), "got: {}", failure.message);
}

#[tokio::test]
async fn test_path_failures_make_no_requests() {
    let tmp = TempDir::new().unwrap();
    write_entry(tmp.path(), "servers/widget/README.md", VALID);
    write_entry(tmp.path(), "servers/widget/nested/mcp-server.md", VALID);
    write_entry(tmp.path(), "docs/widget/mcp-server.md", VALID);

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let paths = vec![
        "servers/widget/README.md".to_owned(),
        "servers/widget/nested/mcp-server.md".to_owned(),
        "docs/widget/mcp-server.md".to_owned(),
        "servers/ghost/mcp-server.md".to_owned(),
    ];
    let report = validate_entries(&paths, &source_config(tmp.path()), &probe_config(&server))
        .await
        .unwrap();

    assert_eq!(report.failed_files, 4);
    assert_eq!(report.count_in(ErrorCategory::Structural), 4);
    let messages: Vec<&str> = report.failures.iter().map(|f| f.message.as_str()).collect();
    assert!(messages[0].contains("Invalid filename"), "got: {messages:?}");
    assert!(messages[1].contains("Invalid path structure"), "got: {messages:?}");
    assert!(messages[2].contains("servers/ directory"), "got: {messages:?}");
    assert!(messages[3].contains("not found"), "got: {messages:?}");
    server.verify().await;
}

#[tokio::test]
async fn test_report_keeps_input_order_with_concurrency() {
    let tmp = TempDir::new().unwrap();
    let server = MockServer::start().await;
    let mut paths = Vec::new();
    for i in 0..6 {
        let content = VALID.replace("acme/widget", &format!("acme/widget{i}"));
        let relative = format!("servers/widget{i}/mcp-server.md");
        write_entry(tmp.path(), &relative, &content);
        paths.push(relative);

        let status = if i % 2 == 0 { 200 } else { 404 };
        Mock::given(method("GET"))
            .and(path(format!("/repos/acme/widget{i}")))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;
    }

    let mut source = source_config(tmp.path());
    source.concurrency = 3;
    let report = validate_entries(&paths, &source, &probe_config(&server))
        .await
        .unwrap();

    assert_eq!(report.checked_files, 6);
    let failed: Vec<&str> = report.failures.iter().map(|f| f.file.as_str()).collect();
    assert_eq!(
        failed,
        vec![
            "servers/widget1/mcp-server.md",
            "servers/widget3/mcp-server.md",
            "servers/widget5/mcp-server.md",
        ]
    );
}

#[tokio::test]
async fn test_probe_sends_github_headers_and_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/widget"))
        .and(header("authorization", "Bearer t0ken"))
        .and(header("accept", "application/vnd.github+json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut cfg = probe_config(&server);
    cfg.token = Some("t0ken".to_owned());
    let validator =
        FrontMatterValidator::with_api_base(GithubProbe::new(&cfg).unwrap(), cfg.api_base.clone());

    assert_eq!(
        validator
            .validate(VALID, "servers/widget/mcp-server.md")
            .await,
        None
    );
    server.verify().await;
}

#[tokio::test]
async fn test_discovered_entries_validate_whole_directory() {
    let tmp = TempDir::new().unwrap();
    write_entry(tmp.path(), "servers/widget/mcp-server.md", VALID);
    write_entry(tmp.path(), "servers/widget/notes.txt", "scratch");
    let server = github_with("/repos/acme/widget", 200).await;

    let paths = discover_entries(tmp.path()).unwrap();
    let report = validate_entries(&paths, &source_config(tmp.path()), &probe_config(&server))
        .await
        .unwrap();

    assert_eq!(report.checked_files, 2);
    assert_eq!(report.failed_files, 1);
    assert_eq!(report.failures[0].file, "servers/widget/notes.txt");
}
