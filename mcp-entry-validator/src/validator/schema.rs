//! Field rules for the entry front matter.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::format::yaml::Mapping;

/// Required keys, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "repo",
    "category",
    "language",
    "start_command",
    "build_command",
];

/// Minimum trimmed length of `category`, in characters.
pub const MIN_CATEGORY_LEN: usize = 2;

/// `https://github.com/<owner>/<name>` with nothing after the name.
static REPO_URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"^https://github\.com/[^/]+/[^/]+$") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid repo URL regex: {err}"),
    });

/// Permissive `http(s)://host.tld/...`: the host must contain a dot.
static LOGO_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"^https?://[^\s/?#]+\.[^\s/?#]+(?:[/?#]\S*)?$") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid logo URL regex: {err}"),
    }
});

/// Outcome of looking up a required field.
#[derive(Debug, PartialEq, Eq)]
pub enum FieldValue {
    /// Absent, `null`, `false`, zero, or blank text.
    Missing,
    /// A sequence or mapping where a scalar was expected.
    NotScalar,
    /// The field's textual form.
    Text(String),
}

/// Read a scalar field as text, classifying empty-like values as missing.
///
/// Numbers and `true` are accepted through their textual form.
#[must_use]
pub fn field_text(map: &Mapping, key: &str) -> FieldValue {
    match map.get(key) {
        None | Some(Value::Null | Value::Bool(false)) => FieldValue::Missing,
        Some(Value::Bool(true)) => FieldValue::Text("true".to_owned()),
        Some(Value::Number(n)) => {
            if n.as_f64().is_some_and(|f| f.abs() < f64::EPSILON) {
                FieldValue::Missing
            } else {
                FieldValue::Text(n.to_string())
            }
        }
        Some(Value::String(s)) if s.trim().is_empty() => FieldValue::Missing,
        Some(Value::String(s)) => FieldValue::Text(s.clone()),
        Some(Value::Array(_) | Value::Object(_)) => FieldValue::NotScalar,
    }
}

/// Whether `repo` is exactly `https://github.com/<owner>/<name>`.
#[must_use]
pub fn is_valid_repo_url(repo: &str) -> bool {
    REPO_URL_PATTERN.is_match(repo)
}

/// Whether `category`, once trimmed, is long enough.
#[must_use]
pub fn is_valid_category(category: &str) -> bool {
    category.trim().chars().count() >= MIN_CATEGORY_LEN
}

/// Whether `logo` looks like an `http(s)` URL on a dotted host.
#[must_use]
pub fn is_valid_logo_url(logo: &str) -> bool {
    LOGO_URL_PATTERN.is_match(logo)
}
