//! YAML front-matter parsing.
//!
//! The schema checks only ever see a [`Mapping`]; which YAML library backs it
//! stays behind [`parse_mapping`].

use serde_json::Value;
use thiserror::Error;

/// Parsed front-matter keys and values.
pub type Mapping = serde_json::Map<String, Value>;

/// Why a front-matter header could not be turned into a [`Mapping`].
#[derive(Debug, Error)]
pub enum ParseError {
    /// The text is not valid YAML.
    #[error("{0}")]
    Syntax(String),
}

/// Parse a front-matter header into a key/value mapping.
///
/// A document whose top level is not a mapping (blank, `null`, a scalar or a
/// sequence) has no keys, so it parses to an empty mapping.
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] for malformed YAML.
pub fn parse_mapping(text: &str) -> Result<Mapping, ParseError> {
    if text.trim().is_empty() {
        return Ok(Mapping::new());
    }

    let value: Value =
        serde_saphyr::from_str(text).map_err(|e| ParseError::Syntax(e.to_string()))?;

    if let Value::Object(map) = value {
        Ok(map)
    } else {
        Ok(Mapping::new())
    }
}
