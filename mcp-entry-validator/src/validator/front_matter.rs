//! Front-matter schema and repository existence validation.
//!
//! Pipeline, stopping at the first failure:
//! 1. `extract_front_matter()` finds the `---` block
//! 2. `parse_mapping()` turns it into key/value pairs
//! 3. required fields, repo URL shape, category length
//! 4. one GET against the GitHub API through the [`RepoProbe`]
//! 5. the optional `logo` URL

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::GITHUB_API_PREFIX;
use crate::error::ValidationError;
use crate::format::markdown::extract_front_matter;
use crate::format::yaml::{Mapping, parse_mapping};
use crate::probe::{RepoProbe, api_url_for};
use crate::validator::schema::{
    FieldValue, REQUIRED_FIELDS, field_text, is_valid_category, is_valid_logo_url,
    is_valid_repo_url,
};

/// Validates the front matter of an entry file.
#[derive(Debug, Clone)]
pub struct FrontMatterValidator<P> {
    probe: P,
    api_base: String,
}

/// Required field values once presence has been confirmed.
struct RequiredFields {
    repo: String,
    /// `None` when the YAML value was not a string.
    category: Option<String>,
}

impl<P: RepoProbe> FrontMatterValidator<P> {
    /// Validator that checks repositories against the public GitHub API.
    #[must_use]
    pub fn new(probe: P) -> Self {
        Self::with_api_base(probe, GITHUB_API_PREFIX)
    }

    /// Validator that rewrites repo URLs onto `api_base` instead.
    #[must_use]
    pub fn with_api_base(probe: P, api_base: impl Into<String>) -> Self {
        Self {
            probe,
            api_base: api_base.into(),
        }
    }

    /// The probe used for the repository existence check.
    #[must_use]
    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Validate `content`, the text of the file at `path`.
    ///
    /// `path` is only used to qualify error messages. Makes at most one
    /// network request, and none if an earlier check fails.
    pub async fn validate(&self, content: &str, path: &str) -> Option<ValidationError> {
        let Some(front_matter) = extract_front_matter(content) else {
            return Some(ValidationError::MissingFrontMatter {
                path: path.to_owned(),
            });
        };

        let map = match parse_mapping(front_matter.header) {
            Ok(map) => map,
            Err(e) => {
                return Some(ValidationError::FrontMatterParse {
                    path: path.to_owned(),
                    message: e.to_string(),
                });
            }
        };

        let fields = match check_required(&map, path) {
            Ok(fields) => fields,
            Err(e) => return Some(e),
        };

        if !is_valid_repo_url(&fields.repo) {
            return Some(ValidationError::InvalidRepoUrl {
                path: path.to_owned(),
                repo: fields.repo,
            });
        }

        if let Some(category) = &fields.category
            && !is_valid_category(category)
        {
            return Some(ValidationError::CategoryTooShort {
                path: path.to_owned(),
                category: category.trim().to_owned(),
            });
        }

        if let Some(err) = self.check_repository(&fields.repo, path).await {
            return Some(err);
        }

        check_logo(&map, path)
    }

    async fn check_repository(&self, repo: &str, path: &str) -> Option<ValidationError> {
        let url = api_url_for(repo, &self.api_base);
        debug!(%url, "checking repository");

        match self.probe.fetch_status(&url).await {
            Ok(200) => None,
            Ok(status) => {
                warn!(repo, status, "repository lookup did not return 200");
                Some(ValidationError::RepositoryNotAccessible {
                    path: path.to_owned(),
                    repo: repo.to_owned(),
                    status,
                })
            }
            Err(e) => {
                warn!(repo, error = %e, "repository lookup failed");
                Some(ValidationError::RepositoryCheckFailed {
                    path: path.to_owned(),
                    repo: repo.to_owned(),
                    message: e.to_string(),
                })
            }
        }
    }
}

/// Check required fields in order and return the first absent one.
fn check_required(map: &Mapping, path: &str) -> Result<RequiredFields, ValidationError> {
    let mut fields = RequiredFields {
        repo: String::new(),
        category: None,
    };
    for field in REQUIRED_FIELDS {
        let text = match field_text(map, field) {
            FieldValue::Text(text) => text,
            FieldValue::Missing => {
                return Err(ValidationError::MissingField {
                    path: path.to_owned(),
                    field,
                });
            }
            FieldValue::NotScalar => {
                return Err(ValidationError::InvalidFieldType {
                    path: path.to_owned(),
                    field,
                });
            }
        };
        match field {
            "repo" => fields.repo = text,
            "category" if map.get(field).is_some_and(Value::is_string) => {
                fields.category = Some(text);
            }
            _ => {}
        }
    }
    Ok(fields)
}

/// `logo` is optional; falsy values count as absent.
fn check_logo(map: &Mapping, path: &str) -> Option<ValidationError> {
    let logo = match field_text(map, "logo") {
        FieldValue::Missing => return None,
        FieldValue::Text(text) => text,
        FieldValue::NotScalar => map
            .get("logo")
            .map_or_else(String::new, ToString::to_string),
    };

    if is_valid_logo_url(&logo) {
        None
    } else {
        Some(ValidationError::InvalidLogoUrl {
            path: path.to_owned(),
            logo,
        })
    }
}
