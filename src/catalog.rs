//! Catalog loading
//!
//! Reads themes and reviews from a YAML or JSON file. Review dates are
//! parsed and validated here, once, so the formatting code never sees an
//! invalid timestamp.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::model::review::{Review, Theme};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("review '{id}' has an invalid timestamp: {value:?}")]
    InvalidTimestamp { id: String, value: String },
}

/// Everything the site shows
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    pub themes: Vec<Theme>,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    themes: Vec<Theme>,
    #[serde(default)]
    reviews: Vec<RawReview>,
}

#[derive(Debug, Deserialize)]
struct RawReview {
    id: String,
    github: String,
    name: String,
    #[serde(default)]
    country: String,
    date: String,
    #[serde(default)]
    body: String,
}

impl RawReview {
    fn into_review(self) -> Result<Review, CatalogError> {
        let date = parse_timestamp(&self.date).ok_or_else(|| CatalogError::InvalidTimestamp {
            id: self.id.clone(),
            value: self.date.clone(),
        })?;

        Ok(Review {
            id: self.id,
            github: self.github,
            name: self.name,
            country: self.country,
            date,
            body: self.body,
        })
    }
}

/// Parse a review date
///
/// Accepts RFC 3339 (`2023-04-01T10:00:00Z`), a bare date (`2023-04-01`,
/// midnight UTC) or a date-time without offset (`2023-04-01T10:00:00`, UTC).
///
/// # Examples
/// ```
/// use themedeck::catalog::parse_timestamp;
///
/// assert!(parse_timestamp("2023-04-01T10:00:00+02:00").is_some());
/// assert!(parse_timestamp("2023-04-01").is_some());
/// assert!(parse_timestamp("yesterday").is_none());
/// ```
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    None
}

impl Catalog {
    /// Load a catalog file; `.json` files are parsed as JSON, anything else as YAML
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json(&contents)
        } else {
            Self::from_yaml(&contents)
        }
    }

    pub fn from_yaml(contents: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_yaml::from_str(contents)?;
        raw.validate()
    }

    pub fn from_json(contents: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(contents)?;
        raw.validate()
    }
}

impl RawCatalog {
    fn validate(self) -> Result<Catalog, CatalogError> {
        let reviews = self
            .reviews
            .into_iter()
            .map(RawReview::into_review)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Catalog {
            themes: self.themes,
            reviews,
        })
    }
}
