//! Catalog records
//!
//! Reviews shown in the carousel and the themes they talk about.

use chrono::{DateTime, Utc};

/// An item the carousel can paginate
///
/// The carousel only needs a stable identity and a point in time; any other
/// fields are the renderer's business.
pub trait Record {
    /// Stable key, unchanged across re-slicing
    fn key(&self) -> &str;

    /// When the record was written
    fn timestamp(&self) -> DateTime<Utc>;
}

/// A user testimonial
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Review {
    pub id: String,
    /// GitHub handle of the author
    pub github: String,
    pub name: String,
    /// Country code, e.g. "br"
    pub country: String,
    pub date: DateTime<Utc>,
    /// HTML fragment
    pub body: String,
}

impl Record for Review {
    fn key(&self) -> &str {
        &self.id
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.date
    }
}

/// A theme listed in the catalog
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct Theme {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}
