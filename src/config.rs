use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::logic::clock::Clock;
use crate::logic::formatting::RelativeTimeStyle;
use crate::model::carousel::DEFAULT_PAGE_SIZE;
use crate::model::ModelOptions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("page_size must be at least 1")]
    ZeroPageSize,

    #[error("threshold must be a positive number, got {0}")]
    InvalidThreshold(f64),

    #[error("cell_width must be a positive number, got {0}")]
    InvalidCellWidth(f64),

    #[error("travel must be a positive number, got {0}")]
    InvalidTravel(f64),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// YAML or JSON file with themes and reviews
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// Reviews per carousel page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// How far the slide visually travels (drag units)
    #[serde(default = "default_travel")]
    pub travel: f64,

    /// Drag distance that turns a page; half of `travel` when unset
    #[serde(default)]
    pub threshold: Option<f64>,

    /// Drag units per terminal column
    #[serde(default = "default_cell_width")]
    pub cell_width: f64,

    #[serde(default)]
    pub relative_time: RelativeTimeStyle,

    /// Pin "now" for relative times (RFC 3339); wall clock when unset
    #[serde(default)]
    pub reference_time: Option<DateTime<Utc>>,

    #[serde(default)]
    pub vim_mode: bool,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("assets/catalog.yaml")
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_travel() -> f64 {
    100.0
}

fn default_cell_width() -> f64 {
    8.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            page_size: default_page_size(),
            travel: default_travel(),
            threshold: None,
            cell_width: default_cell_width(),
            relative_time: RelativeTimeStyle::default(),
            reference_time: None,
            vim_mode: false,
        }
    }
}

impl Config {
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        // An empty file deserializes to unit, not a map
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Effective drag threshold
    pub fn threshold(&self) -> f64 {
        self.threshold.unwrap_or(self.travel / 2.0)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }

        let threshold = self.threshold();
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ConfigError::InvalidThreshold(threshold));
        }

        if !self.travel.is_finite() || self.travel <= 0.0 {
            return Err(ConfigError::InvalidTravel(self.travel));
        }

        if !self.cell_width.is_finite() || self.cell_width <= 0.0 {
            return Err(ConfigError::InvalidCellWidth(self.cell_width));
        }

        Ok(())
    }

    /// Source of "now" for relative timestamps
    pub fn clock(&self) -> Clock {
        Clock::from_reference(self.reference_time)
    }

    pub fn model_options(&self) -> ModelOptions {
        ModelOptions {
            page_size: self.page_size,
            threshold: self.threshold(),
            travel: self.travel,
            vim_mode: self.vim_mode,
            relative_time: self.relative_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_defaults() {
        let config = Config::from_yaml("").unwrap();
        assert_eq!(config.page_size, 3);
        assert_eq!(config.travel, 100.0);
        assert_eq!(config.threshold(), 50.0);
        assert_eq!(config.relative_time, RelativeTimeStyle::Auto);
        assert!(config.reference_time.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_explicit_threshold_wins() {
        let config = Config::from_yaml("travel: 80\nthreshold: 12.5\n").unwrap();
        assert_eq!(config.threshold(), 12.5);
    }

    #[test]
    fn test_threshold_follows_travel() {
        let config = Config::from_yaml("travel: 80\n").unwrap();
        assert_eq!(config.threshold(), 40.0);
    }

    #[test]
    fn test_full_config() {
        let yaml = r#"
catalog_path: /srv/catalog.json
page_size: 4
cell_width: 6
relative_time: always
reference_time: "2024-01-01T00:00:00Z"
vim_mode: true
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.catalog_path, PathBuf::from("/srv/catalog.json"));
        assert_eq!(config.page_size, 4);
        assert_eq!(config.cell_width, 6.0);
        assert_eq!(config.relative_time, RelativeTimeStyle::Always);
        assert!(config.vim_mode);

        let pinned = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(config.clock().now(), pinned);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let config = Config::from_yaml("page_size: 0").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::ZeroPageSize)));
    }

    #[test]
    fn test_bad_threshold_rejected() {
        let config = Config::from_yaml("threshold: -5").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidThreshold(_))));

        let config = Config::from_yaml("travel: 0").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidThreshold(_))));
    }

    #[test]
    fn test_bad_cell_width_rejected() {
        let config = Config::from_yaml("cell_width: 0").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidCellWidth(_))));
    }

    #[test]
    fn test_bad_travel_rejected_even_with_threshold() {
        let config = Config::from_yaml("travel: .nan\nthreshold: 50\n").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidTravel(t)) if t.is_nan()));

        let config = Config::from_yaml("travel: -100\nthreshold: 50\n").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidTravel(_))));
    }

    #[test]
    fn test_unknown_style_is_an_error() {
        assert!(Config::from_yaml("relative_time: sometimes").is_err());
    }
}
