use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for static pagination detection
///
/// The defaults reproduce the stock detection heuristics; every field can be
/// overridden from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Token substituted for the digit run when rendering a URL template
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Substring that marks an ancestor element as a pagination container
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Attributes inspected on each ancestor for the marker
    #[serde(default = "default_marker_attributes")]
    pub marker_attributes: Vec<String>,

    /// Minimum number of distinct page numbers a template needs to be reported
    #[serde(default = "default_min_distinct_pages")]
    pub min_distinct_pages: usize,

    /// Skip anchors whose visible text carries no digit
    #[serde(default = "default_require_digit_in_text")]
    pub require_digit_in_text: bool,
}

/// Default value for placeholder
fn default_placeholder() -> String {
    "{page}".to_string()
}

/// Default value for marker
fn default_marker() -> String {
    "pagination".to_string()
}

fn default_marker_attributes() -> Vec<String> {
    vec!["id".to_string(), "class".to_string()]
}

/// Default value for min_distinct_pages
fn default_min_distinct_pages() -> usize {
    2
}

fn default_require_digit_in_text() -> bool {
    true
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            marker: default_marker(),
            marker_attributes: default_marker_attributes(),
            min_distinct_pages: default_min_distinct_pages(),
            require_digit_in_text: default_require_digit_in_text(),
        }
    }
}

impl DetectorConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make detection meaningless
    pub fn validate(&self) -> Result<()> {
        if self.placeholder.is_empty() {
            return Err(Error::InvalidConfig {
                message: "placeholder must not be empty".to_string(),
            });
        }
        if self.marker.is_empty() {
            return Err(Error::InvalidConfig {
                message: "marker must not be empty".to_string(),
            });
        }
        if self.min_distinct_pages < 1 {
            return Err(Error::InvalidConfig {
                message: "min_distinct_pages must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let config = DetectorConfig::from_json("{}").unwrap();
        assert_eq!(config, DetectorConfig::default());
        assert_eq!(config.placeholder, "{page}");
        assert_eq!(config.marker, "pagination");
        assert_eq!(config.marker_attributes, vec!["id", "class"]);
        assert_eq!(config.min_distinct_pages, 2);
        assert!(config.require_digit_in_text);
    }

    #[test]
    fn test_partial_override() {
        let config = DetectorConfig::from_json(r#"{"marker": "pager", "min_distinct_pages": 3}"#)
            .unwrap();
        assert_eq!(config.marker, "pager");
        assert_eq!(config.min_distinct_pages, 3);
        assert_eq!(config.placeholder, "{page}");
    }

    #[test]
    fn test_validation_errors() {
        let empty_placeholder = DetectorConfig::from_json(r#"{"placeholder": ""}"#);
        assert!(matches!(
            empty_placeholder,
            Err(Error::InvalidConfig { .. })
        ));

        let empty_marker = DetectorConfig::from_json(r#"{"marker": ""}"#);
        assert!(matches!(empty_marker, Err(Error::InvalidConfig { .. })));

        let zero_pages = DetectorConfig::from_json(r#"{"min_distinct_pages": 0}"#);
        assert!(matches!(zero_pages, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn test_malformed_json() {
        let result = DetectorConfig::from_json("{not json");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = DetectorConfig::from_file("/nonexistent/detector.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
