//! Detection of static pagination controls in rendered HTML.
//!
//! Links are templated by cutting one digit run out of their absolute URL,
//! grouped by template, deduplicated, and kept only when the group looks like
//! real pagination: a link sits inside an element marked `pagination`, or a
//! link's text is exactly its page number.

pub mod config;
pub mod element;
pub mod error;
pub mod extract;
pub mod filter;
pub mod group;
pub mod results;
pub mod template;


// Re-export commonly used types for convenience
pub use config::DetectorConfig;
pub use element::{AnchorElement, ElementHandle};
pub use error::{Error, Result};
pub use results::{DetectedLink, DetectedPagination, PaginationLink, PaginationResult};

use filter::PlausibilityFilter;
use scraper::{ElementRef, Html};
use std::path::Path;
use url::Url;

/// Detect pagination schemes in `html` served from `current_url`, with the
/// default configuration
pub fn detect_static_pagination(html: &str, current_url: &str) -> Result<Vec<PaginationResult>> {
    Detector::new().detect(html, current_url)
}

/// Configurable pagination detector
#[derive(Debug, Clone)]
pub struct Detector {
    config: DetectorConfig,
    filter: PlausibilityFilter,
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector {
    /// Create a detector with default settings
    pub fn new() -> Self {
        let config = DetectorConfig::default();
        Self {
            filter: PlausibilityFilter::new(&config),
            config,
        }
    }

    /// Apply a configuration
    pub fn with_config(mut self, config: DetectorConfig) -> Result<Self> {
        config.validate()?;
        self.filter = PlausibilityFilter::new(&config);
        self.config = config;
        Ok(self)
    }

    /// Load configuration from a JSON file
    pub fn with_config_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        let config = DetectorConfig::from_file(path)?;
        self.with_config(config)
    }

    /// Apply configuration from a JSON string
    pub fn with_config_str(self, json: &str) -> Result<Self> {
        let config = DetectorConfig::from_json(json)?;
        self.with_config(config)
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Parse `html` and return owned results
    pub fn detect(&self, html: &str, current_url: &str) -> Result<Vec<PaginationResult>> {
        let doc = Html::parse_document(html);
        let detected = self.detect_document(&doc, current_url)?;
        Ok(detected.into_iter().map(PaginationResult::from).collect())
    }

    /// Detect over an already parsed document, keeping element handles
    pub fn detect_document<'a>(
        &self,
        doc: &'a Html,
        current_url: &str,
    ) -> Result<Vec<DetectedPagination<ElementRef<'a>>>> {
        self.detect_anchors(extract::anchors_in(doc), current_url)
    }

    /// Run the detection stages over any anchor source
    ///
    /// Fails only when `current_url` is not an absolute URL; bad links and
    /// numbers are skipped individually.
    pub fn detect_anchors<E, I>(&self, anchors: I, current_url: &str) -> Result<Vec<DetectedPagination<E>>>
    where
        E: AnchorElement,
        I: IntoIterator<Item = E>,
    {
        let base = Url::parse(current_url).map_err(|source| Error::InvalidReferenceUrl {
            url: current_url.to_string(),
            source,
        })?;

        let candidates = extract::extract_candidates(anchors, &base, &self.config);
        let groups = group::group_candidates(candidates);
        ::log::debug!("Grouped candidates into {} template(s)", groups.len());

        let results: Vec<_> = groups
            .into_iter()
            .filter_map(|group| group::build_page_set(group, current_url, &self.config))
            .filter(|pagination| self.filter.accepts(pagination))
            .collect();

        ::log::debug!(
            "Detected {} pagination scheme(s) on {}",
            results.len(),
            current_url
        );
        Ok(results)
    }
}
