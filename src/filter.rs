use crate::config::DetectorConfig;
use crate::element::ElementHandle;
use crate::results::DetectedPagination;

/// Decides whether a page set is really pagination and not just links that
/// happen to share a numbered URL shape
#[derive(Debug, Clone)]
pub struct PlausibilityFilter {
    /// Lowercased marker substring
    marker: String,
    marker_attributes: Vec<String>,
}

impl Default for PlausibilityFilter {
    fn default() -> Self {
        Self::new(&DetectorConfig::default())
    }
}

impl PlausibilityFilter {
    /// Create a filter from configuration
    pub fn new(config: &DetectorConfig) -> Self {
        Self {
            marker: config.marker.to_lowercase(),
            marker_attributes: config.marker_attributes.clone(),
        }
    }

    /// Keep the page set if either signal fires
    pub fn accepts<E: ElementHandle>(&self, pagination: &DetectedPagination<E>) -> bool {
        if self.structural_signal(pagination) || Self::text_signal(pagination) {
            return true;
        }

        ::log::debug!(
            "Rejecting template {}: no pagination container and no numeric link text",
            pagination.url_template
        );
        false
    }

    /// Some page link sits inside an element whose id or class mentions the marker
    pub fn structural_signal<E: ElementHandle>(&self, pagination: &DetectedPagination<E>) -> bool {
        pagination
            .pages
            .iter()
            .any(|page| self.inside_marked_container(&page.element))
    }

    /// Some page link's text is exactly its page number
    pub fn text_signal<E>(pagination: &DetectedPagination<E>) -> bool {
        pagination
            .pages
            .iter()
            .any(|page| page.text.trim() == page.page_number.to_string())
    }

    /// Walk from the element itself up to the root looking for the marker
    fn inside_marked_container<E: ElementHandle>(&self, element: &E) -> bool {
        let mut current = Some(element.clone());
        while let Some(el) = current {
            if self.is_marked(&el) {
                return true;
            }
            current = el.parent_element();
        }
        false
    }

    fn is_marked<E: ElementHandle>(&self, element: &E) -> bool {
        self.marker_attributes.iter().any(|name| {
            element
                .attribute(name)
                .is_some_and(|value| value.to_lowercase().contains(&self.marker))
        })
    }
}
