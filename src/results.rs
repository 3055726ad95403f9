use serde::{Deserialize, Serialize};

/// A single link to one page of a pagination scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationLink {
    /// Absolute URL of the page
    pub url: String,

    /// Trimmed visible text of the anchor
    pub text: String,

    /// Page number taken from the templated digit run
    pub page_number: u64,
}

/// One detected pagination scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationResult {
    /// URL with the page digit run replaced by the placeholder
    pub url_template: String,

    /// Page number of the reference URL under this template (1 if it does not fit)
    pub current_page: u64,

    /// Distinct page links in document order
    pub pages: Vec<PaginationLink>,
}

/// A page link that still carries its anchor element
#[derive(Debug, Clone)]
pub struct DetectedLink<E> {
    pub url: String,
    pub text: String,
    pub page_number: u64,
    pub element: E,
}

/// A pagination scheme whose links keep their DOM handles for further inspection
#[derive(Debug, Clone)]
pub struct DetectedPagination<E> {
    pub url_template: String,
    pub current_page: u64,
    pub pages: Vec<DetectedLink<E>>,
}

impl<E> DetectedLink<E> {
    /// Drop the element handle
    pub fn to_link(&self) -> PaginationLink {
        PaginationLink {
            url: self.url.clone(),
            text: self.text.clone(),
            page_number: self.page_number,
        }
    }
}

impl<E> DetectedPagination<E> {
    /// Owned, serializable copy without element handles
    pub fn to_result(&self) -> PaginationResult {
        PaginationResult {
            url_template: self.url_template.clone(),
            current_page: self.current_page,
            pages: self.pages.iter().map(DetectedLink::to_link).collect(),
        }
    }
}

impl<E> From<DetectedPagination<E>> for PaginationResult {
    fn from(detected: DetectedPagination<E>) -> Self {
        PaginationResult {
            url_template: detected.url_template,
            current_page: detected.current_page,
            pages: detected
                .pages
                .into_iter()
                .map(|p| PaginationLink {
                    url: p.url,
                    text: p.text,
                    page_number: p.page_number,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let result = PaginationResult {
            url_template: "https://example.com/list?page={page}".to_string(),
            current_page: 2,
            pages: vec![PaginationLink {
                url: "https://example.com/list?page=1".to_string(),
                text: "1".to_string(),
                page_number: 1,
            }],
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "url_template": "https://example.com/list?page={page}",
                "current_page": 2,
                "pages": [
                    {"url": "https://example.com/list?page=1", "text": "1", "page_number": 1}
                ]
            })
        );

        let back: PaginationResult = serde_json::from_value(value).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_detected_drops_any_handle() {
        let detected = DetectedPagination {
            url_template: "https://a.com/p/{page}".to_string(),
            current_page: 2,
            pages: vec![
                DetectedLink {
                    url: "https://a.com/p/1".to_string(),
                    text: "1".to_string(),
                    page_number: 1,
                    element: (),
                },
                DetectedLink {
                    url: "https://a.com/p/2".to_string(),
                    text: "2".to_string(),
                    page_number: 2,
                    element: (),
                },
            ],
        };

        let borrowed = detected.to_result();
        let owned = PaginationResult::from(detected);
        assert_eq!(borrowed, owned);
        assert_eq!(owned.current_page, 2);
        assert_eq!(owned.pages[1].url, "https://a.com/p/2");
    }
}
