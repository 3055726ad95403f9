use scraper::ElementRef;

/// Read-only handle into an HTML tree
///
/// This is all the plausibility filter needs from a DOM: attribute lookup
/// and a walk up the parent chain. The tree is never owned or mutated.
pub trait ElementHandle: Clone {
    /// Value of the named attribute, if present
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Parent element, or `None` at the root of the tree
    fn parent_element(&self) -> Option<Self>;
}

/// An element that can act as a hyperlink candidate
pub trait AnchorElement: ElementHandle {
    /// Raw link target as written in the markup
    fn href(&self) -> Option<&str> {
        self.attribute("href")
    }

    /// Concatenated text of all descendants, untrimmed
    fn visible_text(&self) -> String;
}

impl ElementHandle for ElementRef<'_> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn parent_element(&self) -> Option<Self> {
        // The document node is not an element, so the walk ends there
        (**self).parent().and_then(ElementRef::wrap)
    }
}

impl AnchorElement for ElementRef<'_> {
    fn visible_text(&self) -> String {
        self.text().collect()
    }
}
