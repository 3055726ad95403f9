use crate::config::DetectorConfig;
use crate::element::AnchorElement;
use crate::template::{UrlTemplate, digit_runs};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use url::Url;

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("anchor selector is valid"));

/// One digit run of one anchor's absolute URL, templated
#[derive(Debug, Clone)]
pub struct Candidate<E> {
    /// The URL split around the digit run
    pub template: UrlTemplate,
    /// Rendered template, used as the group key
    pub key: String,
    /// Absolute URL of the anchor
    pub url: String,
    /// Trimmed visible text of the anchor
    pub text: String,
    pub page_number: u64,
    pub element: E,
}

/// Every anchor element of a parsed document, in document order
pub fn anchors_in(doc: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    doc.select(&ANCHOR_SELECTOR)
}

/// Turns anchors into pagination candidates
///
/// Anchors without an href, with an href that does not resolve against
/// `base`, or whose trimmed text is empty or digit-free are skipped. Each
/// remaining anchor yields one candidate per digit run in its absolute URL.
pub fn extract_candidates<E, I>(anchors: I, base: &Url, config: &DetectorConfig) -> Vec<Candidate<E>>
where
    E: AnchorElement,
    I: IntoIterator<Item = E>,
{
    let mut candidates = Vec::new();

    for anchor in anchors {
        let href = match anchor.href() {
            Some(href) if !href.is_empty() => href,
            _ => {
                ::log::debug!("Skipping anchor without href");
                continue;
            }
        };

        let absolute = match base.join(href) {
            Ok(url) => url.to_string(),
            Err(e) => {
                ::log::debug!("Skipping unresolvable href {:?}: {}", href, e);
                continue;
            }
        };

        let text = anchor.visible_text().trim().to_string();
        if text.is_empty() {
            ::log::debug!("Skipping {}: empty link text", absolute);
            continue;
        }
        if config.require_digit_in_text && !text.chars().any(|c| c.is_ascii_digit()) {
            ::log::debug!("Skipping {}: no digit in link text {:?}", absolute, text);
            continue;
        }

        for run in digit_runs(&absolute) {
            let Some(page_number) = run.value() else {
                ::log::debug!(
                    "Skipping digit run {} in {}: not a valid page number",
                    run.digits,
                    absolute
                );
                continue;
            };

            let template = UrlTemplate::from_run(&absolute, &run);
            candidates.push(Candidate {
                key: template.render(&config.placeholder),
                template,
                url: absolute.clone(),
                text: text.clone(),
                page_number,
                element: anchor.clone(),
            });
        }
    }

    ::log::debug!("Extracted {} pagination candidates", candidates.len());
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str, base: &str) -> Vec<(String, String, String, u64)> {
        let doc = Html::parse_document(html);
        let base = Url::parse(base).unwrap();
        extract_candidates(anchors_in(&doc), &base, &DetectorConfig::default())
            .into_iter()
            .map(|c| (c.key, c.url, c.text, c.page_number))
            .collect()
    }

    #[test]
    fn test_relative_links_are_resolved() {
        let found = extract(
            r#"<a href="?page=3">3</a>"#,
            "https://example.com/list?page=1",
        );
        assert_eq!(
            found,
            vec![(
                "https://example.com/list?page={page}".to_string(),
                "https://example.com/list?page=3".to_string(),
                "3".to_string(),
                3
            )]
        );
    }

    #[test]
    fn test_one_candidate_per_digit_run() {
        let found = extract(
            r#"<a href="/2024/page/3"> Page 3 </a>"#,
            "https://example.com/",
        );
        let keys: Vec<&str> = found.iter().map(|c| c.0.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "https://example.com/{page}/page/3",
                "https://example.com/2024/page/{page}"
            ]
        );
        assert_eq!(found[0].3, 2024);
        assert_eq!(found[1].3, 3);
        assert!(found.iter().all(|c| c.2 == "Page 3"));
    }

    #[test]
    fn test_anchors_are_rejected_early() {
        let html = r#"
            <a>1</a>
            <a href="">2</a>
            <a href="/p/3">   </a>
            <a href="/p/4">Next</a>
            <a href="http://[::1">5</a>
            <a href="/p/6">6</a>
        "#;
        let found = extract(html, "https://example.com/");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].1, "https://example.com/p/6");
    }

    #[test]
    fn test_overflowing_run_skips_only_that_candidate() {
        let found = extract(
            r#"<a href="/p/2/99999999999999999999999">2</a>"#,
            "https://example.com/",
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, "https://example.com/p/{page}/99999999999999999999999");
        assert_eq!(found[0].3, 2);
    }

    #[test]
    fn test_digit_free_text_allowed_when_configured() {
        let doc = Html::parse_document(r#"<a href="/p/4">Next</a>"#);
        let base = Url::parse("https://example.com/").unwrap();
        let config = DetectorConfig {
            require_digit_in_text: false,
            ..DetectorConfig::default()
        };
        let found = extract_candidates(anchors_in(&doc), &base, &config);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "Next");
    }

    #[test]
    fn test_template_reconstructs_url() {
        let doc = Html::parse_document(r#"<a href="/a/10/b/20?c=30">10</a>"#);
        let base = Url::parse("https://example.com/").unwrap();
        for c in extract_candidates(anchors_in(&doc), &base, &DetectorConfig::default()) {
            assert_eq!(c.template.fill(c.page_number), c.url);
        }
    }
}
