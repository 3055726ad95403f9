use crate::config::DetectorConfig;
use crate::extract::Candidate;
use crate::results::{DetectedLink, DetectedPagination};
use crate::template::UrlTemplate;
use std::collections::{HashMap, HashSet};

/// Candidates sharing one URL template
#[derive(Debug, Clone)]
pub struct PaginationGroup<E> {
    /// Rendered template, the group key
    pub key: String,
    /// Template of the first candidate seen with this key
    pub template: UrlTemplate,
    /// Candidates in extraction order
    pub candidates: Vec<Candidate<E>>,
}

/// Buckets candidates by template, preserving first-seen order of both
/// templates and candidates
pub fn group_candidates<E>(candidates: Vec<Candidate<E>>) -> Vec<PaginationGroup<E>> {
    let mut groups: Vec<PaginationGroup<E>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for candidate in candidates {
        match index.get(&candidate.key) {
            Some(&i) => groups[i].candidates.push(candidate),
            None => {
                index.insert(candidate.key.clone(), groups.len());
                groups.push(PaginationGroup {
                    key: candidate.key.clone(),
                    template: candidate.template.clone(),
                    candidates: vec![candidate],
                });
            }
        }
    }

    groups
}

/// Turns a group into a page set, or `None` if it has too few distinct pages
///
/// The current page is read from `reference` exactly as given.
pub fn build_page_set<E>(
    group: PaginationGroup<E>,
    reference: &str,
    config: &DetectorConfig,
) -> Option<DetectedPagination<E>> {
    let distinct: HashSet<u64> = group.candidates.iter().map(|c| c.page_number).collect();
    if distinct.len() < config.min_distinct_pages {
        ::log::debug!(
            "Dropping template {}: {} distinct page(s)",
            group.key,
            distinct.len()
        );
        return None;
    }

    let mut seen = HashSet::new();
    let mut pages = Vec::new();
    for candidate in group.candidates {
        if seen.insert(candidate.url.clone()) {
            pages.push(DetectedLink {
                url: candidate.url,
                text: candidate.text,
                page_number: candidate.page_number,
                element: candidate.element,
            });
        }
    }

    let current_page = group.template.current_page(reference);

    Some(DetectedPagination {
        url_template: group.key,
        current_page,
        pages,
    })
}
