//! URL templating by digit-run substitution.
//!
//! A template is a URL with exactly one maximal run of ASCII digits cut out.
//! Every digit run in a URL yields its own template, so `/2024/page/3` produces
//! one template keyed on the year and one keyed on the page.

use regex::Regex;
use std::sync::LazyLock;

/// ASCII only: `\d` in the regex crate would also accept other Unicode digits
static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9]+").expect("digit run pattern is valid"));

/// A maximal run of decimal digits inside a string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitRun<'s> {
    /// Byte offset of the first digit
    pub start: usize,
    /// The digits themselves
    pub digits: &'s str,
}

impl DigitRun<'_> {
    /// Byte offset just past the last digit
    pub fn end(&self) -> usize {
        self.start + self.digits.len()
    }

    /// Parse the run as a page number; `None` when it overflows
    pub fn value(&self) -> Option<u64> {
        self.digits.parse().ok()
    }
}

/// All maximal digit runs, left to right, non-overlapping
pub fn digit_runs(s: &str) -> Vec<DigitRun<'_>> {
    DIGIT_RUN
        .find_iter(s)
        .map(|m| DigitRun {
            start: m.start(),
            digits: m.as_str(),
        })
        .collect()
}

/// A URL split around one digit run
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UrlTemplate {
    prefix: String,
    suffix: String,
}

impl UrlTemplate {
    /// Cut `run` out of `url`
    pub fn from_run(url: &str, run: &DigitRun<'_>) -> Self {
        Self {
            prefix: url[..run.start].to_string(),
            suffix: url[run.end()..].to_string(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Render the template with `placeholder` standing in for the digit run
    pub fn render(&self, placeholder: &str) -> String {
        format!("{}{}{}", self.prefix, placeholder, self.suffix)
    }

    /// Substitute a page number back into the template
    pub fn fill(&self, page_number: u64) -> String {
        format!("{}{}{}", self.prefix, page_number, self.suffix)
    }

    /// Anchored matcher: literal prefix, one or more digits, literal suffix
    pub fn matcher(&self) -> Regex {
        let pattern = format!(
            "^{}([0-9]+){}$",
            regex::escape(&self.prefix),
            regex::escape(&self.suffix)
        );
        // Escaped literals around a fixed group always compile
        Regex::new(&pattern).expect("escaped template pattern is valid")
    }

    /// Page number of `url` under this template, if it has this exact shape
    pub fn match_page(&self, url: &str) -> Option<u64> {
        self.matcher()
            .captures(url)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }

    /// Page number for the reference URL, defaulting to 1 when it does not fit
    pub fn current_page(&self, reference: &str) -> u64 {
        self.match_page(reference).unwrap_or(1)
    }
}
