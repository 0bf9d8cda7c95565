//! Page selection parsing
//!
//! Parses strings such as `"1-3, 5, 8-6"` into sorted, zero-indexed page
//! numbers. Tokens that do not parse, and pages outside `1..=max_pages`,
//! are dropped without error.

use std::collections::BTreeSet;

use tracing::trace;

/// Parse a page selection into sorted, unique zero-indexed pages.
///
/// A range written backwards (`8-6`) selects the same pages as `6-8`.
pub fn parse_page_selection(input: &str, max_pages: usize) -> Vec<usize> {
    let mut pages = BTreeSet::new();

    for token in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match parse_token(token) {
            Some((start, end)) => {
                let (low, high) = if start <= end { (start, end) } else { (end, start) };
                let low = low.max(1);
                let high = high.min(max_pages);
                pages.extend((low..=high).map(|page| page - 1));
            }
            None => trace!(token, "ignoring page token"),
        }
    }

    pages.into_iter().collect()
}

/// A single page `n` or a range `a-b`, both 1-based
fn parse_token(token: &str) -> Option<(usize, usize)> {
    match token.split_once('-') {
        Some((start, end)) => {
            let start = start.trim().parse().ok()?;
            let end = end.trim().parse().ok()?;
            Some((start, end))
        }
        None => {
            let page = token.parse().ok()?;
            Some((page, page))
        }
    }
}
