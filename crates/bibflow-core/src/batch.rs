//! Parallel extraction over many sources
//!
//! Splitting is independent per source and runs on the rayon pool.
//! Deduplication runs afterwards over the results in input order, so the
//! outcome does not depend on thread scheduling.

use bibflow_bibtex::{split_entries, BibEntry};
use rayon::prelude::*;
use tracing::debug;

use crate::deduplication::deduplicate;

/// Split every source in parallel; one entry list per source, in input order
pub fn split_batch<S: AsRef<str> + Sync>(sources: &[S]) -> Vec<Vec<BibEntry>> {
    sources
        .par_iter()
        .map(|source| split_entries(source.as_ref()))
        .collect()
}

/// Split every source in parallel and deduplicate across all of them.
///
/// Entries from earlier sources win over later duplicates.
pub fn extract_batch<S: AsRef<str> + Sync>(sources: &[S]) -> Vec<BibEntry> {
    let per_source = split_batch(sources);
    let all: Vec<BibEntry> = per_source.into_iter().flatten().collect();
    let unique = deduplicate(&all);
    debug!(
        sources = sources.len(),
        entries = all.len(),
        unique = unique.len(),
        "extracted batch"
    );
    unique
}
