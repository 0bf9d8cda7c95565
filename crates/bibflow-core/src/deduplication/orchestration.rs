//! Deduplication over ordered entry lists
//!
//! Every entry gets exactly one identity key. The first entry to claim a
//! key is kept in place; later entries with the same key are dropped.

use std::collections::HashMap;

use bibflow_bibtex::{format_entry, BibEntry};
use serde::Serialize;
use tracing::debug;

use super::normalization::{normalize_doi, normalize_title, normalize_year};

/// Identity of an entry for duplicate detection
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DedupKey {
    /// Normalized DOI
    Doi(String),
    /// Normalized title and year
    TitleYear { title: String, year: String },
    /// Exact record text
    Content(String),
}

/// Which kind of key two entries shared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchReason {
    Doi,
    TitleYear,
    IdenticalText,
}

impl DedupKey {
    /// Key for an entry: DOI, else title and year, else the record text
    pub fn for_entry(entry: &BibEntry) -> Self {
        if !entry.is_opaque() {
            if let Some(doi) = entry.doi().and_then(normalize_doi) {
                return DedupKey::Doi(doi);
            }
            if let (Some(title), Some(year)) = (entry.title(), entry.year()) {
                let title = normalize_title(title);
                if !title.is_empty() {
                    return DedupKey::TitleYear {
                        title,
                        year: normalize_year(year),
                    };
                }
            }
        }

        if entry.source_text.is_empty() {
            // Entries built in code have no source text
            DedupKey::Content(format_entry(entry))
        } else {
            DedupKey::Content(entry.source_text.clone())
        }
    }

    pub fn reason(&self) -> MatchReason {
        match self {
            DedupKey::Doi(_) => MatchReason::Doi,
            DedupKey::TitleYear { .. } => MatchReason::TitleYear,
            DedupKey::Content(_) => MatchReason::IdenticalText,
        }
    }
}

/// One dropped entry and the entry it duplicated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateMatch {
    /// Input index of the kept entry
    pub kept_index: usize,
    /// Input index of the dropped entry
    pub duplicate_index: usize,
    pub reason: MatchReason,
}

/// Result of [`deduplicate_with_report`]
#[derive(Debug, Clone, Default)]
pub struct DeduplicationOutcome {
    /// Surviving entries in first-seen order
    pub entries: Vec<BibEntry>,
    /// Dropped entries, in input order
    pub duplicates: Vec<DuplicateMatch>,
}

/// Remove duplicates, keeping the first occurrence of each work
pub fn deduplicate(entries: &[BibEntry]) -> Vec<BibEntry> {
    deduplicate_with_report(entries).entries
}

/// Remove duplicates and report which entry each dropped one matched
pub fn deduplicate_with_report(entries: &[BibEntry]) -> DeduplicationOutcome {
    let mut seen: HashMap<DedupKey, usize> = HashMap::with_capacity(entries.len());
    let mut outcome = DeduplicationOutcome::default();

    for (index, entry) in entries.iter().enumerate() {
        let key = DedupKey::for_entry(entry);
        match seen.get(&key) {
            Some(&kept_index) => outcome.duplicates.push(DuplicateMatch {
                kept_index,
                duplicate_index: index,
                reason: key.reason(),
            }),
            None => {
                seen.insert(key, index);
                outcome.entries.push(entry.clone());
            }
        }
    }

    debug!(
        input = entries.len(),
        kept = outcome.entries.len(),
        dropped = outcome.duplicates.len(),
        "deduplicated entries"
    );
    outcome
}

/// Combine a previous batch with a new one, dropping duplicates across both
pub fn merge(previous: &[BibEntry], new: &[BibEntry]) -> Vec<BibEntry> {
    let combined: Vec<BibEntry> = previous.iter().chain(new).cloned().collect();
    deduplicate(&combined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bibflow_bibtex::{split_entries, BibEntryType};

    fn article(key: &str, doi: Option<&str>, title: &str, year: &str) -> BibEntry {
        let mut entry = BibEntry::new(key, BibEntryType::Article);
        if let Some(doi) = doi {
            entry.add_field("doi", doi);
        }
        entry.add_field("title", title);
        entry.add_field("year", year);
        entry
    }

    #[test]
    fn test_doi_match_ignores_other_fields() {
        let entries = vec![
            article("a", Some("10.1/X"), "First title", "2020"),
            article("b", Some("https://doi.org/10.1/x"), "Completely different", "1999"),
        ];
        let outcome = deduplicate_with_report(&entries);
        assert_eq!(outcome.entries.len(), 1);
        assert_eq!(outcome.entries[0].cite_key, "a");
        assert_eq!(
            outcome.duplicates,
            vec![DuplicateMatch {
                kept_index: 0,
                duplicate_index: 1,
                reason: MatchReason::Doi
            }]
        );
    }

    #[test]
    fn test_title_year_match() {
        let entries = vec![
            article("a", None, "The {Q}uantum   Theory", "2020"),
            article("b", None, "the quantum theory.", "2020"),
            article("c", None, "the quantum theory", "2021"),
        ];
        let kept: Vec<_> = deduplicate(&entries).into_iter().map(|e| e.cite_key).collect();
        assert_eq!(kept, vec!["a", "c"]);
    }

    #[test]
    fn test_entries_without_keys_fall_back_to_text() {
        let text = "@misc{a, note = {one}}\n@misc{a, note = {one}}\n@misc{a, note = {two}}";
        let entries = split_entries(text);
        let outcome = deduplicate_with_report(&entries);
        assert_eq!(outcome.entries.len(), 2);
        assert_eq!(outcome.duplicates[0].reason, MatchReason::IdenticalText);
    }

    #[test]
    fn test_opaque_entries_use_text() {
        let text = "@string{x = \"a\"}\n@string{x = \"a\"}\n@string{y = \"a\"}";
        assert_eq!(deduplicate(&split_entries(text)).len(), 2);
    }

    #[test]
    fn test_built_entries_without_source_compare_by_content() {
        let mut a = BibEntry::new("a", BibEntryType::Misc);
        a.add_field("note", "one");
        let mut b = BibEntry::new("b", BibEntryType::Misc);
        b.add_field("note", "two");
        assert_eq!(deduplicate(&[a.clone(), b, a]).len(), 2);
    }

    #[test]
    fn test_merge_preserves_previous_order() {
        let previous = vec![article("a", Some("10.1/a"), "A", "2000")];
        let new = vec![
            article("b", Some("10.1/b"), "B", "2001"),
            article("a2", Some("10.1/A"), "A again", "2000"),
        ];
        let merged: Vec<_> = merge(&previous, &new).into_iter().map(|e| e.cite_key).collect();
        assert_eq!(merged, vec!["a", "b"]);
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let entries = vec![
            article("a", Some("10.1/a"), "A", "2000"),
            article("b", None, "A", "2000"),
            article("c", Some("10.1/a"), "C", "2002"),
        ];
        let once = deduplicate(&entries);
        assert_eq!(deduplicate(&once), once);
    }
}
