//! Deduplication integration tests
//!
//! Fixture-driven checks plus property-based tests for idempotence,
//! exactness and never dropping distinct entries.

mod common;

use bibflow_core::deduplication::{deduplicate_with_report, MatchReason};
use bibflow_core::{deduplicate, merge, split_entries, BibEntry, BibEntryType};
use common::fixtures::load_bibtex_fixture;
use proptest::prelude::*;

// === Fixture ===

#[test]
fn test_library_fixture() {
    let entries = split_entries(&load_bibtex_fixture("library.bib"));
    assert_eq!(entries.len(), 9);

    let outcome = deduplicate_with_report(&entries);
    let keys: Vec<&str> = outcome
        .entries
        .iter()
        .map(|e| e.cite_key.as_str())
        .collect();
    assert_eq!(keys, vec!["", "salman2023", "turing1950", "knuth1997", "note1", ""]);

    let reasons: Vec<MatchReason> = outcome.duplicates.iter().map(|d| d.reason).collect();
    assert_eq!(
        reasons,
        vec![
            MatchReason::Doi,
            MatchReason::TitleYear,
            MatchReason::IdenticalText
        ]
    );
}

#[test]
fn test_kept_entry_keeps_original_text() {
    let text = load_bibtex_fixture("library.bib");
    let entries = split_entries(&text);
    let kept = deduplicate(&entries);
    for entry in &kept {
        assert_eq!(&text[entry.span.0..entry.span.1], entry.source_text);
    }
}

#[test]
fn test_merge_second_import() {
    let text = load_bibtex_fixture("library.bib");
    let first = deduplicate(&split_entries(&text));
    let second = split_entries(
        "@article{new2024, title = {Fresh}, year = 2024}\n\
         @book{again, title = {THE ART OF COMPUTER PROGRAMMING}, year = {1997}}",
    );
    let merged = merge(&first, &second);
    assert_eq!(merged.len(), first.len() + 1);
    assert_eq!(merged.last().map(|e| e.cite_key.as_str()), Some("new2024"));
}

// === Property-based tests ===

fn entry_strategy() -> impl Strategy<Value = BibEntry> {
    (
        "[a-z]{1,6}",
        proptest::option::of("10\\.[0-9]{1,3}/[a-z]{1,3}"),
        proptest::option::of("[A-Za-z ]{1,12}"),
        proptest::option::of(prop_oneof![Just("2000"), Just("2001")]),
    )
        .prop_map(|(key, doi, title, year)| {
            let mut entry = BibEntry::new(key, BibEntryType::Article);
            if let Some(doi) = doi {
                entry.add_field("doi", doi);
            }
            if let Some(title) = title {
                entry.add_field("title", title);
            }
            if let Some(year) = year {
                entry.add_field("year", year);
            }
            entry
        })
}

proptest! {
    #[test]
    fn test_dedup_idempotent(entries in proptest::collection::vec(entry_strategy(), 0..20)) {
        let once = deduplicate(&entries);
        prop_assert_eq!(deduplicate(&once), once);
    }

    #[test]
    fn test_dedup_is_order_preserving_subsequence(
        entries in proptest::collection::vec(entry_strategy(), 0..20)
    ) {
        let outcome = deduplicate_with_report(&entries);
        prop_assert_eq!(outcome.entries.len() + outcome.duplicates.len(), entries.len());

        let mut position = 0;
        for kept in &outcome.entries {
            let found = entries[position..].iter().position(|e| e == kept);
            prop_assert!(found.is_some());
            position += found.unwrap() + 1;
        }
        for dup in &outcome.duplicates {
            prop_assert!(dup.kept_index < dup.duplicate_index);
        }
    }

    #[test]
    fn test_distinct_dois_all_survive(n in 1usize..30, title in "[a-z]{0,5}") {
        let entries: Vec<BibEntry> = (0..n)
            .map(|i| {
                let mut entry = BibEntry::new(format!("k{i}"), BibEntryType::Article);
                entry.add_field("doi", format!("10.1000/{i}"));
                entry.add_field("title", title.clone());
                entry.add_field("year", "2000");
                entry
            })
            .collect();
        prop_assert_eq!(deduplicate(&entries).len(), n);
    }

    #[test]
    fn test_unique_title_years_never_dropped(n in 1usize..30) {
        let entries: Vec<BibEntry> = (0..n)
            .map(|i| {
                let mut entry = BibEntry::new("same", BibEntryType::Article);
                entry.add_field("title", format!("Title number {i}"));
                entry.add_field("year", "2000");
                entry
            })
            .collect();
        prop_assert_eq!(deduplicate(&entries).len(), n);
    }
}
