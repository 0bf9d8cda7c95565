//! Reformatting integration tests
//!
//! Every subset of passes must produce balanced records that resplit into
//! the same number of entries, and running the passes twice must change
//! nothing.

mod common;

use bibflow_bibtex::is_balanced;
use bibflow_core::{reformat, reformat_with, split_entries, AbbreviationTable, FormatOptions};
use common::fixtures::load_bibtex_fixture;
use insta::assert_snapshot;
use proptest::prelude::*;

fn options_from_bits(bits: u8) -> FormatOptions {
    FormatOptions {
        shorten_authors: bits & 1 != 0,
        abbreviate_journals: bits & 2 != 0,
        use_markup_escaping: bits & 4 != 0,
        add_dots_to_initials: bits & 8 != 0,
        add_dots_to_journal_abbrev: bits & 16 != 0,
        process_authors: bits & 32 != 0,
    }
}

#[test]
fn test_every_option_subset_on_fixture() {
    let text = load_bibtex_fixture("library.bib");
    let entries = split_entries(&text);

    for bits in 0..64u8 {
        let options = options_from_bits(bits);
        let once = reformat(&entries, &options);
        let resplit = split_entries(&once);
        assert_eq!(resplit.len(), entries.len(), "options: {options:?}");
        for entry in resplit.iter().filter(|e| !e.is_opaque()) {
            assert!(is_balanced(&entry.source_text), "options: {options:?}");
        }

        let twice = reformat(&resplit, &options);
        assert_eq!(twice, once, "options: {options:?}");
    }
}

#[test]
fn test_full_pass_snapshot() {
    let text = "@article{salman2023,\n  author = {Salman, Oguz Umut and van der Waals, Johannes},\n  title = {Heat & Noise at 5% strain},\n  journal = {Physical Review Letters},\n  year = {2023},\n}";
    let options = FormatOptions {
        shorten_authors: true,
        abbreviate_journals: true,
        use_markup_escaping: true,
        ..FormatOptions::default()
    };
    assert_snapshot!(reformat(&split_entries(text), &options), @r###"
    @article{salman2023,
        author = {O. U. Salman and J. van der Waals},
        title = {Heat \& Noise at 5\% strain},
        journal = {Phys. Rev. Lett.},
        year = 2023,
    }
    "###);
}

#[test]
fn test_configured_abbreviation() {
    let mut table = AbbreviationTable::builtin();
    table.add_title("Physical Review Letters", "PRL");
    let options = FormatOptions {
        abbreviate_journals: true,
        ..FormatOptions::default()
    };
    let entries = split_entries("@article{k, journal = {Physical Review Letters}}");
    assert!(reformat_with(&entries, &options, &table).contains("journal = {PRL}"));
}

#[test]
fn test_brace_protected_journal() {
    let entries = split_entries("@article{k, journal = {{Physical Review B}}}");
    let dotted = FormatOptions {
        abbreviate_journals: true,
        ..FormatOptions::default()
    };
    let once = reformat(&entries, &dotted);
    assert!(once.contains("journal = {{Phys. Rev. B}}"), "{once}");
    assert_eq!(reformat(&split_entries(&once), &dotted), once);

    let dotless = FormatOptions {
        add_dots_to_journal_abbrev: false,
        ..dotted
    };
    assert!(reformat(&entries, &dotless).contains("journal = {{Phys Rev B}}"));
}

#[test]
fn test_ampersand_author_is_stable_under_escaping() {
    let entries = split_entries("@misc{k, author = {Barnes & Noble}}");
    let options = FormatOptions {
        shorten_authors: true,
        use_markup_escaping: true,
        ..FormatOptions::default()
    };
    let once = reformat(&entries, &options);
    assert!(once.contains("author = {B. \\& Noble}"), "{once}");
    assert_eq!(reformat(&split_entries(&once), &options), once);
}

// === Property-based tests ===

fn value() -> impl Strategy<Value = String> {
    "[A-Za-z &%$#_~^{}.,-]{0,24}"
}

fn author() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            ("[A-Z][a-z]{1,6}", "[A-Z][a-z]{1,6}").prop_map(|(s, g)| format!("{s}, {g}")),
            ("[A-Z][a-z]{1,6}", "[A-Z][a-z]{1,6}").prop_map(|(g, s)| format!("{g} {s}")),
            ("[A-Z][a-z]{1,6}", "[A-Z][a-z]{1,6}")
                .prop_map(|(g, s)| format!("{g} van {s}")),
            ("[A-Z][a-z]{1,6}", "[A-Z][a-z]{1,6}").prop_map(|(a, b)| format!("{a} & {b}")),
            ("[A-Z][a-z]{1,6}", "[A-Z]", "[A-Z][a-z]{1,6}")
                .prop_map(|(g, m, s)| format!("{g}~{m}.~{s}")),
        ],
        1..4,
    )
    .prop_map(|names| names.join(" and "))
}

fn journal() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Physical Review B".to_string()),
        Just("The Astrophysical Journal".to_string()),
        Just("\\mnras".to_string()),
        Just("{Physical Review B}".to_string()),
        Just("Journal of Physics: Condensed Matter".to_string()),
        "[A-Z][a-z]{2,8}( [A-Za-z]{2,8}){0,3}",
    ]
}

proptest! {
    #[test]
    fn test_passes_compose(
        bits in 0u8..64,
        author in author(),
        journal in journal(),
        title in value(),
        note in value(),
    ) {
        let record = format!(
            "@article{{key,\n  author = {{{author}}},\n  journal = {{{journal}}},\n  title = {{{title}}},\n  note = {{{note}}},\n}}"
        );
        let entries = split_entries(&record);
        prop_assume!(entries.len() == 1 && !entries[0].is_opaque());

        let options = options_from_bits(bits);
        let once = reformat(&entries, &options);
        let resplit = split_entries(&once);
        prop_assert_eq!(resplit.len(), 1);
        prop_assert!(resplit[0].terminated);
        prop_assert!(is_balanced(&once));

        let twice = reformat(&resplit, &options);
        prop_assert_eq!(twice, once);
    }
}
