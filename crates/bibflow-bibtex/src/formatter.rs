//! Record serialization
//!
//! Writes entries back out as BibTeX, one field per line. Opaque entries
//! are written as their source text.

use std::fmt::Write;

use crate::entry::BibEntry;
use crate::escape::balance_braces;

/// Serialize one entry
pub fn format_entry(entry: &BibEntry) -> String {
    if entry.is_opaque() {
        return entry.source_text.clone();
    }

    let mut out = format!("@{}{{{},\n", entry.entry_type.as_str(), entry.cite_key);
    for field in &entry.fields {
        // Writing to a String cannot fail
        let _ = writeln!(out, "    {} = {},", field.name, format_field_value(&field.value));
    }
    out.push('}');
    out
}

/// Serialize entries separated by a blank line
pub fn format_entries(entries: &[BibEntry]) -> String {
    entries
        .iter()
        .map(format_entry)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Numbers go bare, everything else in braces
fn format_field_value(value: &str) -> String {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
        return value.to_string();
    }

    let value = balance_braces(value);
    format!("{{{value}}}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::BibEntryType;
    use crate::splitter::split_entries;

    #[test]
    fn test_fields_one_per_line() {
        let mut entry = BibEntry::new("roe1999", BibEntryType::Article);
        entry.add_field("author", "Roe, Richard");
        entry.add_field("title", "Granular Flow");
        entry.add_field("year", "1999");

        let formatted = format_entry(&entry);
        assert!(formatted.starts_with("@article{roe1999,\n"));
        assert!(formatted.contains("    author = {Roe, Richard},\n"));
        assert!(formatted.contains("    title = {Granular Flow},\n"));
        assert!(formatted.contains("    year = 1999,\n"));
        assert!(formatted.ends_with('}'));
    }

    #[test]
    fn test_format_empty_value_is_braced() {
        let mut entry = BibEntry::new("k", BibEntryType::Misc);
        entry.add_field("note", "");
        assert!(format_entry(&entry).contains("note = {},"));
    }

    #[test]
    fn test_opaque_entry_passes_through() {
        let entries = split_entries("@comment{keep {me} exactly}");
        assert_eq!(format_entry(&entries[0]), "@comment{keep {me} exactly}");
    }

    #[test]
    fn test_unbalanced_value_stays_parseable() {
        let mut entry = BibEntry::new("k", BibEntryType::Misc);
        entry.add_field("title", "half { open");
        entry.add_field("year", "2001");

        let text = format_entry(&entry);
        let reparsed = split_entries(&text);
        assert_eq!(reparsed.len(), 1);
        assert!(reparsed[0].terminated);
        assert_eq!(reparsed[0].year(), Some("2001"));
    }

    #[test]
    fn test_format_then_split_preserves_fields() {
        let input = "@book{knuth, title = {The {Art} of Programming}, author = {Knuth, Donald}}";
        let entries = split_entries(input);
        let again = split_entries(&format_entries(&entries));
        assert_eq!(again[0].fields, entries[0].fields);
        assert_eq!(again[0].cite_key, "knuth");
    }
}
