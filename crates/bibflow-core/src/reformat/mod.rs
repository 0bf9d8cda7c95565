//! Entry reformatting
//!
//! Rewrite passes run in a fixed order, authors then journals then
//! escaping, each gated by a [`FormatOptions`] flag. Opaque entries are
//! written back exactly as they were read.

mod authors;

use bibflow_bibtex::{escape_markup, format_entry, BibEntry};
use tracing::debug;

use crate::journals::{
    builtin_table, expand_journal_macro, is_journal_macro, strip_abbreviation_dots,
    JournalAbbreviator,
};
use crate::options::FormatOptions;

pub use authors::{normalize_author_list, shorten_author_list, shorten_name};

/// Fields holding identifiers or paths, never markup-escaped
const VERBATIM_FIELDS: &[&str] = &["url", "doi", "eprint", "file"];

/// Fields rewritten by journal abbreviation
const JOURNAL_FIELDS: &[&str] = &["journal", "booktitle"];

/// Applies the enabled passes to entries
pub struct Reformatter<'a> {
    options: &'a FormatOptions,
    abbreviator: &'a dyn JournalAbbreviator,
}

impl<'a> Reformatter<'a> {
    /// Reformatter using the built-in journal table
    pub fn new(options: &'a FormatOptions) -> Self {
        Self::with_abbreviator(options, builtin_table())
    }

    pub fn with_abbreviator(
        options: &'a FormatOptions,
        abbreviator: &'a dyn JournalAbbreviator,
    ) -> Self {
        Self {
            options,
            abbreviator,
        }
    }

    /// Apply every enabled pass to a copy of `entry`
    pub fn apply(&self, entry: &BibEntry) -> BibEntry {
        let mut entry = entry.clone();
        if entry.is_opaque() {
            return entry;
        }
        if self.options.process_authors {
            self.author_pass(&mut entry);
        }
        if self.options.abbreviate_journals {
            self.journal_pass(&mut entry);
        }
        if self.options.use_markup_escaping {
            escape_pass(&mut entry);
        }
        entry
    }

    /// Reformat and serialize entries, separated by blank lines
    pub fn format(&self, entries: &[BibEntry]) -> String {
        let out = entries
            .iter()
            .map(|entry| {
                if entry.is_opaque() {
                    entry.source_text.clone()
                } else {
                    format_entry(&self.apply(entry))
                }
            })
            .collect::<Vec<_>>()
            .join("\n\n");
        debug!(entries = entries.len(), options = ?self.options, "reformatted entries");
        out
    }

    fn author_pass(&self, entry: &mut BibEntry) {
        let Some(author) = entry.author() else {
            return;
        };
        let rewritten = if self.options.shortens_authors() {
            shorten_author_list(author, self.options.add_dots_to_initials)
        } else {
            normalize_author_list(author)
        };
        entry.set_field("author", rewritten);
    }

    fn journal_pass(&self, entry: &mut BibEntry) {
        for &name in JOURNAL_FIELDS {
            let Some(value) = entry.non_empty_field(name) else {
                continue;
            };
            let was_macro = is_journal_macro(value);
            let expanded = expand_journal_macro(value).into_owned();
            match self.abbreviator.abbreviate(&expanded) {
                Some(abbreviated) if self.options.add_dots_to_journal_abbrev => {
                    entry.set_field(name, abbreviated)
                }
                Some(abbreviated) => entry.set_field(name, strip_abbreviation_dots(&abbreviated)),
                None if was_macro => entry.set_field(name, expanded),
                None => {}
            }
        }
    }
}

fn escape_pass(entry: &mut BibEntry) {
    for field in &mut entry.fields {
        if VERBATIM_FIELDS.contains(&field.name.as_str()) {
            continue;
        }
        field.value = escape_markup(&field.value);
    }
}

/// Reformat entries with the built-in journal table
pub fn reformat(entries: &[BibEntry], options: &FormatOptions) -> String {
    Reformatter::new(options).format(entries)
}

/// Reformat entries with a caller-supplied journal abbreviator
pub fn reformat_with(
    entries: &[BibEntry],
    options: &FormatOptions,
    abbreviator: &dyn JournalAbbreviator,
) -> String {
    Reformatter::with_abbreviator(options, abbreviator).format(entries)
}
