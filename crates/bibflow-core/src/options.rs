//! Reformatting options

use serde::{Deserialize, Serialize};

/// Options for the reformatting passes.
///
/// Each flag gates one pass; any subset may be enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Reduce given names to initials ("O. U. Salman"). Needs `process_authors`.
    pub shorten_authors: bool,
    /// Rewrite `journal` and `booktitle` to their abbreviated form
    pub abbreviate_journals: bool,
    /// Escape markup-significant characters in field values
    pub use_markup_escaping: bool,
    /// Put periods after initials
    pub add_dots_to_initials: bool,
    /// Put periods after abbreviated journal words
    pub add_dots_to_journal_abbrev: bool,
    /// Normalize the author field (whitespace, " and " separators)
    pub process_authors: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            shorten_authors: false,
            abbreviate_journals: false,
            use_markup_escaping: false,
            add_dots_to_initials: true,
            add_dots_to_journal_abbrev: true,
            process_authors: true,
        }
    }
}

impl FormatOptions {
    /// Options with every pass disabled; output is plain re-serialization
    pub fn passthrough() -> Self {
        Self {
            process_authors: false,
            ..Self::default()
        }
    }

    /// Whether author names are reduced to initials
    pub fn shortens_authors(&self) -> bool {
        self.process_authors && self.shorten_authors
    }
}
