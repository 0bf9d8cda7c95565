//! Journal title abbreviation
//!
//! A [`JournalAbbreviator`] turns full journal titles into their abbreviated
//! form. The built-in [`AbbreviationTable`] checks whole-title overrides
//! first, then abbreviates word by word, dropping articles and
//! prepositions. Titles that are already abbreviated are recognized and
//! returned in canonical form, so abbreviating twice changes nothing.

mod abbreviations;
mod macros;

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use tracing::trace;

use crate::text::collapse_whitespace;

pub use macros::{expand_journal_macro, is_journal_macro};

lazy_static! {
    static ref BUILTIN: AbbreviationTable = AbbreviationTable::builtin();
    static ref STOP_WORDS: HashSet<&'static str> =
        abbreviations::STOP_WORDS.iter().copied().collect();
}

/// Source of journal abbreviations
pub trait JournalAbbreviator: Send + Sync {
    /// Abbreviated form of `journal`, with a period after every abbreviated
    /// word, or `None` to leave the title as written.
    fn abbreviate(&self, journal: &str) -> Option<String>;
}

/// Shared built-in table
pub fn builtin_table() -> &'static AbbreviationTable {
    &BUILTIN
}

/// Lower-case, drop periods and collapse whitespace
fn fold(s: &str) -> String {
    collapse_whitespace(&s.replace('.', " ")).to_lowercase()
}

/// Table-driven abbreviator
#[derive(Debug, Clone, Default)]
pub struct AbbreviationTable {
    /// Folded full title to abbreviation
    titles: HashMap<String, String>,
    /// Folded abbreviation to its canonical spelling
    abbreviated_titles: HashMap<String, String>,
    /// Lower-cased word to abbreviation
    words: HashMap<String, String>,
    /// Folded word abbreviation to its canonical spelling
    known_words: HashMap<String, String>,
}

impl AbbreviationTable {
    /// Empty table; abbreviates nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with the built-in title and word lists
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (word, abbrev) in abbreviations::WORD_ABBREVIATIONS {
            table.add_word(word, abbrev);
        }
        for (title, abbrev) in abbreviations::TITLE_ABBREVIATIONS {
            table.add_title(title, abbrev);
        }
        table
    }

    /// Add or replace a whole-title abbreviation
    pub fn add_title(&mut self, title: &str, abbreviation: &str) {
        let abbreviation = collapse_whitespace(abbreviation);
        self.titles.insert(fold(title), abbreviation.clone());
        self.abbreviated_titles
            .insert(fold(&abbreviation), abbreviation);
    }

    /// Add or replace a single-word abbreviation
    pub fn add_word(&mut self, word: &str, abbreviation: &str) {
        let abbreviation = abbreviation.trim().to_string();
        self.words
            .insert(word.trim().to_lowercase(), abbreviation.clone());
        self.known_words.insert(fold(&abbreviation), abbreviation);
    }

    /// Number of title and word entries
    pub fn len(&self) -> usize {
        self.titles.len() + self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn abbreviate_words(&self, title: &str) -> Option<String> {
        let tokens: Vec<&str> = title.split(' ').collect();
        if tokens.len() < 2 {
            return None;
        }

        // An undotted abbreviation ("Phys Rev B") only counts when the whole
        // title is written that way; otherwise "Process" stays a word.
        let undotted_ok = tokens.iter().all(|token| {
            let core = token.trim_end_matches([',', ':', ';']);
            !core.contains('.')
                && (self.known_words.contains_key(&fold(core))
                    || STOP_WORDS.contains(core)
                    || !core.chars().any(char::is_lowercase))
        });

        let mut changed = false;
        let mut out: Vec<Option<String>> = Vec::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            let core = token.trim_end_matches([',', ':', ';']);
            let trailing = &token[core.len()..];
            let lower = core.to_lowercase();
            let known = (core.ends_with('.') || undotted_ok)
                .then(|| self.known_words.get(&fold(core)))
                .flatten();

            if let Some(abbrev) = self.words.get(&lower) {
                changed = true;
                out.push(Some(format!("{abbrev}{trailing}")));
            } else if let Some(canonical) = known {
                changed = true;
                out.push(Some(format!("{canonical}{trailing}")));
            } else if STOP_WORDS.contains(lower.as_str()) && (i == 0 || core == lower) {
                out.push(None);
            } else {
                out.push(Some((*token).to_string()));
            }
        }

        if !changed {
            return None;
        }
        let words: Vec<String> = out.into_iter().flatten().collect();
        Some(words.join(" "))
    }
}

impl JournalAbbreviator for AbbreviationTable {
    fn abbreviate(&self, journal: &str) -> Option<String> {
        if let Some(inner) = enclosing_group(journal.trim()) {
            return self.abbreviate(inner).map(|abbrev| format!("{{{abbrev}}}"));
        }

        let title = collapse_whitespace(journal);
        if title.is_empty() {
            return None;
        }

        let key = fold(&title);
        if let Some(abbrev) = self.titles.get(&key) {
            trace!(journal = %title, "whole-title abbreviation");
            return Some(abbrev.clone());
        }
        if let Some(canonical) = self.abbreviated_titles.get(&key) {
            return Some(canonical.clone());
        }
        self.abbreviate_words(&title)
    }
}

/// Contents of a value that is one brace group from end to end
/// (`{Physical Review B}`)
fn enclosing_group(value: &str) -> Option<&str> {
    if !value.starts_with('{') {
        return None;
    }
    let mut depth = 0usize;
    let mut escaped = false;
    for (idx, c) in value.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return (idx == value.len() - 1).then(|| &value[1..idx]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Remove the periods that mark abbreviated words.
///
/// Accent commands such as `\.z` keep their dot.
pub fn strip_abbreviation_dots(abbreviated: &str) -> String {
    let mut out = String::with_capacity(abbreviated.len());
    let mut prev_backslash = false;
    for c in abbreviated.chars() {
        if c == '.' && !prev_backslash {
            continue;
        }
        prev_backslash = c == '\\' && !prev_backslash;
        out.push(c);
    }
    out
}
