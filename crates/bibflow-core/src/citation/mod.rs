//! Citation rendering
//!
//! Renders entries as one-line citations in five styles. Missing fields
//! drop their clause; author, year and title fall back to "Unknown
//! Author", "n.d." and "Untitled".

mod styles;

use std::fmt;
use std::str::FromStr;

use bibflow_bibtex::BibEntry;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::text::{decode_latex, split_authors};

pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
pub const NO_DATE: &str = "n.d.";
pub const UNTITLED: &str = "Untitled";

/// Supported citation styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CitationStyle {
    Apa,
    Mla,
    Chicago,
    Harvard,
    Ieee,
}

impl CitationStyle {
    pub const ALL: [CitationStyle; 5] = [
        CitationStyle::Apa,
        CitationStyle::Mla,
        CitationStyle::Chicago,
        CitationStyle::Harvard,
        CitationStyle::Ieee,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CitationStyle::Apa => "APA",
            CitationStyle::Mla => "MLA",
            CitationStyle::Chicago => "Chicago",
            CitationStyle::Harvard => "Harvard",
            CitationStyle::Ieee => "IEEE",
        }
    }
}

impl fmt::Display for CitationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown citation style: {0} (expected apa, mla, chicago, harvard or ieee)")]
pub struct UnknownStyle(pub String);

impl FromStr for CitationStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CitationStyle::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownStyle(s.to_string()))
    }
}

/// Display-ready fields of one entry
#[derive(Debug, Clone, Default)]
pub(crate) struct CitationFields {
    pub authors: Vec<String>,
    pub year: String,
    pub title: String,
    pub journal: Option<String>,
    pub volume: Option<String>,
    pub pages: Option<String>,
}

impl CitationFields {
    pub fn from_entry(entry: &BibEntry) -> Self {
        let display = |name: &str| {
            entry
                .non_empty_field(name)
                .map(decode_latex)
                .filter(|v| !v.is_empty())
        };

        let authors = entry
            .author()
            .map(|field| {
                split_authors(field)
                    .iter()
                    .map(|name| decode_latex(name))
                    .filter(|name| !name.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            authors,
            year: display("year").unwrap_or_else(|| NO_DATE.to_string()),
            title: display("title").unwrap_or_else(|| UNTITLED.to_string()),
            journal: entry
                .journal()
                .map(decode_latex)
                .filter(|v| !v.is_empty()),
            volume: display("volume"),
            pages: display("pages").map(|p| p.replace("--", "–")),
        }
    }
}

/// Render one entry. `index` is the 1-based position used by IEEE.
pub fn render_citation(entry: &BibEntry, style: CitationStyle, index: usize) -> String {
    let fields = CitationFields::from_entry(entry);
    match style {
        CitationStyle::Apa => styles::apa(&fields),
        CitationStyle::Mla => styles::mla(&fields),
        CitationStyle::Chicago => styles::chicago(&fields),
        CitationStyle::Harvard => styles::harvard(&fields),
        CitationStyle::Ieee => styles::ieee(&fields, index),
    }
}

/// Render every non-opaque entry, numbered from 1
pub fn render_bibliography(entries: &[BibEntry], style: CitationStyle) -> Vec<String> {
    let lines: Vec<String> = entries
        .iter()
        .filter(|entry| !entry.is_opaque())
        .enumerate()
        .map(|(i, entry)| render_citation(entry, style, i + 1))
        .collect();
    debug!(%style, rendered = lines.len(), skipped = entries.len() - lines.len(), "rendered bibliography");
    lines
}
