//! Bibliography entry data structures

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::fields::FieldScanner;
use crate::scan::record_header;
use crate::splitter::RecordSpan;

/// BibTeX entry type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BibEntryType {
    Article,
    Book,
    Booklet,
    InBook,
    InCollection,
    InProceedings,
    Manual,
    MastersThesis,
    Misc,
    PhdThesis,
    Proceedings,
    TechReport,
    Unpublished,
    Online,
    Software,
    Dataset,
    Unknown,
}

impl BibEntryType {
    /// Parse an entry type from a string (case-insensitive)
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "article" => Self::Article,
            "book" => Self::Book,
            "booklet" => Self::Booklet,
            "inbook" => Self::InBook,
            "incollection" => Self::InCollection,
            "inproceedings" | "conference" => Self::InProceedings,
            "manual" => Self::Manual,
            "mastersthesis" => Self::MastersThesis,
            "misc" => Self::Misc,
            "phdthesis" => Self::PhdThesis,
            "proceedings" => Self::Proceedings,
            "techreport" => Self::TechReport,
            "unpublished" => Self::Unpublished,
            "online" | "electronic" | "www" => Self::Online,
            "software" => Self::Software,
            "dataset" => Self::Dataset,
            _ => Self::Unknown,
        }
    }

    /// Canonical lower-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Book => "book",
            Self::Booklet => "booklet",
            Self::InBook => "inbook",
            Self::InCollection => "incollection",
            Self::InProceedings => "inproceedings",
            Self::Manual => "manual",
            Self::MastersThesis => "mastersthesis",
            Self::Misc => "misc",
            Self::PhdThesis => "phdthesis",
            Self::Proceedings => "proceedings",
            Self::TechReport => "techreport",
            Self::Unpublished => "unpublished",
            Self::Online => "online",
            Self::Software => "software",
            Self::Dataset => "dataset",
            Self::Unknown => "unknown",
        }
    }

    /// Whether entries of this type usually name their venue in `booktitle`
    pub fn has_booktitle(&self) -> bool {
        matches!(
            self,
            Self::InBook | Self::InCollection | Self::InProceedings | Self::Proceedings
        )
    }
}

/// A single field (lower-cased name and raw value)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibField {
    pub name: String,
    pub value: String,
}

/// One record cut out of a text blob.
///
/// `source_text` is always the exact substring found in the input, so an
/// entry that no pass can handle is written back out untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibEntry {
    pub entry_type: BibEntryType,
    pub cite_key: String,
    pub fields: Vec<BibField>,
    pub source_text: String,
    /// Byte range of `source_text` in the input it was split from
    pub span: (usize, usize),
    /// False when no matching closing delimiter was found
    pub terminated: bool,
}

impl BibEntry {
    /// Create an empty, well-formed entry
    pub fn new(cite_key: impl Into<String>, entry_type: BibEntryType) -> Self {
        Self {
            entry_type,
            cite_key: cite_key.into(),
            fields: Vec::new(),
            source_text: String::new(),
            span: (0, 0),
            terminated: true,
        }
    }

    /// Build an entry from a span produced by the splitter.
    ///
    /// Records with an unknown type, no citation key or no closing delimiter
    /// come back opaque: no fields, source text kept.
    pub fn from_span(span: RecordSpan<'_>) -> Self {
        let mut entry = Self {
            entry_type: BibEntryType::Unknown,
            cite_key: String::new(),
            fields: Vec::new(),
            source_text: span.text.to_string(),
            span: (span.start, span.end),
            terminated: span.terminated,
        };

        let Ok((body, (type_name, _))) = record_header(span.text) else {
            return entry;
        };
        entry.entry_type = BibEntryType::from_str(type_name);
        if entry.entry_type == BibEntryType::Unknown || !span.terminated {
            trace!(type_name, terminated = span.terminated, "leaving record opaque");
            return entry;
        }

        // The closing delimiter is the last byte of a terminated record.
        let body = &body[..body.len().saturating_sub(1)];
        let (key, rest) = match body.find(',') {
            Some(pos) => (&body[..pos], &body[pos + 1..]),
            None => (body, ""),
        };
        let key = key.trim();
        if key.is_empty() || key.contains(|c: char| c.is_whitespace() || "={}\"".contains(c)) {
            trace!(key, "record has no usable citation key");
            entry.entry_type = BibEntryType::Unknown;
            return entry;
        }
        entry.cite_key = key.to_string();

        for (name, value) in FieldScanner::new(rest) {
            if entry.get_field(name).is_some() {
                trace!(field = name, cite_key = key, "ignoring repeated field");
                continue;
            }
            entry.add_field(name, value);
        }
        entry
    }

    /// Parse a single record from text; returns `None` when no record header is present
    pub fn parse(text: &str) -> Option<Self> {
        crate::splitter::EntrySplitter::new(text)
            .next()
            .map(Self::from_span)
    }

    /// Records that field-based operations must skip
    pub fn is_opaque(&self) -> bool {
        self.entry_type == BibEntryType::Unknown || !self.terminated || self.cite_key.is_empty()
    }

    /// Add a field; the name is stored lower-cased
    pub fn add_field(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.fields.push(BibField {
            name: name.as_ref().to_ascii_lowercase(),
            value: value.into(),
        });
    }

    /// Replace a field's value, adding the field when it is missing
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self
            .fields
            .iter_mut()
            .find(|f| f.name.eq_ignore_ascii_case(name))
        {
            Some(field) => field.value = value,
            None => self.add_field(name, value),
        }
    }

    /// Get a field value by name (case-insensitive)
    pub fn get_field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
            .map(|f| f.value.as_str())
    }

    /// Field value with surrounding whitespace removed; blank values count as absent
    pub fn non_empty_field(&self, name: &str) -> Option<&str> {
        self.get_field(name)
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    pub fn title(&self) -> Option<&str> {
        self.non_empty_field("title")
    }

    pub fn author(&self) -> Option<&str> {
        self.non_empty_field("author")
    }

    pub fn year(&self) -> Option<&str> {
        self.non_empty_field("year")
    }

    pub fn doi(&self) -> Option<&str> {
        self.non_empty_field("doi")
    }

    /// Journal name, falling back to `booktitle` for proceedings-style entries
    pub fn journal(&self) -> Option<&str> {
        let (venue, fallback) = if self.entry_type.has_booktitle() {
            ("booktitle", "journal")
        } else {
            ("journal", "booktitle")
        };
        self.non_empty_field(venue)
            .or_else(|| self.non_empty_field(fallback))
    }
}
