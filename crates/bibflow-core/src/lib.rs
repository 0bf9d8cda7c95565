//! Bibliography processing pipeline
//!
//! Builds on `bibflow-bibtex` records:
//! - Deduplication by DOI, title and year, or record text
//! - Reformatting passes (author shortening, journal abbreviation, escaping)
//! - Citations in APA, MLA, Chicago, Harvard and IEEE styles
//! - File name suggestions and non-overwriting renames
//! - Page selection parsing
//! - Parallel batch extraction
//!
//! None of these fail on malformed bibliography input: unreadable records
//! stay opaque, missing fields get fallbacks, bad page tokens are dropped.

pub mod batch;
pub mod citation;
pub mod config;
pub mod deduplication;
pub mod error;
pub mod filename;
pub mod journals;
pub mod options;
pub mod pages;
pub mod reformat;
pub mod text;

pub use bibflow_bibtex::{extract_field, split_entries, BibEntry, BibEntryType, EntrySplitter};

pub use batch::{extract_batch, split_batch};
pub use citation::{render_bibliography, render_citation, CitationStyle, UnknownStyle};
pub use config::{BibflowConfig, ConfigError};
pub use deduplication::{deduplicate, deduplicate_with_report, merge, DeduplicationOutcome};
pub use error::{BibflowError, Result};
pub use filename::{
    apply_rename, suggest_filename, suggest_filename_for_entry, suggest_filename_with_extension,
    unique_path, RenameCandidate,
};
pub use journals::{AbbreviationTable, JournalAbbreviator};
pub use options::FormatOptions;
pub use pages::parse_page_selection;
pub use reformat::{reformat, reformat_with, Reformatter};
