//! BibTeX record handling for bibflow
//!
//! This crate turns raw text into bibliography records and back:
//! - Depth-counting record splitter (nested braces never end a record early)
//! - Field extraction tolerant of nested delimiters, quotes and `#` joins
//! - Idempotent markup escaping
//! - Record formatting that always produces balanced output
//!
//! Malformed input never fails: records that cannot be read are handed back
//! opaque, with their source text intact.

mod entry;
mod escape;
mod fields;
mod formatter;
mod scan;
mod splitter;

pub use entry::{BibEntry, BibEntryType, BibField};
pub use escape::{balance_braces, escape_markup, is_balanced};
pub use fields::{extract_field, FieldScanner};
pub use formatter::{format_entries, format_entry};
pub use splitter::{split_entries, split_spans, EntrySplitter, RecordSpan};
