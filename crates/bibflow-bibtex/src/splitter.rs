//! Record splitting
//!
//! Cuts a text blob into `@type{...}` records by counting brace depth.
//! Anything between records is commentary and is dropped. Every span is a
//! verbatim slice of the input.

use tracing::{debug, trace, warn};

use crate::entry::BibEntry;
use crate::scan::{find_group_end, header_open, next_line_header};

/// A record located in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSpan<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
    /// False when the input ran out before the closing delimiter
    pub terminated: bool,
}

/// Lazy iterator over the records of a text blob.
///
/// Pure over its input: clone it, or build a new one, to start over.
#[derive(Debug, Clone)]
pub struct EntrySplitter<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> EntrySplitter<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn span(&self, start: usize, end: usize, terminated: bool) -> RecordSpan<'a> {
        RecordSpan {
            text: &self.input[start..end],
            start,
            end,
            terminated,
        }
    }
}

impl<'a> Iterator for EntrySplitter<'a> {
    type Item = RecordSpan<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.input.as_bytes();

        while let Some(offset) = self.input[self.pos..].find('@') {
            let start = self.pos + offset;
            let Some(open) = header_open(self.input, start) else {
                trace!(position = start, "skipping '@' without a record header");
                self.pos = start + 1;
                continue;
            };

            if let Some(close) = find_group_end(bytes, open) {
                self.pos = close + 1;
                return Some(self.span(start, close + 1, true));
            }

            // No closing delimiter: stop before the next record that starts a line.
            let limit = next_line_header(self.input, open + 1).unwrap_or(bytes.len());
            let end = start + self.input[start..limit].trim_end().len();
            warn!(position = start, "record has no closing delimiter");
            self.pos = limit;
            return Some(self.span(start, end, false));
        }

        self.pos = self.input.len();
        None
    }
}

/// Split a text blob into records, lazily
pub fn split_spans(text: &str) -> EntrySplitter<'_> {
    EntrySplitter::new(text)
}

/// Split a text blob into parsed entries, in input order.
///
/// Records that cannot be parsed are returned opaque rather than dropped.
pub fn split_entries(text: &str) -> Vec<BibEntry> {
    let entries: Vec<BibEntry> = EntrySplitter::new(text).map(BibEntry::from_span).collect();
    debug!(
        records = entries.len(),
        opaque = entries.iter().filter(|e| e.is_opaque()).count(),
        "split text into records"
    );
    entries
}
