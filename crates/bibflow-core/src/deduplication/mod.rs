//! Deduplication of entries describing the same work
//!
//! Entries are identified by normalized DOI, else by normalized title and
//! year, else by their exact record text.

mod normalization;
mod orchestration;

pub use orchestration::{
    deduplicate, deduplicate_with_report, merge, DedupKey, DeduplicationOutcome, DuplicateMatch,
    MatchReason,
};
