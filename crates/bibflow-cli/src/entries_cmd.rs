use std::path::{Path, PathBuf};

use bibflow_core::deduplication::MatchReason;
use bibflow_core::{deduplicate_with_report, extract_field, split_batch, split_entries};
use serde::Serialize;
use tracing::debug;

use crate::cli::OutputFormat;
use crate::shared::{print_json, read_input, CmdResult};

#[derive(Serialize)]
struct RecordSummary<'a> {
    index: usize,
    entry_type: &'static str,
    cite_key: &'a str,
    start: usize,
    end: usize,
    opaque: bool,
    terminated: bool,
}

pub fn run_split(file: &Path, format: OutputFormat) -> CmdResult {
    let text = read_input(file)?;
    let entries = split_entries(&text);
    let summaries: Vec<RecordSummary<'_>> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| RecordSummary {
            index,
            entry_type: entry.entry_type.as_str(),
            cite_key: &entry.cite_key,
            start: entry.span.0,
            end: entry.span.1,
            opaque: entry.is_opaque(),
            terminated: entry.terminated,
        })
        .collect();

    match format {
        OutputFormat::Json => print_json(&summaries)?,
        OutputFormat::Text => {
            for s in &summaries {
                let marker = if s.opaque { " (opaque)" } else { "" };
                println!(
                    "{}\t{}\t{}\t{}..{}{marker}",
                    s.index, s.entry_type, s.cite_key, s.start, s.end
                );
            }
        }
    }
    Ok(())
}

pub fn run_field(file: &Path, name: &str, key: Option<&str>) -> CmdResult {
    let text = read_input(file)?;
    for entry in split_entries(&text) {
        if entry.is_opaque() || key.is_some_and(|k| k != entry.cite_key) {
            continue;
        }
        if let Some(value) = extract_field(&entry.source_text, name) {
            println!("{}\t{value}", entry.cite_key);
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct DroppedRecord<'a> {
    kept: &'a str,
    dropped: &'a str,
    reason: MatchReason,
}

pub fn run_dedup(files: &[PathBuf], report: bool) -> CmdResult {
    let sources = files
        .iter()
        .map(|f| read_input(f))
        .collect::<Result<Vec<_>, _>>()?;
    let all: Vec<_> = split_batch(sources.as_slice()).into_iter().flatten().collect();
    let outcome = deduplicate_with_report(&all);
    debug!(files = files.len(), kept = outcome.entries.len(), "deduplicated");

    if report {
        let dropped: Vec<DroppedRecord<'_>> = outcome
            .duplicates
            .iter()
            .map(|m| DroppedRecord {
                kept: &all[m.kept_index].cite_key,
                dropped: &all[m.duplicate_index].cite_key,
                reason: m.reason,
            })
            .collect();
        return print_json(&dropped);
    }

    let texts: Vec<&str> = outcome.entries.iter().map(|e| e.source_text.as_str()).collect();
    println!("{}", texts.join("\n\n"));
    Ok(())
}
