use std::path::Path;

use bibflow_core::{
    apply_rename, parse_page_selection, split_entries, suggest_filename_with_extension,
    BibflowConfig, RenameCandidate,
};

use crate::cli::OutputFormat;
use crate::shared::{print_json, read_input, select_entry, CmdResult};

pub struct NameParts<'a> {
    pub author: &'a str,
    pub year: &'a str,
    pub title: &'a str,
    pub journal: Option<&'a str>,
    pub extension: Option<&'a str>,
}

pub fn run_suggest_name(parts: &NameParts<'_>, config: &BibflowConfig) -> CmdResult {
    let extension = parts
        .extension
        .unwrap_or(config.rename.default_extension.as_str());
    println!(
        "{}",
        suggest_filename_with_extension(
            parts.author,
            parts.year,
            parts.title,
            parts.journal,
            extension
        )
    );
    Ok(())
}

pub fn run_rename(document: &Path, bib: &Path, key: Option<&str>, dry_run: bool) -> CmdResult {
    let text = read_input(bib)?;
    let entries = split_entries(&text);
    let Some(entry) = select_entry(&entries, key) else {
        return Err(match key {
            Some(key) => format!("no record with key '{key}' in {}", bib.display()),
            None => format!("no usable record in {}", bib.display()),
        }
        .into());
    };

    let candidate = RenameCandidate::from_entry(document, entry);
    if dry_run {
        return print_json(&candidate);
    }
    let renamed = apply_rename(&candidate)?;
    println!("{}", renamed.display());
    Ok(())
}

pub fn run_pages(selection: &str, max: usize, format: OutputFormat) -> CmdResult {
    let pages = parse_page_selection(selection, max);
    match format {
        OutputFormat::Json => print_json(&pages)?,
        OutputFormat::Text => {
            let line: Vec<String> = pages.iter().map(ToString::to_string).collect();
            println!("{}", line.join(" "));
        }
    }
    Ok(())
}
