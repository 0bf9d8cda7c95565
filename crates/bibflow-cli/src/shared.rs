use std::io::{self, Read};
use std::path::Path;

use bibflow_core::{BibEntry, BibflowConfig, BibflowError, ConfigError, FormatOptions};
use serde::Serialize;

use crate::cli::PassOverrides;

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Read a file, or stdin when the path is `-`
pub fn read_input(path: &Path) -> Result<String, BibflowError> {
    let mut text = String::new();
    if path.as_os_str() == "-" {
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|source| BibflowError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        return Ok(text);
    }
    std::fs::read_to_string(path).map_err(|source| BibflowError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_config(path: Option<&Path>) -> Result<BibflowConfig, ConfigError> {
    match path {
        Some(path) => BibflowConfig::load(path),
        None => BibflowConfig::load_default(),
    }
}

/// The entry with `key`, or the first well-formed entry
pub fn select_entry<'a>(entries: &'a [BibEntry], key: Option<&str>) -> Option<&'a BibEntry> {
    match key {
        Some(key) => entries.iter().find(|e| e.cite_key == key),
        None => entries.iter().find(|e| !e.is_opaque()),
    }
}

pub fn print_json<T: Serialize>(value: &T) -> CmdResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

impl PassOverrides {
    /// Apply the flags that were given on top of `base`
    pub fn apply(&self, base: &FormatOptions) -> FormatOptions {
        let mut options = base.clone();
        let pairs = [
            (self.shorten_authors, &mut options.shorten_authors),
            (self.abbreviate_journals, &mut options.abbreviate_journals),
            (self.escape, &mut options.use_markup_escaping),
            (self.dots_initials, &mut options.add_dots_to_initials),
            (self.dots_journals, &mut options.add_dots_to_journal_abbrev),
            (self.process_authors, &mut options.process_authors),
        ];
        for (value, slot) in pairs {
            if let Some(value) = value {
                *slot = value;
            }
        }
        options
    }
}
