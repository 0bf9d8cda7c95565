use std::path::Path;

use bibflow_core::{render_bibliography, reformat_with, split_entries, BibflowConfig, CitationStyle};

use crate::cli::PassOverrides;
use crate::shared::{read_input, CmdResult};

pub fn run_format(file: &Path, passes: &PassOverrides, config: &BibflowConfig) -> CmdResult {
    let text = read_input(file)?;
    let options = passes.apply(&config.format);
    let abbreviator = config.abbreviator();
    println!("{}", reformat_with(&split_entries(&text), &options, &abbreviator));
    Ok(())
}

pub fn run_cite(file: &Path, style: CitationStyle) -> CmdResult {
    let text = read_input(file)?;
    for line in render_bibliography(&split_entries(&text), style) {
        println!("{line}");
    }
    Ok(())
}
