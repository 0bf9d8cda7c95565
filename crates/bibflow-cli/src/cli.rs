use std::path::PathBuf;

use bibflow_core::CitationStyle;
use clap::{Parser, Subcommand, ValueEnum};

/// Split, deduplicate, reformat and cite BibTeX bibliographies.
#[derive(Debug, Parser)]
#[command(name = "bibflow", about, version)]
pub struct Cli {
    /// Config file (default: <config dir>/bibflow/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the records in a bibliography
    Split {
        /// BibTeX file, or '-' for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print one field of every record that has it
    Field {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Field name (case-insensitive)
        #[arg(value_name = "NAME")]
        name: String,

        /// Only the record with this citation key
        #[arg(long)]
        key: Option<String>,
    },

    /// Merge files and drop duplicate records
    Dedup {
        /// BibTeX files; earlier files win
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Print which records were dropped instead of the bibliography
        #[arg(long)]
        report: bool,
    },

    /// Rewrite records with the configured formatting passes
    Format {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        passes: PassOverrides,
    },

    /// Render a bibliography in a citation style
    Cite {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// apa, mla, chicago, harvard or ieee
        #[arg(long, default_value = "apa")]
        style: CitationStyle,
    },

    /// Suggest a file name from metadata
    SuggestName {
        #[arg(long, default_value = "")]
        author: String,

        #[arg(long, default_value = "")]
        year: String,

        #[arg(long, default_value = "")]
        title: String,

        #[arg(long)]
        journal: Option<String>,

        /// Extension (default from config)
        #[arg(long)]
        extension: Option<String>,
    },

    /// Rename a document after the record describing it
    Rename {
        /// Document to rename
        #[arg(value_name = "DOCUMENT")]
        document: PathBuf,

        /// BibTeX file holding the record
        #[arg(long, value_name = "FILE")]
        bib: PathBuf,

        /// Citation key of the record (default: first record)
        #[arg(long)]
        key: Option<String>,

        /// Print the planned rename without touching the file
        #[arg(long)]
        dry_run: bool,
    },

    /// Expand a page selection such as '1-3,5'
    Pages {
        #[arg(value_name = "SELECTION")]
        selection: String,

        /// Number of pages in the document
        #[arg(long)]
        max: usize,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Per-invocation overrides of the configured formatting passes
#[derive(Debug, Default, clap::Args)]
pub struct PassOverrides {
    #[arg(long, value_name = "BOOL")]
    pub shorten_authors: Option<bool>,

    #[arg(long, value_name = "BOOL")]
    pub abbreviate_journals: Option<bool>,

    #[arg(long, value_name = "BOOL")]
    pub escape: Option<bool>,

    #[arg(long, value_name = "BOOL")]
    pub dots_initials: Option<bool>,

    #[arg(long, value_name = "BOOL")]
    pub dots_journals: Option<bool>,

    #[arg(long, value_name = "BOOL")]
    pub process_authors: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
