mod cli;
mod entries_cmd;
mod files_cmd;
mod format_cmd;
mod shared;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = shared::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Split { ref file, format } => entries_cmd::run_split(file, format),
        Commands::Field {
            ref file,
            ref name,
            ref key,
        } => entries_cmd::run_field(file, name, key.as_deref()),
        Commands::Dedup { ref files, report } => entries_cmd::run_dedup(files, report),
        Commands::Format {
            ref file,
            ref passes,
        } => format_cmd::run_format(file, passes, &config),
        Commands::Cite { ref file, style } => format_cmd::run_cite(file, style),
        Commands::SuggestName {
            ref author,
            ref year,
            ref title,
            ref journal,
            ref extension,
        } => files_cmd::run_suggest_name(
            &files_cmd::NameParts {
                author,
                year,
                title,
                journal: journal.as_deref(),
                extension: extension.as_deref(),
            },
            &config,
        ),
        Commands::Rename {
            ref document,
            ref bib,
            ref key,
            dry_run,
        } => files_cmd::run_rename(document, bib, key.as_deref(), dry_run),
        Commands::Pages {
            ref selection,
            max,
            format,
        } => files_cmd::run_pages(selection, max, format),
    }
}
