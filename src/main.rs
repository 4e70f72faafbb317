//! sourcedb-merger CLI
//!
//! Usage: sourcedb-merger <COMMAND>
//!
//! Commands:
//!   merge    Load every target's build map and write the merged result
//!   inspect  Load every target's build map and list what was found

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    sourcedb_merger::logging::init(cli.verbose);

    match cli.command {
        Commands::Merge {
            input,
            root,
            output,
            extensions,
            conflicts,
            compact,
        } => commands::merge::cmd_merge(
            commands::merge::MergeArgs {
                input,
                root,
                output,
                extensions,
                conflicts,
                compact,
            },
            cli.json,
        ),
        Commands::Inspect {
            input,
            root,
            extensions,
            entries,
        } => commands::inspect::cmd_inspect(&input, &root, extensions, entries, cli.json),
    }
}
