use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sourcedb_merger::ConflictPolicy;

/// sourcedb-merger - merge per-target build maps into one source database
#[derive(Parser, Debug)]
#[command(name = "sourcedb-merger")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load every target's build map and write the merged result
    Merge {
        /// Target list JSON file, relative to --root
        input: PathBuf,

        /// Directory manifest paths are relative to
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Where to write the merged build map
        #[arg(short, long)]
        output: PathBuf,

        /// File extensions to keep (overrides config)
        #[arg(short, long, value_delimiter = ',')]
        extensions: Option<Vec<String>>,

        /// How to handle two targets mapping the same source path
        #[arg(long, value_enum)]
        conflicts: Option<ConflictPolicy>,

        /// Write compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Load every target's build map and list what was found
    Inspect {
        /// Target list JSON file, relative to --root
        input: PathBuf,

        /// Directory manifest paths are relative to
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// File extensions to keep (overrides config)
        #[arg(short, long, value_delimiter = ',')]
        extensions: Option<Vec<String>>,

        /// Also print every source → origin mapping
        #[arg(long)]
        entries: bool,
    },
}
