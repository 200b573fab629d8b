//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Searchable document trees: filter, expand and print credential outlines
#[derive(Parser, Debug)]
#[command(name = "doctree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// JSON documents file, loaded after the sample
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Directory holding a local .doctree.toml (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print visible rows of the filtered documents
    Tree {
        /// Search query (case-insensitive)
        #[arg(short, long)]
        query: Option<String>,
        /// Expand node by id (repeatable)
        #[arg(short, long = "expand", value_name = "ID")]
        expand: Vec<String>,
        /// Expand every node with an id
        #[arg(short, long)]
        all: bool,
        /// Only this document
        #[arg(long, value_name = "ID")]
        document: Option<String>,
    },

    /// Show the full structure of each document
    Outline {
        /// Only this document
        #[arg(long, value_name = "ID")]
        document: Option<String>,
    },

    /// Print the built-in sample document as JSON
    Sample,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,

    /// Create global config template
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
