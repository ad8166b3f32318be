use std::path::PathBuf;

use clap::{Parser, Subcommand};
use roosterapp::model::ResourceKind;

#[derive(Parser, Debug)]
#[command(name = "rooster", bin_name = "rooster", version)]
#[command(
    about = "Manage alarms, podcasts and internet radio stations",
    long_about = None,
    after_help = "KIND is one of: alarms, podcasts, radios"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Seed document to load before running the command
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub seed: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List resources of a kind, in insertion order
    #[command(alias = "ls", display_order = 1)]
    List {
        kind: ResourceKind,

        /// Skip this many resources (negative counts as zero)
        #[arg(long, allow_hyphen_values = true)]
        offset: Option<String>,

        /// Return at most this many resources
        #[arg(long, allow_hyphen_values = true)]
        length: Option<String>,
    },

    /// Show one resource
    #[command(alias = "show", display_order = 2)]
    Get { kind: ResourceKind, id: String },

    /// Create a resource from a JSON body
    #[command(alias = "new", display_order = 3)]
    Create {
        kind: ResourceKind,

        /// JSON body, or "-" to read it from stdin
        body: String,
    },

    /// Delete one resource
    #[command(alias = "rm", display_order = 4)]
    Delete { kind: ResourceKind, id: String },
}
