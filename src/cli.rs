use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "repackage")]
#[command(
    about = "Rewrite Java package declarations after a source tree reorganization",
    long_about = None
)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub run: RunArgs,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    /// -v: Show config source and run totals
    /// -vv: Show per-file decisions
    /// -vvv: Show skipped files
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rewrite package declarations (default when no subcommand is given)
    Run(RunArgs),

    /// Create a .repackage.toml holding the built-in mapping table
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Configuration file (defaults to .repackage.toml in the current directory or a parent)
    #[arg(short, long, env = "REPACKAGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the base path the mapping directories are resolved against
    #[arg(long = "base-path")]
    pub base_path: Option<PathBuf>,

    /// Report which files would change without writing them
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Use plain output (no colors, no emoji)
    #[arg(long)]
    pub plain: bool,
}

impl Cli {
    /// Run arguments for the selected command; top-level flags when none.
    ///
    /// Top-level flags and a subcommand are rejected together at parse time,
    /// so exactly one of the two sets is ever populated.
    pub fn run_args(&self) -> Option<&RunArgs> {
        match &self.command {
            None => Some(&self.run),
            Some(Commands::Run(args)) => Some(args),
            Some(Commands::Init { .. }) => None,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
