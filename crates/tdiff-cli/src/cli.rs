use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tdiff",
    about = "Line-by-line text comparison",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// TOML file with engine limits and tie-break policy
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the line-level edit script between two files
    Diff(DiffArgs),
    /// Summarize how much two files have in common
    Stats(StatsArgs),
}

/// The two inputs. Either may be `-` for stdin.
#[derive(Args, Clone, Debug)]
pub struct InputArgs {
    pub old: PathBuf,
    pub new: PathBuf,
    /// Override the configured per-side line limit
    #[arg(long)]
    pub max_lines: Option<usize>,
}

#[derive(Args)]
pub struct DiffArgs {
    #[command(flatten)]
    pub inputs: InputArgs,
    /// Prefix rows with old/new line numbers
    #[arg(short = 'n', long)]
    pub line_numbers: bool,
}

#[derive(Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub inputs: InputArgs,
}
