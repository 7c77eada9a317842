use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "gwscore",
    version,
    about = "Fantasy gameweek scoring with auto-substitution and chips"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Scoring config file used instead of ./gwscore.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one gameweek snapshot and print the report
    Score(ScoreCommand),
    /// Score one snapshot and upsert the totals into a results store
    Finalize(FinalizeCommand),
    /// Score every snapshot under a directory and upsert them together
    Batch(BatchCommand),
    /// Report data-quality problems in a snapshot
    Lint(LintCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    pub snapshot: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct FinalizeCommand {
    pub snapshot: PathBuf,
    #[arg(long)]
    pub store: PathBuf,
}

#[derive(Args)]
pub struct BatchCommand {
    pub dir: PathBuf,
    #[arg(long)]
    pub store: PathBuf,
}

#[derive(Args)]
pub struct LintCommand {
    pub snapshot: PathBuf,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
