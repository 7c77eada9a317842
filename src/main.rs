mod cli;

use clap::Parser;
use gwscore::batch::{self, snapshot::GameweekSnapshot, store::UpsertSummary};
use gwscore::error::ScoreError;
use gwscore::{config, lint, report};
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_upsert(summary: &UpsertSummary) {
    println!(
        "gameweek {}: {} inserted, {} updated, {} unchanged{}",
        summary.gameweek,
        summary.inserted,
        summary.updated,
        summary.unchanged,
        if summary.digest_unchanged {
            " (no changes)"
        } else {
            ""
        }
    );
}

fn run(cli: cli::Cli) -> Result<i32, ScoreError> {
    let loaded = config::load_config(Path::new("."), cli.config.as_deref())?;
    let rules = loaded.rules();

    match cli.command {
        cli::Commands::Score(cmd) => {
            let snapshot = GameweekSnapshot::load(&cmd.snapshot)?;
            let run = batch::score_gameweek(&snapshot, &rules);
            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&run, output_format)?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Finalize(cmd) => {
            let (_, summaries) = batch::finalize(&[cmd.snapshot], &cmd.store, &rules)?;
            for summary in &summaries {
                print_upsert(summary);
            }
            println!("store: {}", cmd.store.display());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Batch(cmd) => {
            if !cmd.dir.is_dir() {
                return Err(ScoreError::SnapshotNotFound(cmd.dir.display().to_string()));
            }
            let snapshots = batch::discover_snapshots(&cmd.dir, Some(&cmd.store))?;
            if snapshots.is_empty() {
                eprintln!("warning: no snapshots found in {}", cmd.dir.display());
                return Ok(exit_code::WARNINGS);
            }
            let (_, summaries) = batch::finalize(&snapshots, &cmd.store, &rules)?;
            for summary in &summaries {
                print_upsert(summary);
            }
            println!("store: {}", cmd.store.display());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Lint(cmd) => {
            let snapshot = GameweekSnapshot::load(&cmd.snapshot)?;
            let findings = lint::lint_snapshot(&snapshot);

            if findings.is_empty() {
                println!("lint: no findings");
                return Ok(exit_code::SUCCESS);
            }

            for finding in &findings {
                let level = if finding.blocking { "BLOCKING" } else { "WARN" };
                println!("[{}] {}: {}", level, finding.id, finding.title);
                println!("  {}", finding.body);
            }

            if findings.iter().any(|finding| finding.blocking) {
                Ok(exit_code::BLOCKING)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
