use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use tracing::{error, info};

use dirclean::cleaner::{Cleaner, CleanupReport, CONFIG_ENV};
use dirclean::logging::init_logging;

/// Delete files matching glob patterns under configured directories.
///
/// Rules are read from the JSON file named by CLEANER_CONFIG.
#[derive(Debug, Parser)]
#[command(name = "dirclean", version, about)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Exit with status 2 when any rule failed
    #[arg(long)]
    strict: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let report = match run().await {
        Ok(report) => report,
        Err(err) => {
            error!("{:#}", err);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", "Cleanup complete!".green().bold());
    println!("{}", report);

    if cli.strict && !report.is_clean() {
        return ExitCode::from(2);
    }
    ExitCode::SUCCESS
}

async fn run() -> Result<CleanupReport> {
    let cleaner = Cleaner::from_env()
        .with_context(|| format!("failed to load config from ${}", CONFIG_ENV))?;

    let report = cleaner.run().await;
    info!(
        rules = report.dispatched(),
        removed = report.removed(),
        failed = report.failed(),
        "all cleanup tasks finished"
    );
    Ok(report)
}
