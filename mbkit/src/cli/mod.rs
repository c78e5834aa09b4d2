//! mbkit CLI - Command-line interface for `.mbch` / `.mbtc` maintenance tools

pub mod commands;
pub mod progress;

use clap::Parser;
use commands::Commands;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "mbkit")]
#[command(version, about = "mbkit: batch maintenance tools for .mbch and .mbtc files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Run the mbkit CLI
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.command.target().quiet {
        LevelFilter::WARN
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    cli.command.execute()?;

    Ok(())
}
