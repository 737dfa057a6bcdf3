use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

/// Prints a greeting from example-cli.
#[derive(Parser, Debug)]
#[command(name = "example-cli")]
#[command(version, about)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries only the command output.
    example_common::init_logging("example-cli", "warn", false);
    debug!(verbose = cli.verbose, "starting example-cli");

    let stdout = std::io::stdout();
    example_cli::run(cli.verbose, &mut stdout.lock()).context("Failed to write to stdout")?;
    Ok(())
}
