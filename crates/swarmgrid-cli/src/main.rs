//! Swarmgrid - file-based front end.
//!
//! Reads a board description from an input file, runs the single-turn
//! simulation, and writes one result line per creature (in declaration
//! order) to the output file. A validation failure in the input is itself a
//! reported outcome: its message becomes the entire output file and the
//! process still exits successfully. Only environment problems (unreadable
//! or unwritable files) exit non-zero.

mod input;

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

/// Single-turn grid simulation of colored creatures and food markers.
#[derive(Debug, Parser)]
#[command(name = "swarmgrid", version)]
struct Args {
    /// Path to the board description.
    #[arg(long, default_value = "input.txt")]
    input: PathBuf,

    /// Path the result lines are written to.
    #[arg(long, default_value = "output.txt")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("swarmgrid=info")),
        )
        .init();

    let args = Args::parse();

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;

    let report = match input::load(&text) {
        Ok(mut driver) => {
            let records = driver.run();
            tracing::info!(creatures = records.len(), "run complete");
            let mut lines = String::new();
            for record in records {
                lines.push_str(&record.to_string());
                lines.push('\n');
            }
            lines
        }
        Err(error) => {
            tracing::info!(%error, "input rejected");
            format!("{error}\n")
        }
    };

    fs::write(&args.output, report)
        .with_context(|| format!("writing {}", args.output.display()))?;
    Ok(())
}
