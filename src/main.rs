//! Cashflow Calculator CLI
//!
//! Minimal embedding of the calculation engine: reads an input CSV, runs the
//! projection, writes the report next to the input, and prints the two row
//! counts.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use cashflow_calculator::process_cashflow;

/// Compute expected death outflow projections from an input CSV.
#[derive(Debug, Parser)]
#[command(name = "cashflow_calculator", version)]
struct Cli {
    /// Input CSV file (assumption overrides and employee rows)
    input: PathBuf,

    /// Report output path (defaults to <input stem>_output.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the run summary as JSON instead of plain text
    #[arg(long)]
    summary_json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let input = fs::read(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let result = process_cashflow(&input)
        .with_context(|| format!("processing {} failed", cli.input.display()))?;

    let output_path = cli
        .output
        .unwrap_or_else(|| default_output_path(&cli.input));
    fs::write(&output_path, result.output.as_bytes())
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    if cli.summary_json {
        let summary = serde_json::json!({
            "input_rows": result.input_rows,
            "output_rows": result.output_rows,
            "output_file": output_path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "Processed {} employees, generated {} result rows",
            result.input_rows, result.output_rows
        );
        println!("Report written to {}", output_path.display());
    }

    Ok(())
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{stem}_output.csv"))
}
