//! End-to-end transform: input bytes in, report text plus row counts out
//!
//! This is the only surface the embedding collaborator (web handler, CLI,
//! batch job) needs: a pure function from an uploaded byte blob to a
//! [`RunResult`]. Any failure aborts the whole run; there is no partial
//! success.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::assumptions::ProbabilityTable;
use crate::employee::{parse_input, InputError};
use crate::projection::ProjectionEngine;
use crate::report::render_report;

/// A run-aborting failure, surfaced verbatim to the collaborator.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("input is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("failed to write report: {0}")]
    Report(#[from] csv::Error),
}

/// Output of one calculation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    /// Rendered report text
    pub output: String,

    /// Employees successfully parsed from the input
    pub input_rows: usize,

    /// Projection rows emitted into the report
    pub output_rows: usize,
}

/// Run the full calculation with the current local time as the report
/// timestamp.
pub fn process_cashflow(input: &[u8]) -> Result<RunResult, RunError> {
    process_cashflow_at(input, Local::now().naive_local())
}

/// Run the full calculation with an injected report timestamp.
///
/// The timestamp line is the only nondeterminism in the output, so callers
/// that need byte-exact reproducibility use this variant.
pub fn process_cashflow_at(
    input: &[u8],
    generated_at: NaiveDateTime,
) -> Result<RunResult, RunError> {
    let text = std::str::from_utf8(input)?;
    let parsed = parse_input(text)?;

    let engine = ProjectionEngine::new(parsed.assumptions, ProbabilityTable::default_table());
    let rows = engine.project_all(&parsed.employees);

    log::info!(
        "processed {} employees into {} projection rows ({} input rows dropped)",
        parsed.employees.len(),
        rows.len(),
        parsed.dropped.len()
    );

    let output = render_report(engine.assumptions(), &rows, generated_at)?;

    Ok(RunResult {
        output,
        input_rows: parsed.employees.len(),
        output_rows: rows.len(),
    })
}
