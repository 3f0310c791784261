//! Cashflow Calculator - Expected death outflow projection engine
//!
//! Replicates a legacy spreadsheet actuarial model:
//! - Semi-structured CSV input (assumption overrides + employee records)
//! - Year-by-year salary projection weighted by mortality/survival
//!   probabilities from a banded lookup table
//! - Tabular report output with assumptions and per-age result rows
//!
//! The whole pipeline is one pure transform from input bytes to report text
//! plus two row counts ([`process_cashflow`]), so it embeds unchanged behind
//! any collaborator that handles upload, persistence, and download.

pub mod assumptions;
pub mod dates;
pub mod employee;
pub mod projection;
pub mod report;
pub mod run;

// Re-export commonly used types
pub use assumptions::{AssumptionParseError, Assumptions, ProbabilityTable};
pub use dates::{parse_date, DateParseError};
pub use employee::{parse_input, DropReason, Employee, InputError, ParsedInput};
pub use projection::{CashflowRow, ProjectionEngine};
pub use run::{process_cashflow, process_cashflow_at, RunError, RunResult};
