//! Input interpreter for the semi-structured calculation input
//!
//! The input is comma-delimited text with no fixed layout: assumption
//! override rows (key,value), an optional header row, and employee rows may
//! be interleaved arbitrarily. Classification is per-row; the only state
//! carried across rows is the accumulating assumption set, threaded through
//! the scan as an explicit fold.
//!
//! Error policy replicates the legacy model: a malformed employee row is
//! dropped (with a recorded reason) and the scan continues; a malformed
//! assumption value aborts the whole run.

use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;

use super::Employee;
use crate::assumptions::{AssumptionField, AssumptionParseError, Assumptions};
use crate::dates::parse_date;

/// Input-level failure that aborts the run.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input rows: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Assumption(#[from] AssumptionParseError),
}

/// Why an employee-shaped row was discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// Row had content but too few cells to be an employee record
    TooFewFields,
    InvalidBirthDate,
    InvalidJoiningDate,
    InvalidSalary,
}

/// Result of scanning one input file.
#[derive(Debug, Clone)]
pub struct ParsedInput {
    /// Defaults plus whatever override rows appeared
    pub assumptions: Assumptions,

    /// Employees in first-successful-parse order
    pub employees: Vec<Employee>,

    /// Discarded rows as (zero-based record index, reason); collapsed to a
    /// count at the run boundary but kept here so callers and tests can see
    /// why rows went missing
    pub dropped: Vec<(usize, DropReason)>,
}

/// Per-row classification. `Assumption` defers value parsing to the fold so
/// a bad value surfaces as the run-aborting [`AssumptionParseError`].
enum RowClass<'r> {
    Skipped,
    Assumption(AssumptionField, &'r str),
    Header,
    Employee(Employee),
    Dropped(DropReason),
}

/// Scan raw input text into an assumption set plus employee list.
pub fn parse_input(text: &str) -> Result<ParsedInput, InputError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut assumptions = Assumptions::default();
    let mut employees = Vec::new();
    let mut dropped = Vec::new();

    for (index, record) in reader.records().enumerate() {
        let record = record?;
        match classify_row(&record) {
            RowClass::Skipped | RowClass::Header => {}
            RowClass::Assumption(field, raw) => {
                assumptions = assumptions.with_override(field, raw)?;
            }
            RowClass::Employee(employee) => employees.push(employee),
            RowClass::Dropped(reason) => {
                log::debug!("dropping input row {}: {:?}", index + 1, reason);
                dropped.push((index, reason));
            }
        }
    }

    Ok(ParsedInput {
        assumptions,
        employees,
        dropped,
    })
}

fn classify_row(record: &StringRecord) -> RowClass<'_> {
    let non_blank = record.iter().filter(|cell| !cell.trim().is_empty()).count();
    if non_blank == 0 {
        return RowClass::Skipped;
    }

    // Assumption overrides win over every other interpretation, even when
    // the value cell is blank (a blank value is a parse error, not a skip)
    if record.len() >= 2 {
        if let Some(field) = AssumptionField::from_key(&record[0]) {
            return RowClass::Assumption(field, record.get(1).unwrap_or(""));
        }
    }

    if record.len() >= 5 {
        let first = record[0].trim().to_ascii_lowercase();
        if matches!(first.as_str(), "emp_id" | "employee_id" | "id") {
            return RowClass::Header;
        }
        return match parse_employee(record) {
            Ok(employee) => RowClass::Employee(employee),
            Err(reason) => RowClass::Dropped(reason),
        };
    }

    if non_blank < 2 {
        RowClass::Skipped
    } else {
        RowClass::Dropped(DropReason::TooFewFields)
    }
}

fn parse_employee(record: &StringRecord) -> Result<Employee, DropReason> {
    let cell = |i: usize| record.get(i).unwrap_or("").trim();

    let date_birth = parse_date(cell(2)).map_err(|_| DropReason::InvalidBirthDate)?;
    let date_joining = parse_date(cell(3)).map_err(|_| DropReason::InvalidJoiningDate)?;

    // Salaries exported from spreadsheets often carry thousands separators
    let salary: f64 = cell(4)
        .replace(',', "")
        .parse()
        .map_err(|_| DropReason::InvalidSalary)?;

    Ok(Employee {
        emp_id: cell(0).to_string(),
        emp_name: cell(1).to_string(),
        date_birth,
        date_joining,
        salary,
    })
}
