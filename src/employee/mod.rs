//! Employee records parsed from the input file

pub mod loader;

pub use loader::{parse_input, DropReason, InputError, ParsedInput};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One employee, parsed from one input row. Immutable after parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub emp_id: String,
    pub emp_name: String,
    pub date_birth: NaiveDate,

    /// Parsed and retained but not referenced by the current projection
    /// formula (the Excel model carries the column the same way)
    pub date_joining: NaiveDate,

    /// Annual salary at the valuation date
    pub salary: f64,
}
