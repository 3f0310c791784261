//! Projection output structures

use serde::{Deserialize, Serialize};

/// One (employee, age) row of projection output.
///
/// `future_salary` and `expected_death_outflow` hold the display-rounded
/// values (2 and 6 decimal places); the outflow is computed from the
/// un-rounded salary before rounding, so the two fields are not exactly
/// consistent with each other by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashflowRow {
    pub emp_id: String,
    pub emp_name: String,

    /// Attained age this row projects
    pub age: i32,

    /// Projected salary at this age, rounded to 2 decimal places
    pub future_salary: f64,

    /// Survival probability px for this age
    pub survival_prob: f64,

    /// Mortality probability qx for this age
    pub death_prob: f64,

    /// future_salary x px x qx, rounded to 6 decimal places
    pub expected_death_outflow: f64,
}
