//! Core projection engine for annual expected death outflow rows
//!
//! For each employee: compute the current age from the valuation date, then
//! walk age-by-age to retirement, growing the salary by the increase rate
//! and weighting each year by that age's survival and mortality
//! probabilities. Employees are independent; no state crosses between them.

use super::cashflows::CashflowRow;
use crate::assumptions::{Assumptions, ProbabilityTable};
use crate::employee::Employee;

/// Projects one run's employees under a fixed assumption set and table.
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    assumptions: Assumptions,
    table: ProbabilityTable,
}

impl ProjectionEngine {
    pub fn new(assumptions: Assumptions, table: ProbabilityTable) -> Self {
        Self { assumptions, table }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Age at the valuation date.
    ///
    /// Excel formula: INT((valuation_date - birth_date + 1) / 365.25).
    /// Kept as the day-count approximation rather than calendar-aware age
    /// for numeric fidelity with the legacy model. The cast truncates toward
    /// zero like the legacy conversion, which only differs from floor for a
    /// birth date after the valuation date.
    pub fn current_age(&self, employee: &Employee) -> i32 {
        let days = (self.assumptions.valuation_date - employee.date_birth).num_days() + 1;
        (days as f64 / 365.25) as i32
    }

    /// Project one employee from current age up to (excluding) retirement.
    ///
    /// The first projected year is already salary x (1 + rate); the raw
    /// input salary is never emitted. An employee at or past retirement age
    /// contributes zero rows.
    pub fn project_employee(&self, employee: &Employee) -> Vec<CashflowRow> {
        let rate = self.assumptions.salary_increase_rate;
        let mut future_salary = employee.salary * (1.0 + rate);
        let mut rows = Vec::new();

        for age in self.current_age(employee)..self.assumptions.retirement_age {
            let (qx, px) = self.table.lookup(age);
            // Outflow uses the un-rounded salary; rounding is display-only
            let expected_death_outflow = future_salary * px * qx;

            rows.push(CashflowRow {
                emp_id: employee.emp_id.clone(),
                emp_name: employee.emp_name.clone(),
                age,
                future_salary: round_to(future_salary, 2),
                survival_prob: px,
                death_prob: qx,
                expected_death_outflow: round_to(expected_death_outflow, 6),
            });

            future_salary *= 1.0 + rate;
        }

        rows
    }

    /// Project every employee in input order, concatenating their rows.
    pub fn project_all(&self, employees: &[Employee]) -> Vec<CashflowRow> {
        employees
            .iter()
            .flat_map(|employee| self.project_employee(employee))
            .collect()
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
