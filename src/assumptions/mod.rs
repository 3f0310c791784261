//! Valuation assumptions and the mortality/survival probability table

mod probability;

pub use probability::ProbabilityTable;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dates::parse_date;

/// An assumption row's value cell failed date/number/integer conversion.
///
/// Unlike a malformed employee row (silently dropped), this aborts the whole
/// run; the asymmetry replicates the legacy model's behavior.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value {value:?} for assumption {key}")]
pub struct AssumptionParseError {
    pub key: &'static str,
    pub value: String,
}

/// The four assumptions an input file may override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssumptionField {
    ValuationDate,
    DiscountRate,
    SalaryIncreaseRate,
    RetirementAge,
}

impl AssumptionField {
    /// Match a row's first cell against the known assumption keys
    /// (trimmed, case-insensitive).
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "valuation_date" => Some(Self::ValuationDate),
            "discount_rate" => Some(Self::DiscountRate),
            "salary_increase_rate" => Some(Self::SalaryIncreaseRate),
            "retirement_age" => Some(Self::RetirementAge),
            _ => None,
        }
    }

    /// Canonical key as it appears in input files and the report.
    pub fn key(&self) -> &'static str {
        match self {
            Self::ValuationDate => "valuation_date",
            Self::DiscountRate => "discount_rate",
            Self::SalaryIncreaseRate => "salary_increase_rate",
            Self::RetirementAge => "retirement_age",
        }
    }
}

/// Valuation assumptions for one calculation run.
///
/// Starts from the model defaults; any subset may be overridden by rows in
/// the input file. Immutable once parsing completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assumptions {
    /// Reference date from which ages and projections are measured
    pub valuation_date: NaiveDate,

    /// Annual discount rate (carried into the report; not yet used in the
    /// outflow formula, matching the Excel model)
    pub discount_rate: f64,

    /// Annual salary increase rate
    pub salary_increase_rate: f64,

    /// Exclusive upper bound age at which projection stops
    pub retirement_age: i32,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            // 2024-12-31 is always a valid calendar date
            valuation_date: NaiveDate::from_ymd_opt(2024, 12, 31)
                .expect("default valuation date is valid"),
            discount_rate: 0.0545,
            salary_increase_rate: 0.05,
            retirement_age: 60,
        }
    }
}

impl Assumptions {
    /// Apply one override row, consuming and returning the assumption set.
    ///
    /// The input scan folds rows through this method so assumption state
    /// threads as a value instead of a shared mutable object.
    pub fn with_override(
        self,
        field: AssumptionField,
        raw: &str,
    ) -> Result<Self, AssumptionParseError> {
        let value = raw.trim();
        let invalid = || AssumptionParseError {
            key: field.key(),
            value: value.to_string(),
        };

        match field {
            AssumptionField::ValuationDate => {
                let valuation_date = parse_date(value).map_err(|_| invalid())?;
                Ok(Self { valuation_date, ..self })
            }
            AssumptionField::DiscountRate => {
                let discount_rate = value.parse().map_err(|_| invalid())?;
                Ok(Self { discount_rate, ..self })
            }
            AssumptionField::SalaryIncreaseRate => {
                let salary_increase_rate = value.parse().map_err(|_| invalid())?;
                Ok(Self { salary_increase_rate, ..self })
            }
            AssumptionField::RetirementAge => {
                let retirement_age = value.parse().map_err(|_| invalid())?;
                Ok(Self { retirement_age, ..self })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let assumptions = Assumptions::default();
        assert_eq!(
            assumptions.valuation_date,
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
        );
        assert_eq!(assumptions.discount_rate, 0.0545);
        assert_eq!(assumptions.salary_increase_rate, 0.05);
        assert_eq!(assumptions.retirement_age, 60);
    }

    #[test]
    fn test_field_keys_are_case_insensitive() {
        assert_eq!(
            AssumptionField::from_key("VALUATION_DATE"),
            Some(AssumptionField::ValuationDate)
        );
        assert_eq!(
            AssumptionField::from_key("  Discount_Rate "),
            Some(AssumptionField::DiscountRate)
        );
        assert_eq!(AssumptionField::from_key("emp_id"), None);
    }

    #[test]
    fn test_override_each_field() {
        let assumptions = Assumptions::default()
            .with_override(AssumptionField::ValuationDate, "2025-06-30")
            .unwrap()
            .with_override(AssumptionField::DiscountRate, "0.04")
            .unwrap()
            .with_override(AssumptionField::SalaryIncreaseRate, "0.03")
            .unwrap()
            .with_override(AssumptionField::RetirementAge, "65")
            .unwrap();

        assert_eq!(
            assumptions.valuation_date,
            NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
        );
        assert_eq!(assumptions.discount_rate, 0.04);
        assert_eq!(assumptions.salary_increase_rate, 0.03);
        assert_eq!(assumptions.retirement_age, 65);
    }

    #[test]
    fn test_override_accepts_any_supported_date_format() {
        let assumptions = Assumptions::default()
            .with_override(AssumptionField::ValuationDate, "31/12/2025")
            .unwrap();
        assert_eq!(
            assumptions.valuation_date,
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_bad_value_reports_field_key() {
        let err = Assumptions::default()
            .with_override(AssumptionField::DiscountRate, "not-a-number")
            .unwrap_err();
        assert_eq!(err.key, "discount_rate");
        assert_eq!(err.value, "not-a-number");

        let err = Assumptions::default()
            .with_override(AssumptionField::RetirementAge, "60.5")
            .unwrap_err();
        assert_eq!(err.key, "retirement_age");
    }
}
