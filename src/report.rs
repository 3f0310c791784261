//! Result formatter: serializes assumptions and projection rows to the
//! tabular report consumed by downstream tooling
//!
//! Layout matches the legacy output: title line, generation timestamp, blank
//! separator, Assumptions section, blank separator, Calculation Results
//! section with a fixed header and one row per projection row in engine
//! order. The timestamp is a parameter so callers needing byte-exact output
//! can inject a fixed one.

use chrono::NaiveDateTime;
use csv::WriterBuilder;

use crate::assumptions::Assumptions;
use crate::projection::CashflowRow;

/// Column header of the Calculation Results section.
pub const RESULT_COLUMNS: [&str; 7] = [
    "emp_id",
    "emp_name",
    "age",
    "future_salary",
    "survival_prob",
    "death_prob",
    "expected_death_outflow",
];

/// Render the full report text.
///
/// Rate assumptions are written via `f64` Display so they re-parse to the
/// same value; monetary and probability columns use fixed precision
/// (2 and 6 decimal places).
pub fn render_report(
    assumptions: &Assumptions,
    rows: &[CashflowRow],
    generated_at: NaiveDateTime,
) -> Result<String, csv::Error> {
    let mut buffer = Vec::new();

    // Each section gets its own writer so the blank separators between
    // sections can go straight into the buffer; a csv writer would quote a
    // lone empty field as "" instead of leaving the line blank
    {
        let mut writer = WriterBuilder::new().flexible(true).from_writer(&mut buffer);
        writer.write_record(["Cashflow Calculation Results"])?;
        writer.write_record([
            "Generated",
            &generated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ])?;
        writer.flush()?;
    }
    buffer.push(b'\n');

    {
        let mut writer = WriterBuilder::new().flexible(true).from_writer(&mut buffer);
        writer.write_record(["Assumptions"])?;
        writer.write_record([
            "valuation_date",
            &assumptions.valuation_date.format("%Y-%m-%d").to_string(),
        ])?;
        writer.write_record(["discount_rate", &assumptions.discount_rate.to_string()])?;
        writer.write_record([
            "salary_increase_rate",
            &assumptions.salary_increase_rate.to_string(),
        ])?;
        writer.write_record(["retirement_age", &assumptions.retirement_age.to_string()])?;
        writer.flush()?;
    }
    buffer.push(b'\n');

    {
        let mut writer = WriterBuilder::new().flexible(true).from_writer(&mut buffer);
        writer.write_record(["Calculation Results"])?;
        writer.write_record(RESULT_COLUMNS)?;

        for row in rows {
            writer.write_record([
                row.emp_id.as_str(),
                row.emp_name.as_str(),
                &row.age.to_string(),
                &format!("{:.2}", row.future_salary),
                &format!("{:.6}", row.survival_prob),
                &format!("{:.6}", row.death_prob),
                &format!("{:.6}", row.expected_death_outflow),
            ])?;
        }

        writer.flush()?;
    }

    // The writer only ever receives UTF-8 strings
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn generated_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn sample_row() -> CashflowRow {
        CashflowRow {
            emp_id: "E1".to_string(),
            emp_name: "Alice".to_string(),
            age: 55,
            future_salary: 52500.0,
            survival_prob: 0.989714,
            death_prob: 0.010286,
            expected_death_outflow: 534.460406,
        }
    }

    #[test]
    fn test_report_layout() {
        let report =
            render_report(&Assumptions::default(), &[sample_row()], generated_at()).unwrap();
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "Cashflow Calculation Results");
        assert_eq!(lines[1], "Generated,2025-01-15 09:30:00");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Assumptions");
        assert_eq!(lines[4], "valuation_date,2024-12-31");
        assert_eq!(lines[5], "discount_rate,0.0545");
        assert_eq!(lines[6], "salary_increase_rate,0.05");
        assert_eq!(lines[7], "retirement_age,60");
        assert_eq!(lines[8], "");
        assert_eq!(lines[9], "Calculation Results");
        assert_eq!(
            lines[10],
            "emp_id,emp_name,age,future_salary,survival_prob,death_prob,expected_death_outflow"
        );
        assert_eq!(
            lines[11],
            "E1,Alice,55,52500.00,0.989714,0.010286,534.460406"
        );
        assert_eq!(lines.len(), 12);
    }

    #[test]
    fn test_separators_are_truly_blank_lines() {
        let report =
            render_report(&Assumptions::default(), &[sample_row()], generated_at()).unwrap();

        // The separators must be empty lines, not a quoted empty field
        assert!(!report.contains("\"\""));
        assert_eq!(report.matches("\n\n").count(), 2);
    }

    #[test]
    fn test_names_with_commas_are_quoted() {
        let mut row = sample_row();
        row.emp_name = "Smith, Alice".to_string();
        let report = render_report(&Assumptions::default(), &[row], generated_at()).unwrap();
        assert!(report.contains("E1,\"Smith, Alice\",54,"));
    }

    #[test]
    fn test_empty_result_section() {
        let report = render_report(&Assumptions::default(), &[], generated_at()).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.last(), Some(&RESULT_COLUMNS.join(",").as_str()));
    }
}
