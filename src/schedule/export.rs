//! CSV export of a computed schedule

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::LoanError;

use super::items::LoanResult;

/// Write the full schedule as CSV to any writer, one row per month
pub fn write_schedule<W: Write>(writer: W, result: &LoanResult) -> Result<(), LoanError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for item in &result.schedule {
        csv_writer.serialize(item)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the full schedule as CSV to a file path
pub fn write_schedule_csv<P: AsRef<Path>>(path: P, result: &LoanResult) -> Result<(), LoanError> {
    let file = File::create(path)?;
    write_schedule(file, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loan::{Fees, LoanInput, PenaltyConfig};
    use crate::schedule::simulate;
    use chrono::NaiveDate;

    #[test]
    fn test_csv_has_header_and_one_row_per_month() {
        let input = LoanInput {
            principal: 120_000.0,
            loan_term_years: 1,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            base_interest_rate: 6.0,
            interest_phases: Vec::new(),
            extra_payment_phases: Vec::new(),
            one_time_payments: Vec::new(),
            fees: Fees::default(),
            penalty: PenaltyConfig::default(),
        };
        let result = simulate(&input).unwrap();

        let mut buffer = Vec::new();
        write_schedule(&mut buffer, &result).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1 + result.schedule.len());
        assert!(lines[0].starts_with("month_index,month_label,rate,payment"));
        assert!(lines[1].starts_with("0,2026-01,"));
    }
}
