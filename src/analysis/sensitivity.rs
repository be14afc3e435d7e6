//! Interest-rate sensitivity table
//!
//! A static single-shot evaluation of the first-period payment under several
//! rate perturbations. It answers "what would the payment be if this were the
//! rate for the whole term", not "what happens if the rate changes mid-loan",
//! so it deliberately bypasses the simulator's phase logic.

use serde::{Deserialize, Serialize};

use crate::loan::Fees;
use crate::schedule::annuity_payment;

/// Rate offsets, in percentage points around the base rate
pub const RATE_OFFSETS: [f64; 5] = [-1.0, -0.5, 0.0, 0.5, 1.0];

/// One row of the sensitivity table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityPoint {
    /// Perturbed annual rate in percent
    pub rate: f64,

    /// First-period annuity payment at that rate over the full term
    pub monthly_payment: f64,
}

/// First-period payment for each rate offset, against the fee-adjusted
/// effective principal over the full nominal term.
pub fn interest_sensitivity(
    principal: f64,
    loan_term_years: u32,
    base_rate: f64,
    fees: &Fees,
) -> Vec<SensitivityPoint> {
    let total_months = loan_term_years * 12;
    let effective_principal = principal + fees.origination_amount(principal) + fees.fixed_processing_fee;

    RATE_OFFSETS
        .iter()
        .map(|offset| {
            let rate = base_rate + offset;
            SensitivityPoint {
                rate,
                monthly_payment: annuity_payment(effective_principal, rate, total_months),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_offsets_are_ordered_and_complete() {
        let table = interest_sensitivity(100_000.0, 10, 8.0, &Fees::default());

        let rates: Vec<f64> = table.iter().map(|point| point.rate).collect();
        assert_eq!(rates, vec![7.0, 7.5, 8.0, 8.5, 9.0]);

        // Payments increase with the rate
        for pair in table.windows(2) {
            assert!(pair[1].monthly_payment > pair[0].monthly_payment);
        }
    }

    #[test]
    fn test_base_entry_matches_plain_annuity() {
        let table = interest_sensitivity(100_000.0, 10, 8.0, &Fees::default());
        let base = &table[2];

        assert_eq!(base.rate, 8.0);
        assert_relative_eq!(base.monthly_payment, annuity_payment(100_000.0, 8.0, 120), epsilon = 1e-9);
    }

    #[test]
    fn test_fees_raise_every_payment() {
        let without = interest_sensitivity(100_000.0, 10, 8.0, &Fees::default());
        let fees = Fees { origination_fee_pct: 2.0, fixed_processing_fee: 1_500.0, ..Fees::default() };
        let with = interest_sensitivity(100_000.0, 10, 8.0, &fees);

        for (a, b) in without.iter().zip(&with) {
            assert!(b.monthly_payment > a.monthly_payment);
        }
    }

    #[test]
    fn test_negative_offset_can_reach_zero_rate() {
        // Base rate 1.0 with -1.0 offset degenerates to straight-line
        let table = interest_sensitivity(120_000.0, 1, 1.0, &Fees::default());
        assert_eq!(table[0].rate, 0.0);
        assert_relative_eq!(table[0].monthly_payment, 10_000.0, epsilon = 1e-9);
    }
}
