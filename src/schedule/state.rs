//! Simulation state threaded through the amortization loop

use crate::loan::LoanInput;

/// State of a loan at a point in time during simulation
#[derive(Debug, Clone)]
pub struct LoanState {
    /// Current month (0-indexed)
    pub month_index: u32,

    /// Outstanding balance before this month's payment
    pub balance: f64,

    /// The fixed periodic payment currently committed.
    /// Held constant within a rate phase even as extra payments shrink the
    /// balance; recomputed only at rate changes ("reduce term, not payment").
    pub committed_payment: f64,

    /// Rate in effect when `committed_payment` was last computed
    pub last_rate: Option<f64>,

    /// Running interest total
    pub total_interest: f64,

    /// Running payment total (interest + principal + penalties)
    pub total_payment: f64,
}

impl LoanState {
    /// Initialize state at month 0 with the fee-adjusted opening balance
    pub fn from_input(input: &LoanInput) -> Self {
        Self {
            month_index: 0,
            balance: input.effective_principal(),
            committed_payment: 0.0,
            last_rate: None,
            total_interest: 0.0,
            total_payment: 0.0,
        }
    }

    /// Months left of the original amortization horizon (0 once exceeded)
    pub fn months_remaining(&self, total_months: u32) -> u32 {
        total_months.saturating_sub(self.month_index)
    }

    /// Whether the committed payment must be recomputed for `rate`
    pub fn needs_repricing(&self, rate: f64, tolerance: f64) -> bool {
        match self.last_rate {
            None => true,
            Some(last) => (rate - last).abs() > tolerance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loan::Fees;
    use chrono::NaiveDate;

    fn input() -> LoanInput {
        LoanInput {
            principal: 100_000.0,
            loan_term_years: 2,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            base_interest_rate: 6.0,
            interest_phases: Vec::new(),
            extra_payment_phases: Vec::new(),
            one_time_payments: Vec::new(),
            fees: Fees { origination_fee_pct: 1.0, fixed_processing_fee: 250.0, ..Fees::default() },
            penalty: Default::default(),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = LoanState::from_input(&input());

        assert_eq!(state.month_index, 0);
        assert!((state.balance - 101_250.0).abs() < 1e-9);
        assert!(state.last_rate.is_none());
        assert_eq!(state.total_interest, 0.0);
    }

    #[test]
    fn test_months_remaining_saturates() {
        let mut state = LoanState::from_input(&input());
        assert_eq!(state.months_remaining(24), 24);

        state.month_index = 30;
        assert_eq!(state.months_remaining(24), 0);
    }

    #[test]
    fn test_repricing_triggers() {
        let mut state = LoanState::from_input(&input());

        // First iteration always reprices
        assert!(state.needs_repricing(6.0, 1e-4));

        state.last_rate = Some(6.0);
        assert!(!state.needs_repricing(6.0, 1e-4));
        // Sub-tolerance wiggle must not false-trigger
        assert!(!state.needs_repricing(6.00005, 1e-4));
        assert!(state.needs_repricing(6.5, 1e-4));
    }
}
