//! Pure phase resolution for rates and extra payments
//!
//! Phases are consumed sequentially from month 0: the first phase whose
//! cumulative window contains the month wins. No sorting, no merging; order
//! as given defines precedence. Each call is O(number of phases).

use crate::loan::{ExtraPaymentPhase, InterestPhase};

/// Annual rate (percent) in effect for a month.
///
/// A month beyond the sum of all phase durations falls back to `base_rate`:
/// an uncovered interest month must still carry some rate.
pub fn rate_for_month(month_index: u32, phases: &[InterestPhase], base_rate: f64) -> f64 {
    resolve(month_index, phases.iter().map(|p| (p.duration_months, p.rate))).unwrap_or(base_rate)
}

/// Recurring extra payment for a month.
///
/// A month beyond all phases legitimately means "no extra payment", so the
/// fallback is 0 rather than any phase's amount.
pub fn extra_payment_for_month(month_index: u32, phases: &[ExtraPaymentPhase]) -> f64 {
    resolve(month_index, phases.iter().map(|p| (p.duration_months, p.monthly_amount))).unwrap_or(0.0)
}

/// Walk `(duration, value)` windows accumulating consumed months; return the
/// value of the window containing `month_index`, if any.
fn resolve(month_index: u32, windows: impl Iterator<Item = (u32, f64)>) -> Option<f64> {
    let mut consumed: u64 = 0;
    for (duration, value) in windows {
        consumed += duration as u64;
        if (month_index as u64) < consumed {
            return Some(value);
        }
    }
    None
}
