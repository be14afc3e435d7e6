//! Core amortization engine: the month-by-month simulation loop

use chrono::{Months, NaiveDate};
use log::{debug, warn};

use crate::error::LoanError;
use crate::loan::LoanInput;

use super::items::{LoanResult, ScheduleItem, Termination};
use super::payment::annuity_payment;
use super::resolver::{extra_payment_for_month, rate_for_month};
use super::state::LoanState;

/// Residual below which a balance is treated as exactly zero
const BALANCE_EPSILON: f64 = 1e-6;

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Balance (in minor units) at or below which the loan counts as paid off
    pub payoff_threshold: f64,

    /// Extra months past the nominal term before the loop is cut off.
    /// Guards against pathological inputs that never reduce the balance.
    pub horizon_buffer_months: u32,

    /// Rate delta (percentage points) below which a month-over-month change
    /// is treated as floating noise rather than a phase boundary
    pub rate_change_tolerance: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            payoff_threshold: 10.0,
            horizon_buffer_months: 120,
            rate_change_tolerance: 1e-4,
        }
    }
}

/// Main amortization simulator
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Create a simulator with the given config
    pub fn new(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// Run the full month-by-month simulation for one loan.
    ///
    /// Rejects structurally invalid input; all ordinary edge cases (final
    /// partial month, overpayment, penalty caps) are handled by clamping.
    pub fn simulate(&self, input: &LoanInput) -> Result<LoanResult, LoanError> {
        input.validate()?;

        let total_months = input.total_months();
        let horizon = total_months + self.config.horizon_buffer_months;

        let mut state = LoanState::from_input(input);
        let mut schedule: Vec<ScheduleItem> = Vec::with_capacity(total_months as usize);

        while state.balance > self.config.payoff_threshold && state.month_index < horizon {
            let item = self.simulate_month(input, &mut state, total_months);
            schedule.push(item);
            state.month_index += 1;
        }

        let termination = if state.balance <= self.config.payoff_threshold {
            Termination::Payoff
        } else {
            warn!(
                "loan did not pay off within {} months (balance {:.2} remaining); schedule is truncated",
                horizon, state.balance
            );
            Termination::HorizonCeiling
        };

        let payoff_date = schedule
            .last()
            .and_then(|item| add_months(input.start_date, item.month_index));

        Ok(LoanResult {
            monthly_payment_first_phase: schedule.first().map(|item| item.payment).unwrap_or(0.0),
            total_interest: state.total_interest,
            total_payment: state.total_payment,
            payoff_date,
            payoff_month_count: schedule.len() as u32,
            termination,
            schedule,
        })
    }

    /// Advance one month: resolve rate, reprice if needed, apply interest,
    /// scheduled principal, extra payments and penalty, update the balance.
    fn simulate_month(&self, input: &LoanInput, state: &mut LoanState, total_months: u32) -> ScheduleItem {
        let rate = rate_for_month(state.month_index, &input.interest_phases, input.base_interest_rate);
        let months_remaining = state.months_remaining(total_months);

        // Recompute the committed payment at the first month and at rate
        // changes, against the current actual balance over the remaining
        // original term. Within a phase the payment stays fixed even as extra
        // payments shrink the balance (reduce term, not payment).
        if state.needs_repricing(rate, self.config.rate_change_tolerance) {
            state.committed_payment = if months_remaining > 0 {
                annuity_payment(state.balance, rate, months_remaining)
            } else {
                // Past the nominal term: force payoff
                state.balance
            };
            state.last_rate = Some(rate);
            debug!(
                "month {}: repriced payment to {:.2} at {:.4}% over {} months",
                state.month_index, state.committed_payment, rate, months_remaining
            );
        }

        let monthly_interest = state.balance * rate / 100.0 / 12.0;

        // Scheduled principal, clamped for the final month of a phase or loan
        let mut scheduled_principal = state.committed_payment - monthly_interest;
        if scheduled_principal > state.balance {
            scheduled_principal = state.balance;
        }

        // Extra principal: recurring phase amount plus any one-time payments
        let mut extra_payment = extra_payment_for_month(state.month_index, &input.extra_payment_phases)
            + input.one_time_amount_for(state.month_index);

        // Never pay down more principal than is outstanding; the reported
        // extra shrinks to whatever room remains beyond the scheduled part
        let mut actual_principal = scheduled_principal + extra_payment;
        if actual_principal > state.balance {
            actual_principal = state.balance;
            extra_payment = (actual_principal - scheduled_principal).max(0.0);
        }

        let payment = monthly_interest + actual_principal;

        // Penalty is assessed against the balance before this month's payment
        let penalty = self.penalty_for_month(input, state.month_index, state.balance, extra_payment);

        state.balance -= actual_principal;
        if state.balance < BALANCE_EPSILON {
            state.balance = 0.0;
        }

        state.total_interest += monthly_interest;
        state.total_payment += payment + penalty;

        ScheduleItem {
            month_index: state.month_index,
            month_label: month_label(input.start_date, state.month_index),
            rate,
            payment,
            interest: monthly_interest,
            principal: actual_principal,
            balance: state.balance,
            total_interest: state.total_interest,
            prepayment_amount: extra_payment,
            penalty_amount: penalty,
        }
    }

    /// Early-repayment penalty for a month, 0 when not applicable.
    ///
    /// Applies only while the configured window is open and only when extra
    /// principal is actually paid. An unset window means a window of zero
    /// months, so the penalty never fires even when enabled.
    fn penalty_for_month(&self, input: &LoanInput, month_index: u32, balance_before: f64, extra_payment: f64) -> f64 {
        let penalty = &input.penalty;
        if !penalty.enabled || extra_payment <= 0.0 || month_index >= penalty.window_end() {
            return 0.0;
        }

        let assessed = balance_before * penalty.rate_pct / 100.0;
        match penalty.max_amount {
            Some(cap) => assessed.min(cap),
            None => assessed,
        }
    }
}

/// Convenience wrapper: simulate with the default configuration
pub fn simulate(input: &LoanInput) -> Result<LoanResult, LoanError> {
    Simulator::default().simulate(input)
}

/// `start` advanced by `months` whole calendar months
fn add_months(start: NaiveDate, months: u32) -> Option<NaiveDate> {
    start.checked_add_months(Months::new(months))
}

/// Display label for a month of the schedule
fn month_label(start: NaiveDate, month_index: u32) -> String {
    match add_months(start, month_index) {
        Some(date) => date.format("%Y-%m").to_string(),
        None => format!("month {}", month_index + 1),
    }
}
