//! Schedule output structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One simulated month of the amortization schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleItem {
    /// 0-based month index
    pub month_index: u32,

    /// Display label for the month, derived from the loan start date
    pub month_label: String,

    /// Annual rate (percent) in effect this month
    pub rate: f64,

    /// Interest plus principal actually collected, excluding penalty
    pub payment: f64,

    /// Interest accrued this month
    pub interest: f64,

    /// Actual principal reduction, including extra payments
    pub principal: f64,

    /// Outstanding balance after this month's payment
    pub balance: f64,

    /// Cumulative interest through this month
    pub total_interest: f64,

    /// Extra principal paid this month (recurring phase + one-time)
    pub prepayment_amount: f64,

    /// Early-repayment penalty assessed this month
    pub penalty_amount: f64,
}

/// How the simulation loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// Balance reached zero (within the payoff threshold)
    Payoff,

    /// The safety ceiling was hit before payoff; the schedule is a partial
    /// view, not a completed amortization
    HorizonCeiling,
}

/// Complete result of one loan simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanResult {
    /// Payment of the first scheduled month
    pub monthly_payment_first_phase: f64,

    /// Total interest over the life of the loan
    pub total_interest: f64,

    /// Total paid: all payments plus all penalties
    pub total_payment: f64,

    /// Month of the final payment; `None` when the schedule is empty
    pub payoff_date: Option<NaiveDate>,

    /// Number of months actually simulated (= schedule length)
    pub payoff_month_count: u32,

    /// Whether the loan paid off or ran into the safety ceiling
    pub termination: Termination,

    /// Ordered month-by-month schedule; index = chronological month
    pub schedule: Vec<ScheduleItem>,
}

impl LoanResult {
    /// Aggregate totals for summary display
    pub fn summary(&self) -> LoanSummary {
        let total_prepayment: f64 = self.schedule.iter().map(|item| item.prepayment_amount).sum();
        let total_penalty: f64 = self.schedule.iter().map(|item| item.penalty_amount).sum();
        let total_principal: f64 = self.schedule.iter().map(|item| item.principal).sum();
        let final_balance = self.schedule.last().map(|item| item.balance).unwrap_or(0.0);

        LoanSummary {
            months: self.schedule.len() as u32,
            total_interest: self.total_interest,
            total_payment: self.total_payment,
            total_principal,
            total_prepayment,
            total_penalty,
            final_balance,
            paid_off: self.termination == Termination::Payoff,
        }
    }
}

/// Summary statistics for one simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanSummary {
    pub months: u32,
    pub total_interest: f64,
    pub total_payment: f64,
    pub total_principal: f64,
    pub total_prepayment: f64,
    pub total_penalty: f64,
    pub final_balance: f64,
    pub paid_off: bool,
}
