//! Loan input structures matching the form-layer JSON shape

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::LoanError;

/// One contiguous block of months sharing a single annual interest rate.
///
/// Phases are consumed sequentially from month 0; order as given defines
/// precedence and they are never sorted or merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestPhase {
    /// Annual interest rate in percent (e.g. 8.5 for 8.5%)
    pub rate: f64,

    /// Duration of the phase in months
    pub duration_months: u32,
}

/// One contiguous block of months sharing a single recurring extra payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraPaymentPhase {
    /// Duration of the phase in months
    pub duration_months: u32,

    /// Extra principal paid each month of the phase
    pub monthly_amount: f64,
}

/// A single extra principal payment scheduled for one specific month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneTimePayment {
    /// 0-based month index (11 = the twelfth month)
    pub month_index: u32,

    /// Amount of extra principal paid in that month
    pub amount: f64,
}

/// Upfront fees capitalized into the opening balance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fees {
    /// Origination fee as a percent of principal
    #[serde(default)]
    pub origination_fee_pct: f64,

    /// Flat processing fee added to the balance
    #[serde(default)]
    pub fixed_processing_fee: f64,

    /// Reserved early-repayment percentage carried by the form layer.
    /// Not read by the simulator; penalties are driven by [`PenaltyConfig`].
    #[serde(default)]
    pub early_repayment_penalty_pct: f64,
}

impl Fees {
    /// Dollar amount of the origination fee for a given principal
    pub fn origination_amount(&self, principal: f64) -> f64 {
        principal * self.origination_fee_pct / 100.0
    }
}

/// Early-repayment penalty assessed when extra principal is paid
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PenaltyConfig {
    /// Whether the penalty applies at all
    #[serde(default)]
    pub enabled: bool,

    /// Penalty as a percent of the pre-payment balance
    #[serde(default)]
    pub rate_pct: f64,

    /// Optional cap on a single month's penalty
    #[serde(default)]
    pub max_amount: Option<f64>,

    /// Penalty window: first N months from month 0.
    /// When unset the window is 0 months, so `enabled: true` with no window
    /// assesses no penalty. This mirrors the upstream product behavior and is
    /// deliberate, not a bug to fix here.
    #[serde(default)]
    pub duration_months: Option<u32>,
}

impl PenaltyConfig {
    /// Last month index (exclusive) at which the penalty can apply
    pub fn window_end(&self) -> u32 {
        self.duration_months.unwrap_or(0)
    }
}

/// A complete loan description for one simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInput {
    /// Loan principal before fees
    pub principal: f64,

    /// Nominal amortization term in years
    pub loan_term_years: u32,

    /// First payment month; drives month labels only, not interest timing
    pub start_date: NaiveDate,

    /// Annual rate in percent used for any month not covered by a phase
    pub base_interest_rate: f64,

    /// Sequentially-consumed rate phases overriding the base rate
    #[serde(default)]
    pub interest_phases: Vec<InterestPhase>,

    /// Sequentially-consumed recurring extra-payment phases
    #[serde(default)]
    pub extra_payment_phases: Vec<ExtraPaymentPhase>,

    /// One-time extra payments; entries sharing a month are summed
    #[serde(default)]
    pub one_time_payments: Vec<OneTimePayment>,

    /// Upfront fees capitalized into the opening balance
    #[serde(default)]
    pub fees: Fees,

    /// Early-repayment penalty configuration
    #[serde(default)]
    pub penalty: PenaltyConfig,
}

impl LoanInput {
    /// Nominal amortization horizon in months
    pub fn total_months(&self) -> u32 {
        self.loan_term_years * 12
    }

    /// Opening balance: principal plus capitalized fees
    pub fn effective_principal(&self) -> f64 {
        self.principal + self.fees.origination_amount(self.principal) + self.fees.fixed_processing_fee
    }

    /// Sum of all one-time payments scheduled for a given month
    pub fn one_time_amount_for(&self, month_index: u32) -> f64 {
        self.one_time_payments
            .iter()
            .filter(|p| p.month_index == month_index)
            .map(|p| p.amount)
            .sum()
    }

    /// Reject structurally invalid input before it reaches the formulas.
    ///
    /// The engine clamps its way through ordinary edge cases; this guards the
    /// cases where the annuity formula would emit nonsense (negative payments,
    /// NaN propagation) instead of a usable schedule.
    pub fn validate(&self) -> Result<(), LoanError> {
        if !self.principal.is_finite() || self.principal <= 0.0 {
            return Err(LoanError::invalid(
                "principal",
                format!("must be a positive finite amount, got {}", self.principal),
            ));
        }
        if self.loan_term_years == 0 {
            return Err(LoanError::invalid("loan_term_years", "must be at least 1"));
        }
        if !self.base_interest_rate.is_finite() || self.base_interest_rate < 0.0 {
            return Err(LoanError::invalid(
                "base_interest_rate",
                format!("must be a non-negative finite rate, got {}", self.base_interest_rate),
            ));
        }
        for (i, phase) in self.interest_phases.iter().enumerate() {
            if !phase.rate.is_finite() || phase.rate < 0.0 {
                return Err(LoanError::invalid(
                    "interest_phases",
                    format!("phase {} rate must be non-negative and finite, got {}", i, phase.rate),
                ));
            }
        }
        for (i, phase) in self.extra_payment_phases.iter().enumerate() {
            if !phase.monthly_amount.is_finite() || phase.monthly_amount < 0.0 {
                return Err(LoanError::invalid(
                    "extra_payment_phases",
                    format!(
                        "phase {} monthly_amount must be non-negative and finite, got {}",
                        i, phase.monthly_amount
                    ),
                ));
            }
        }
        for (i, payment) in self.one_time_payments.iter().enumerate() {
            if !payment.amount.is_finite() || payment.amount < 0.0 {
                return Err(LoanError::invalid(
                    "one_time_payments",
                    format!("payment {} amount must be non-negative and finite, got {}", i, payment.amount),
                ));
            }
        }
        if !self.fees.origination_fee_pct.is_finite()
            || self.fees.origination_fee_pct < 0.0
            || !self.fees.fixed_processing_fee.is_finite()
            || self.fees.fixed_processing_fee < 0.0
        {
            return Err(LoanError::invalid("fees", "fee fields must be non-negative and finite"));
        }
        if self.penalty.enabled && (!self.penalty.rate_pct.is_finite() || self.penalty.rate_pct < 0.0) {
            return Err(LoanError::invalid(
                "penalty.rate_pct",
                format!("must be non-negative and finite, got {}", self.penalty.rate_pct),
            ));
        }
        Ok(())
    }
}
