//! Loan Engine - month-by-month amortization under phase-based rates
//!
//! This library provides:
//! - A month-by-month amortization simulator with variable rate phases,
//!   recurring and one-time extra payments, capitalized fees and
//!   early-repayment penalties
//! - Pure phase resolution for rates and extra payments
//! - An interest-rate sensitivity table built on the same annuity formula
//! - A parallel scenario runner for side-by-side loan comparisons

pub mod analysis;
pub mod error;
pub mod loan;
pub mod scenario;
pub mod schedule;

// Re-export commonly used types
pub use error::LoanError;
pub use loan::{ExtraPaymentPhase, Fees, InterestPhase, LoanInput, OneTimePayment, PenaltyConfig};
pub use schedule::{simulate, LoanResult, ScheduleItem, Simulator, SimulatorConfig, Termination};
