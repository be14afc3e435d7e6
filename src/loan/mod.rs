//! Loan input model and loaders

mod input;
pub mod loader;

pub use input::{ExtraPaymentPhase, Fees, InterestPhase, LoanInput, OneTimePayment, PenaltyConfig};
pub use loader::{load_loan, load_loan_from_reader, load_scenarios, load_scenarios_from_reader};
