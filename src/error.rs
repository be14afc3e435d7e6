//! Error taxonomy for the loan engine
//!
//! The simulation itself handles edge cases by arithmetic clamping; errors are
//! reserved for structurally invalid input and for I/O around the boundaries
//! (loading loan descriptions, exporting schedules).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoanError {
    /// Input that would make the amortization formulas produce nonsense
    /// (non-positive principal or term, non-finite or negative rates).
    #[error("invalid input: {field}: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),
}

impl LoanError {
    /// Shorthand for a field-level validation failure
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        LoanError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
