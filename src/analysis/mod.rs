//! Supplementary analyses beside the simulator

mod sensitivity;

pub use sensitivity::{interest_sensitivity, SensitivityPoint, RATE_OFFSETS};
