//! Amortization simulation: resolver, payment formula, engine, outputs

mod engine;
mod export;
mod items;
mod payment;
mod resolver;
mod state;

pub use engine::{simulate, Simulator, SimulatorConfig};
pub use export::{write_schedule, write_schedule_csv};
pub use items::{LoanResult, LoanSummary, ScheduleItem, Termination};
pub use payment::annuity_payment;
pub use resolver::{extra_payment_for_month, rate_for_month};
pub use state::LoanState;
