//! Scenario runner for comparing loan configurations
//!
//! One simulation is strictly single-threaded; independent scenarios share
//! nothing and run in parallel.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::LoanError;
use crate::loan::LoanInput;
use crate::schedule::{LoanResult, Simulator, SimulatorConfig};

/// A named loan configuration for side-by-side comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanScenario {
    /// Display name ("baseline", "with prepayments", ...)
    pub name: String,

    /// The loan description to simulate
    pub input: LoanInput,
}

/// Outcome of one named scenario run
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub name: String,
    pub result: Result<LoanResult, LoanError>,
}

/// Runs many independent simulations with one shared configuration
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    config: SimulatorConfig,
}

impl ScenarioRunner {
    /// Create a runner with a non-default simulator configuration
    pub fn new(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// Run a single loan
    pub fn run(&self, input: &LoanInput) -> Result<LoanResult, LoanError> {
        Simulator::new(self.config.clone()).simulate(input)
    }

    /// Run many loans in parallel; output order matches input order
    pub fn run_batch(&self, inputs: &[LoanInput]) -> Vec<Result<LoanResult, LoanError>> {
        inputs.par_iter().map(|input| self.run(input)).collect()
    }

    /// Run named scenarios in parallel, keeping names with their results
    pub fn run_scenarios(&self, scenarios: &[LoanScenario]) -> Vec<ScenarioOutcome> {
        scenarios
            .par_iter()
            .map(|scenario| ScenarioOutcome {
                name: scenario.name.clone(),
                result: self.run(&scenario.input),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loan::{ExtraPaymentPhase, Fees, PenaltyConfig};
    use chrono::NaiveDate;

    fn input(principal: f64) -> LoanInput {
        LoanInput {
            principal,
            loan_term_years: 10,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            base_interest_rate: 8.0,
            interest_phases: Vec::new(),
            extra_payment_phases: Vec::new(),
            one_time_payments: Vec::new(),
            fees: Fees::default(),
            penalty: PenaltyConfig::default(),
        }
    }

    #[test]
    fn test_batch_preserves_order() {
        let runner = ScenarioRunner::default();
        let inputs = vec![input(50_000.0), input(100_000.0), input(150_000.0)];

        let results = runner.run_batch(&inputs);
        assert_eq!(results.len(), 3);

        let payments: Vec<f64> = results
            .iter()
            .map(|r| r.as_ref().unwrap().monthly_payment_first_phase)
            .collect();
        assert!(payments[0] < payments[1] && payments[1] < payments[2]);
    }

    #[test]
    fn test_named_scenarios_keep_names() {
        let runner = ScenarioRunner::default();

        let mut prepaying = input(100_000.0);
        prepaying.extra_payment_phases =
            vec![ExtraPaymentPhase { duration_months: 120, monthly_amount: 1_000.0 }];

        let scenarios = vec![
            LoanScenario { name: "baseline".into(), input: input(100_000.0) },
            LoanScenario { name: "prepaying".into(), input: prepaying },
        ];

        let outcomes = runner.run_scenarios(&scenarios);
        assert_eq!(outcomes[0].name, "baseline");
        assert_eq!(outcomes[1].name, "prepaying");

        let baseline = outcomes[0].result.as_ref().unwrap();
        let prepaying = outcomes[1].result.as_ref().unwrap();
        assert!(prepaying.payoff_month_count < baseline.payoff_month_count);
        assert!(prepaying.total_interest < baseline.total_interest);
    }

    #[test]
    fn test_batch_reports_per_scenario_failures() {
        let runner = ScenarioRunner::default();
        let mut bad = input(100_000.0);
        bad.loan_term_years = 0;

        let results = runner.run_batch(&[input(100_000.0), bad]);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
    }
}
