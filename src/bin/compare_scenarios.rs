//! Compare loan scenarios side by side
//!
//! Loads a JSON array of named scenarios, runs every simulation in parallel
//! and prints a comparison table of the headline numbers.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use loan_engine::loan::load_scenarios;
use loan_engine::scenario::ScenarioRunner;
use loan_engine::schedule::Termination;

#[derive(Debug, Parser)]
#[command(name = "compare_scenarios", about = "Side-by-side loan scenario comparison")]
struct Args {
    /// Path to a JSON array of `{name, input}` scenarios
    scenarios: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let scenarios = load_scenarios(&args.scenarios)
        .with_context(|| format!("failed to load scenarios from {}", args.scenarios.display()))?;
    println!("Loaded {} scenarios", scenarios.len());

    let runner = ScenarioRunner::default();
    let outcomes = runner.run_scenarios(&scenarios);

    println!(
        "\n{:<24} {:>14} {:>8} {:>16} {:>16} {:>12}",
        "Scenario", "First PMT", "Months", "Total Interest", "Total Paid", "Penalties"
    );
    println!("{}", "-".repeat(96));

    for outcome in &outcomes {
        match &outcome.result {
            Ok(result) => {
                let summary = result.summary();
                let months = if result.termination == Termination::HorizonCeiling {
                    format!("{}+", summary.months)
                } else {
                    summary.months.to_string()
                };
                println!(
                    "{:<24} {:>14.2} {:>8} {:>16.2} {:>16.2} {:>12.2}",
                    outcome.name,
                    result.monthly_payment_first_phase,
                    months,
                    summary.total_interest,
                    summary.total_payment,
                    summary.total_penalty,
                );
            }
            Err(err) => {
                println!("{:<24} failed: {}", outcome.name, err);
            }
        }
    }

    Ok(())
}
