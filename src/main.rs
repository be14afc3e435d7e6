//! Loan Engine CLI
//!
//! Loads a loan description from JSON, runs the amortization simulation and
//! prints the schedule, summary and optional rate-sensitivity table.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use loan_engine::analysis::interest_sensitivity;
use loan_engine::loan::load_loan;
use loan_engine::schedule::{simulate, write_schedule_csv, Termination};

#[derive(Debug, Parser)]
#[command(name = "loan_engine", about = "Month-by-month loan amortization")]
struct Args {
    /// Path to the loan description JSON
    input: PathBuf,

    /// Write the full schedule as CSV to this path
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Number of schedule rows to print to the console
    #[arg(long, default_value_t = 24)]
    show_months: usize,

    /// Also print the interest-rate sensitivity table
    #[arg(long)]
    sensitivity: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let input = load_loan(&args.input)
        .with_context(|| format!("failed to load loan from {}", args.input.display()))?;

    println!("Loan Engine v0.1.0");
    println!("==================\n");
    println!("Principal: {:.2}", input.principal);
    println!("  Term: {} years ({} months)", input.loan_term_years, input.total_months());
    println!("  Base rate: {:.2}%", input.base_interest_rate);
    println!("  Rate phases: {}", input.interest_phases.len());
    println!("  Effective principal (incl. fees): {:.2}", input.effective_principal());
    println!();

    let result = simulate(&input)?;

    println!("Schedule ({} months):", result.schedule.len());
    println!(
        "{:>5} {:>8} {:>7} {:>14} {:>14} {:>14} {:>12} {:>10} {:>14}",
        "Month", "Label", "Rate", "Payment", "Interest", "Principal", "Extra", "Penalty", "Balance"
    );
    println!("{}", "-".repeat(110));

    for item in result.schedule.iter().take(args.show_months) {
        println!(
            "{:>5} {:>8} {:>6.2}% {:>14.2} {:>14.2} {:>14.2} {:>12.2} {:>10.2} {:>14.2}",
            item.month_index,
            item.month_label,
            item.rate,
            item.payment,
            item.interest,
            item.principal,
            item.prepayment_amount,
            item.penalty_amount,
            item.balance,
        );
    }
    if result.schedule.len() > args.show_months {
        println!("... ({} more months)", result.schedule.len() - args.show_months);
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  First payment: {:.2}", result.monthly_payment_first_phase);
    println!("  Months to payoff: {}", summary.months);
    if let Some(date) = result.payoff_date {
        println!("  Payoff date: {}", date.format("%Y-%m"));
    }
    println!("  Total interest: {:.2}", summary.total_interest);
    println!("  Total paid: {:.2}", summary.total_payment);
    println!("  Total prepaid: {:.2}", summary.total_prepayment);
    println!("  Total penalties: {:.2}", summary.total_penalty);

    if result.termination == Termination::HorizonCeiling {
        println!(
            "\nWARNING: the loan did not pay off within the safety horizon; \
             the schedule above is truncated, not a completed amortization \
             (remaining balance {:.2})",
            summary.final_balance
        );
    }

    if args.sensitivity {
        let table = interest_sensitivity(
            input.principal,
            input.loan_term_years,
            input.base_interest_rate,
            &input.fees,
        );
        println!("\nRate sensitivity (full-term payment):");
        for point in &table {
            println!("  {:>6.2}% -> {:>14.2}", point.rate, point.monthly_payment);
        }
    }

    if let Some(csv_path) = &args.csv {
        write_schedule_csv(csv_path, &result)
            .with_context(|| format!("failed to write schedule to {}", csv_path.display()))?;
        println!("\nFull schedule written to: {}", csv_path.display());
    }

    Ok(())
}
