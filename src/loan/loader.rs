//! Load loan descriptions from JSON documents
//!
//! The upstream form layer hands the engine a single structured record; on the
//! command line that record arrives as a JSON file.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::LoanError;
use crate::scenario::LoanScenario;

use super::LoanInput;

/// Load a single loan description from a JSON file
pub fn load_loan<P: AsRef<Path>>(path: P) -> Result<LoanInput, LoanError> {
    let file = File::open(path)?;
    load_loan_from_reader(BufReader::new(file))
}

/// Load a single loan description from any reader
pub fn load_loan_from_reader<R: std::io::Read>(reader: R) -> Result<LoanInput, LoanError> {
    let input: LoanInput = serde_json::from_reader(reader)?;
    input.validate()?;
    Ok(input)
}

/// Load a list of named scenarios from a JSON file (array of `{name, input}`)
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<LoanScenario>, LoanError> {
    let file = File::open(path)?;
    load_scenarios_from_reader(BufReader::new(file))
}

/// Load named scenarios from any reader
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<LoanScenario>, LoanError> {
    let scenarios: Vec<LoanScenario> = serde_json::from_reader(reader)?;
    for scenario in &scenarios {
        scenario.input.validate()?;
    }
    Ok(scenarios)
}
