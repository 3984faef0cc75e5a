use super::{load_election, Result};
use colored::Colorize;
use dhondt::util::write_serialized;
use dhondt::OutputType;
use std::path::Path;

pub fn calculate(election_path: &Path, output: OutputType, out: Option<&Path>) -> Result<()> {
    let (election, _) = load_election(election_path)?;
    let report = election.calculate_total_seats(output)?;

    match out {
        Some(out) => {
            write_serialized(out, &report)?;
            eprintln!(
                "✅ Wrote {} report to {}",
                output.to_string().cyan(),
                out.display().to_string().bright_green()
            );
        }
        None => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
