use super::{load_election, Result};
use colored::Colorize;
use dhondt::CommitteeResults;
use std::path::Path;

pub fn info(election_path: &Path) -> Result<()> {
    let (election, rejected) = load_election(election_path)?;

    println!(
        "🗳️  Election {}: {} districts, {} seats, {} committees",
        election_path.display().to_string().cyan(),
        election.districts().len().to_string().bright_yellow(),
        election.total_seats().to_string().bright_yellow(),
        election.committees().len().to_string().bright_yellow()
    );

    for district in election.districts() {
        println!("  📍 {}: {} seats", district.name.green(), district.number_of_seats);
    }

    for committee in election.committees() {
        match &committee.results {
            CommitteeResults::Uniform(result) => {
                println!("  👥 {}: {} in every district", committee.name.green(), result)
            }
            CommitteeResults::PerDistrict(results) => {
                println!("  👥 {}: {:?}", committee.name.green(), results)
            }
        }
    }

    // Surfaces result vectors that do not line up with the districts.
    election.compute_all_seats()?;

    if rejected.is_empty() {
        println!("✅ Election is valid");
    } else {
        println!(
            "⚠️  Election is usable, {} entries skipped",
            rejected.len().to_string().yellow()
        );
    }

    Ok(())
}
