mod calculate;
mod info;

pub use calculate::calculate;
pub use info::info;

use colored::Colorize;
use dhondt::error::FileError;
use dhondt::util::read_serialized;
use dhondt::{ApportionmentError, ConstructionError, Election, ElectionConfig};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    File(#[from] FileError),
    #[error("Apportionment failed: {0}")]
    Apportionment(#[from] ApportionmentError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;

/// Read an election file, reporting every entity that was skipped.
fn load_election(path: &Path) -> Result<(Election, Vec<ConstructionError>)> {
    let config: ElectionConfig = read_serialized(path)?;
    let (election, rejected) = Election::from_config(config);

    for e in &rejected {
        eprintln!("{} {}", "⚠️  Skipped:".yellow(), e);
    }

    Ok((election, rejected))
}
