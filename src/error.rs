/// Errors raised while building committees and districts
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConstructionError {
    #[error("required parameter 'name' not set, committee not created")]
    MissingName,
    #[error("'results' or 'result' not set for committee '{committee}', committee not created")]
    MissingResult { committee: String },
    #[error("committee '{committee}' has a result that is not a finite number")]
    NonFiniteResult { committee: String },
    #[error("committee '{committee}' already exists")]
    DuplicateCommittee { committee: String },
    #[error("required parameter 'numberOfSeats' not set for {district}, district not created")]
    MissingSeats { district: String },
    #[error("{district} has a negative number of seats ({seats})")]
    NegativeSeats { district: String, seats: i64 },
    #[error("{entity} entry {index} is malformed: {reason}")]
    MalformedEntry {
        entity: &'static str,
        index: usize,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApportionmentError {
    #[error(
        "committee '{committee}' has {found} district results but there are {expected} districts"
    )]
    ResultsLengthMismatch {
        committee: String,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, ApportionmentError>;

/// Errors reading or writing election and report files
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON error in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}
