use crate::model::{Committee, District};
use crate::tabulator::SeatAward;
use itertools::Itertools;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

pub mod committees;
pub mod districts;

pub use committees::{CommitteeSeats, CommitteeTotal, DistrictSeatCount};
pub use districts::{
    CommitteeSeatCount, DistrictSeats, NamedSeat, SimplifiedDistrictSeats, WonSeat,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportError {
    #[error("unknown output type: {0}")]
    UnknownOutputType(String),
}

/// Shape of the seat report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputType {
    /// Every won seat, district by district.
    Raw,
    /// Seats per committee, broken down per district.
    #[default]
    DetailedCommittees,
    /// Committee name and total seats.
    SimplifiedCommittees,
    /// Won seats and per-committee counts for every district.
    DetailedDistricts,
    /// Same as `DetailedDistricts` with names in place of records.
    SimplifiedDistricts,
}

impl OutputType {
    pub const ALL: [OutputType; 5] = [
        OutputType::Raw,
        OutputType::DetailedCommittees,
        OutputType::SimplifiedCommittees,
        OutputType::DetailedDistricts,
        OutputType::SimplifiedDistricts,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for OutputType {
    type Error = ReportError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        OutputType::ALL
            .get(code as usize)
            .copied()
            .ok_or_else(|| ReportError::UnknownOutputType(code.to_string()))
    }
}

impl FromStr for OutputType {
    type Err = ReportError;

    /// Accepts `detailed committees`, `detailed-committees`,
    /// `detailed_committees` (any case) or the numeric code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "raw" => Ok(OutputType::Raw),
            "detailed committees" => Ok(OutputType::DetailedCommittees),
            "simplified committees" => Ok(OutputType::SimplifiedCommittees),
            "detailed districts" => Ok(OutputType::DetailedDistricts),
            "simplified districts" => Ok(OutputType::SimplifiedDistricts),
            code => code
                .parse::<u8>()
                .map_err(|_| ReportError::UnknownOutputType(s.to_string()))
                .and_then(OutputType::try_from),
        }
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputType::Raw => write!(f, "raw"),
            OutputType::DetailedCommittees => write!(f, "detailed-committees"),
            OutputType::SimplifiedCommittees => write!(f, "simplified-committees"),
            OutputType::DetailedDistricts => write!(f, "detailed-districts"),
            OutputType::SimplifiedDistricts => write!(f, "simplified-districts"),
        }
    }
}

/// Seat report in one of the five output shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report<'a> {
    Raw(Vec<SeatAward<'a>>),
    DetailedCommittees(Vec<CommitteeSeats<'a>>),
    SimplifiedCommittees(Vec<CommitteeTotal>),
    DetailedDistricts(Vec<DistrictSeats<'a>>),
    SimplifiedDistricts(Vec<SimplifiedDistrictSeats>),
}

impl<'a> Report<'a> {
    pub fn output_type(&self) -> OutputType {
        match self {
            Report::Raw(_) => OutputType::Raw,
            Report::DetailedCommittees(_) => OutputType::DetailedCommittees,
            Report::SimplifiedCommittees(_) => OutputType::SimplifiedCommittees,
            Report::DetailedDistricts(_) => OutputType::DetailedDistricts,
            Report::SimplifiedDistricts(_) => OutputType::SimplifiedDistricts,
        }
    }
}

/// Committees and districts that get a row in a report, in row order.
#[derive(Debug, Clone)]
pub struct Roster<'a> {
    pub committees: Vec<&'a Committee>,
    pub districts: Vec<&'a District>,
}

impl<'a> Roster<'a> {
    /// Only the committees and districts that appear in `awards`, ordered by
    /// first appearance.
    pub fn from_awards(awards: &[SeatAward<'a>]) -> Self {
        Roster {
            committees: awards
                .iter()
                .map(|a| a.committee)
                .unique_by(|c| c.name.clone())
                .collect(),
            districts: awards
                .iter()
                .map(|a| a.district)
                .unique_by(|d| d.id)
                .collect(),
        }
    }

    /// Same as `from_awards`, then every committee of `committees` that won
    /// nothing is appended in input order so it still gets a zero row.
    /// Districts without awards get no row.
    pub fn with_committees(awards: &[SeatAward<'a>], committees: &'a [Committee]) -> Self {
        let mut roster = Roster::from_awards(awards);
        for committee in committees {
            if !roster.committees.iter().any(|c| c.name == committee.name) {
                roster.committees.push(committee);
            }
        }
        roster
    }
}

/// Seats won per (committee name, district id).
pub(crate) fn seat_counts<'a>(awards: &[SeatAward<'a>]) -> HashMap<(&'a str, usize), usize> {
    awards
        .iter()
        .map(|a| (a.committee.name.as_str(), a.district.id))
        .counts()
}

/// Reshape raw seat awards into the requested report.
pub fn format<'a>(
    awards: &[SeatAward<'a>],
    roster: &Roster<'a>,
    output: OutputType,
) -> Report<'a> {
    match output {
        OutputType::Raw => Report::Raw(awards.to_vec()),
        OutputType::DetailedCommittees => {
            Report::DetailedCommittees(committees::detailed(awards, roster))
        }
        OutputType::SimplifiedCommittees => {
            let detailed = committees::detailed(awards, roster);
            Report::SimplifiedCommittees(committees::simplify(&detailed))
        }
        OutputType::DetailedDistricts => {
            Report::DetailedDistricts(districts::detailed(awards, roster))
        }
        OutputType::SimplifiedDistricts => {
            let detailed = districts::detailed(awards, roster);
            Report::SimplifiedDistricts(districts::simplify(&detailed))
        }
    }
}
