use super::{seat_counts, CommitteeTotal, Roster};
use crate::model::{Committee, District};
use crate::tabulator::SeatAward;
use serde::Serialize;

/// Seats won in one district: every winning quotient, then a count per
/// committee.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistrictSeats<'a> {
    pub district: &'a District,
    pub seats: Vec<WonSeat<'a>>,
    pub committees: Vec<CommitteeSeatCount<'a>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WonSeat<'a> {
    pub committee: &'a Committee,
    pub quotient: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommitteeSeatCount<'a> {
    pub committee: &'a Committee,
    pub seats: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimplifiedDistrictSeats {
    pub district: String,
    pub seats: Vec<NamedSeat>,
    pub committees: Vec<CommitteeTotal>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedSeat {
    pub committee: String,
    pub quotient: f64,
}

pub fn detailed<'a>(awards: &[SeatAward<'a>], roster: &Roster<'a>) -> Vec<DistrictSeats<'a>> {
    let counts = seat_counts(awards);

    roster
        .districts
        .iter()
        .map(|&district| DistrictSeats {
            district,
            seats: awards
                .iter()
                .filter(|a| a.district.id == district.id)
                .map(|a| WonSeat {
                    committee: a.committee,
                    quotient: a.quotient,
                })
                .collect(),
            committees: roster
                .committees
                .iter()
                .map(|&committee| CommitteeSeatCount {
                    committee,
                    seats: counts
                        .get(&(committee.name.as_str(), district.id))
                        .copied()
                        .unwrap_or(0),
                })
                .collect(),
        })
        .collect()
}

pub fn simplify(detailed: &[DistrictSeats]) -> Vec<SimplifiedDistrictSeats> {
    detailed
        .iter()
        .map(|row| SimplifiedDistrictSeats {
            district: row.district.name.clone(),
            seats: row
                .seats
                .iter()
                .map(|seat| NamedSeat {
                    committee: seat.committee.name.clone(),
                    quotient: seat.quotient,
                })
                .collect(),
            committees: row
                .committees
                .iter()
                .map(|c| CommitteeTotal {
                    committee: c.committee.name.clone(),
                    seats: c.seats,
                })
                .collect(),
        })
        .collect()
}
