use super::{seat_counts, Roster};
use crate::model::{Committee, District};
use crate::tabulator::SeatAward;
use serde::Serialize;

/// Seats won by one committee, in total and per district.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommitteeSeats<'a> {
    pub committee: &'a Committee,
    pub seats: usize,
    #[serde(rename = "seatsByDistricts")]
    pub seats_by_districts: Vec<DistrictSeatCount<'a>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistrictSeatCount<'a> {
    pub district: &'a District,
    pub seats: usize,
}

/// Committee name with a seat count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitteeTotal {
    pub committee: String,
    pub seats: usize,
}

pub fn detailed<'a>(awards: &[SeatAward<'a>], roster: &Roster<'a>) -> Vec<CommitteeSeats<'a>> {
    let counts = seat_counts(awards);

    roster
        .committees
        .iter()
        .map(|&committee| {
            let seats_by_districts: Vec<DistrictSeatCount> = roster
                .districts
                .iter()
                .map(|&district| DistrictSeatCount {
                    district,
                    seats: counts
                        .get(&(committee.name.as_str(), district.id))
                        .copied()
                        .unwrap_or(0),
                })
                .collect();

            CommitteeSeats {
                committee,
                seats: seats_by_districts.iter().map(|d| d.seats).sum(),
                seats_by_districts,
            }
        })
        .collect()
}

pub fn simplify(detailed: &[CommitteeSeats]) -> Vec<CommitteeTotal> {
    detailed
        .iter()
        .map(|row| CommitteeTotal {
            committee: row.committee.name.clone(),
            seats: row.seats,
        })
        .collect()
}
