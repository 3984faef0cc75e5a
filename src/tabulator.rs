use crate::error::Result;
use crate::model::{Committee, District};
use itertools::Itertools;
use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

/// One candidate quotient: the result at `index` divided by `divisor`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quotient {
    pub divisor: u32,
    pub index: usize,
    pub quotient: f64,
}

/// A seat won in a district, with the quotient that won it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeatAward<'a> {
    pub committee: &'a Committee,
    pub district: &'a District,
    pub quotient: f64,
}

/// Run D'Hondt for a single district.
///
/// Quotients are generated divisor-major (all committees for divisor 1, then
/// divisor 2, ...) and sorted descending with a stable sort, so equal
/// quotients keep generation order. The first `seats` quotients win.
pub fn allocate(results: &[f64], seats: u32) -> Vec<Quotient> {
    let mut quotients: Vec<Quotient> = (1..=seats)
        .cartesian_product(0..results.len())
        .map(|(divisor, index)| Quotient {
            divisor,
            index,
            quotient: results[index] / f64::from(divisor),
        })
        .collect();

    quotients.sort_by(|a, b| {
        b.quotient
            .partial_cmp(&a.quotient)
            .unwrap_or(Ordering::Equal)
    });
    quotients.truncate(seats as usize);
    quotients
}

/// Apportion every district, returning the winners district by district.
pub fn compute_all_seats<'a>(
    committees: &'a [Committee],
    districts: &'a [District],
) -> Result<Vec<SeatAward<'a>>> {
    for committee in committees {
        committee.validate_for(districts.len())?;
    }

    let mut awards = Vec::new();

    for (i, district) in districts.iter().enumerate() {
        // Lengths were validated above, so every lookup succeeds.
        let results: Vec<f64> = committees
            .iter()
            .map(|c| c.result_for(i).unwrap_or_default())
            .collect();

        let winners = allocate(&results, district.number_of_seats);
        debug!(
            district = %district.name,
            seats = district.number_of_seats,
            winners = winners.len(),
            "allocated district"
        );

        awards.extend(winners.into_iter().map(|q| SeatAward {
            committee: &committees[q.index],
            district,
            quotient: q.quotient,
        }));
    }

    Ok(awards)
}
