//! D'Hondt seat apportionment.
//!
//! Committees compete in districts, each district with a fixed number of
//! seats. Every district is apportioned independently by ranking the
//! quotients `result / divisor` for divisors `1..=seats`, and the won seats
//! are reported per committee or per district.
//!
//! ```
//! use dhondt::{CommitteeData, DistrictData, Election, OutputType, Report};
//!
//! let mut election = Election::new();
//! election.add_district(DistrictData::new(4)).unwrap();
//! election.add_committee(CommitteeData::new("A").with_result(100.0)).unwrap();
//! election.add_committee(CommitteeData::new("B").with_result(80.0)).unwrap();
//!
//! match election.calculate_total_seats(OutputType::SimplifiedCommittees).unwrap() {
//!     Report::SimplifiedCommittees(rows) => assert_eq!(rows[0].seats, 2),
//!     _ => unreachable!(),
//! }
//! ```

pub mod election;
pub mod error;
pub mod model;
pub mod reports;
pub mod tabulator;
pub mod util;

pub use election::{Election, ElectionConfig};
pub use error::{ApportionmentError, ConstructionError};
pub use model::{Committee, CommitteeData, CommitteeResults, District, DistrictData};
pub use reports::{format, OutputType, Report, Roster};
pub use tabulator::{allocate, compute_all_seats, Quotient, SeatAward};
