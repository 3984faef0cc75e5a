pub mod committee;
pub mod district;

pub use committee::{Committee, CommitteeData, CommitteeResults};
pub use district::{District, DistrictData};
