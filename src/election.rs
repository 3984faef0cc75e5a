use crate::error::{ConstructionError, Result};
use crate::model::{Committee, CommitteeData, District, DistrictData};
use crate::reports::{self, OutputType, Report, Roster};
use crate::tabulator::{self, SeatAward};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

/// Election description as stored in a JSON file. Entries stay raw JSON
/// until the election is built, so one malformed entry only skips itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElectionConfig {
    #[serde(default)]
    pub districts: Vec<Value>,
    #[serde(default)]
    pub committees: Vec<Value>,
}

fn parse_entry<T: DeserializeOwned>(
    entity: &'static str,
    index: usize,
    entry: Value,
) -> std::result::Result<T, ConstructionError> {
    serde_json::from_value(entry).map_err(|e| ConstructionError::MalformedEntry {
        entity,
        index,
        reason: e.to_string(),
    })
}

/// A calculation session: the districts and committees of one election.
#[derive(Debug, Clone, Default)]
pub struct Election {
    districts: Vec<District>,
    committees: Vec<Committee>,
}

impl Election {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an election from a config, skipping entities that cannot be
    /// created. The rejections are returned alongside the election.
    pub fn from_config(config: ElectionConfig) -> (Self, Vec<ConstructionError>) {
        let mut election = Election::new();
        let mut rejected = Vec::new();

        for (index, entry) in config.districts.into_iter().enumerate() {
            let added = parse_entry::<DistrictData>("district", index, entry)
                .and_then(|data| election.add_district(data).map(|_| ()));
            if let Err(e) = added {
                warn!("{}", e);
                rejected.push(e);
            }
        }

        for (index, entry) in config.committees.into_iter().enumerate() {
            let added = parse_entry::<CommitteeData>("committee", index, entry)
                .and_then(|data| election.add_committee(data).map(|_| ()));
            if let Err(e) = added {
                warn!("{}", e);
                rejected.push(e);
            }
        }

        info!(
            districts = election.districts.len(),
            committees = election.committees.len(),
            rejected = rejected.len(),
            "election loaded"
        );

        (election, rejected)
    }

    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    pub fn committees(&self) -> &[Committee] {
        &self.committees
    }

    pub fn add_district(
        &mut self,
        data: DistrictData,
    ) -> std::result::Result<&District, ConstructionError> {
        let district = District::new(self.districts.len(), data)?;
        self.districts.push(district);
        Ok(&self.districts[self.districts.len() - 1])
    }

    pub fn add_committee(
        &mut self,
        data: CommitteeData,
    ) -> std::result::Result<&Committee, ConstructionError> {
        let committee = Committee::new(data)?;
        if self.committees.iter().any(|c| c.name == committee.name) {
            return Err(ConstructionError::DuplicateCommittee {
                committee: committee.name,
            });
        }
        self.committees.push(committee);
        Ok(&self.committees[self.committees.len() - 1])
    }

    pub fn reset(&mut self) {
        self.districts.clear();
        self.committees.clear();
    }

    /// Seats available across every district.
    pub fn total_seats(&self) -> u64 {
        self.districts
            .iter()
            .map(|d| u64::from(d.number_of_seats))
            .sum()
    }

    pub fn compute_all_seats(&self) -> Result<Vec<SeatAward<'_>>> {
        tabulator::compute_all_seats(&self.committees, &self.districts)
    }

    /// Apportion every district and shape the result. Rows follow the order
    /// in which committees and districts first win a seat; committees that
    /// won nothing follow with zero seats.
    pub fn calculate_total_seats(&self, output: OutputType) -> Result<Report<'_>> {
        let awards = self.compute_all_seats()?;
        let roster = Roster::with_committees(&awards, &self.committees);
        Ok(reports::format(&awards, &roster, output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejected_entities_are_not_added() {
        let mut election = Election::new();
        assert!(election.add_district(DistrictData::default()).is_err());
        assert!(election.add_committee(CommitteeData::new("A")).is_err());
        assert!(election.districts().is_empty());
        assert!(election.committees().is_empty());
    }

    #[test]
    fn district_ids_follow_insertion_order() {
        let mut election = Election::new();
        election.add_district(DistrictData::new(3)).unwrap();
        let second = election.add_district(DistrictData::new(4)).unwrap();
        assert_eq!(second.id, 1);
        assert_eq!(second.name, "District 2");
        assert_eq!(election.total_seats(), 7);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut election = Election::new();
        election
            .add_committee(CommitteeData::new("A").with_result(1.0))
            .unwrap();
        assert_eq!(
            election
                .add_committee(CommitteeData::new("A").with_result(2.0))
                .unwrap_err(),
            ConstructionError::DuplicateCommittee {
                committee: "A".to_string()
            }
        );
        assert_eq!(election.committees().len(), 1);
    }

    #[test]
    fn reset_clears_everything() {
        let mut election = Election::new();
        election.add_district(DistrictData::new(3)).unwrap();
        election
            .add_committee(CommitteeData::new("A").with_result(1.0))
            .unwrap();
        election.reset();
        assert!(election.districts().is_empty());
        assert!(election.committees().is_empty());
        assert_eq!(election.total_seats(), 0);
    }

    #[test]
    fn config_skips_bad_entries() {
        let config: ElectionConfig = serde_json::from_value(json!({
            "districts": [{"numberOfSeats": 4}, {"name": "Broken"}],
            "committees": [
                {"name": "A", "result": 100},
                {"result": 5},
                {"name": "B"},
                {"name": "C", "result": 30}
            ]
        }))
        .unwrap();

        let (election, rejected) = Election::from_config(config);
        assert_eq!(election.districts().len(), 1);
        let names: Vec<&str> = election.committees().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
        assert_eq!(rejected.len(), 3);
    }

    #[test]
    fn malformed_entry_skips_only_itself() {
        let config: ElectionConfig = serde_json::from_value(json!({
            "districts": [{"numberOfSeats": "many"}, {"numberOfSeats": 3}],
            "committees": [
                {"name": "A", "result": 100},
                {"name": "B", "result": "eighty"},
                {"name": "C", "result": 30}
            ]
        }))
        .unwrap();

        let (election, rejected) = Election::from_config(config);
        assert_eq!(election.districts().len(), 1);
        assert_eq!(election.districts()[0].name, "District 1");
        let names: Vec<&str> = election.committees().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);

        assert_eq!(rejected.len(), 2);
        assert!(matches!(
            rejected[0],
            ConstructionError::MalformedEntry {
                entity: "district",
                index: 0,
                ..
            }
        ));
        assert!(matches!(
            rejected[1],
            ConstructionError::MalformedEntry {
                entity: "committee",
                index: 1,
                ..
            }
        ));
        assert!(election.calculate_total_seats(OutputType::Raw).is_ok());
    }
}
