use crate::error::{ApportionmentError, ConstructionError};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Committee as described in an election file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommitteeData {
    pub name: Option<String>,
    pub details: Option<serde_json::Value>,
    pub result: Option<f64>,
    pub results: Option<Vec<f64>>,
    #[serde(rename = "districtResultDeviations")]
    pub district_result_deviations: Option<Vec<f64>>,
}

impl CommitteeData {
    pub fn new(name: &str) -> Self {
        CommitteeData {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    pub fn with_result(mut self, result: f64) -> Self {
        self.result = Some(result);
        self
    }

    pub fn with_results(mut self, results: Vec<f64>) -> Self {
        self.results = Some(results);
        self
    }

    pub fn with_deviations(mut self, deviations: Vec<f64>) -> Self {
        self.district_result_deviations = Some(deviations);
        self
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Vote totals of a committee, either one value per district or a single
/// value used in every district.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CommitteeResults {
    #[serde(rename = "results")]
    PerDistrict(Vec<f64>),
    #[serde(rename = "averageResult")]
    Uniform(f64),
}

impl CommitteeResults {
    /// Result used for the district at `district_index`. `None` only when a
    /// per-district vector is too short.
    pub fn result_for(&self, district_index: usize) -> Option<f64> {
        match self {
            CommitteeResults::PerDistrict(results) => results.get(district_index).copied(),
            CommitteeResults::Uniform(result) => Some(*result),
        }
    }

    fn is_finite(&self) -> bool {
        match self {
            CommitteeResults::PerDistrict(results) => results.iter().all(|r| r.is_finite()),
            CommitteeResults::Uniform(result) => result.is_finite(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Committee {
    pub name: String,
    #[serde(flatten)]
    pub results: CommitteeResults,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl Committee {
    pub fn new(data: CommitteeData) -> Result<Committee, ConstructionError> {
        let name = match data.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(ConstructionError::MissingName),
        };

        if data.results.is_some() && data.district_result_deviations.is_some() {
            warn!(
                committee = %name,
                "'results' and 'districtResultDeviations' both set, using 'results'"
            );
        }

        let results = match (data.results, data.result, data.district_result_deviations) {
            (Some(results), _, _) => CommitteeResults::PerDistrict(results),
            (None, Some(result), Some(deviations)) => CommitteeResults::PerDistrict(
                deviations
                    .iter()
                    .map(|deviation| result + result * deviation / 100.0)
                    .collect(),
            ),
            (None, Some(result), None) => CommitteeResults::Uniform(result),
            (None, None, _) => return Err(ConstructionError::MissingResult { committee: name }),
        };

        if !results.is_finite() {
            return Err(ConstructionError::NonFiniteResult { committee: name });
        }

        Ok(Committee {
            name,
            results,
            details: data.details,
        })
    }

    pub fn result_for(&self, district_index: usize) -> Option<f64> {
        self.results.result_for(district_index)
    }

    /// Check that a per-district result vector lines up with the districts.
    pub fn validate_for(&self, district_count: usize) -> Result<(), ApportionmentError> {
        match &self.results {
            CommitteeResults::PerDistrict(results) if results.len() != district_count => {
                Err(ApportionmentError::ResultsLengthMismatch {
                    committee: self.name.clone(),
                    expected: district_count,
                    found: results.len(),
                })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[test]
    fn deviations_derive_results() {
        let committee = Committee::new(
            CommitteeData::new("A")
                .with_result(100.0)
                .with_deviations(vec![0.0, 10.0, -10.0]),
        )
        .unwrap();
        assert_eq!(
            committee.results,
            CommitteeResults::PerDistrict(vec![100.0, 110.0, 90.0])
        );
    }

    #[test]
    fn results_win_over_deviations() {
        let committee = Committee::new(
            CommitteeData::new("A")
                .with_result(100.0)
                .with_results(vec![1.0, 2.0])
                .with_deviations(vec![50.0, 50.0]),
        )
        .unwrap();
        assert_eq!(committee.results, CommitteeResults::PerDistrict(vec![1.0, 2.0]));
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let value = tracing::subscriber::with_default(subscriber, f);
        (value, logs.contents())
    }

    #[test]
    fn warns_when_results_and_deviations_both_given() {
        let (committee, logs) = with_captured_logs(|| {
            Committee::new(
                CommitteeData::new("Both")
                    .with_results(vec![1.0, 2.0])
                    .with_deviations(vec![5.0, 5.0]),
            )
        });
        assert!(committee.is_ok());
        assert!(logs.contains("WARN"), "logs: {}", logs);
        assert!(logs.contains("districtResultDeviations"), "logs: {}", logs);
        assert!(logs.contains("Both"), "logs: {}", logs);

        let (_, logs) = with_captured_logs(|| {
            Committee::new(CommitteeData::new("Plain").with_results(vec![1.0, 2.0]))
        });
        assert!(logs.is_empty(), "logs: {}", logs);
    }

    #[test]
    fn scalar_result_is_uniform() {
        let committee = Committee::new(CommitteeData::new("A").with_result(42.0)).unwrap();
        assert_eq!(committee.result_for(0), Some(42.0));
        assert_eq!(committee.result_for(17), Some(42.0));
        assert!(committee.validate_for(3).is_ok());
    }

    #[test]
    fn zero_result_is_accepted() {
        let committee = Committee::new(CommitteeData::new("A").with_result(0.0)).unwrap();
        assert_eq!(committee.results, CommitteeResults::Uniform(0.0));
    }

    #[test]
    fn rejects_missing_fields() {
        assert_eq!(
            Committee::new(CommitteeData::default().with_result(1.0)),
            Err(ConstructionError::MissingName)
        );
        assert_eq!(
            Committee::new(CommitteeData::new("")),
            Err(ConstructionError::MissingName)
        );
        assert_eq!(
            Committee::new(CommitteeData::new("A")),
            Err(ConstructionError::MissingResult {
                committee: "A".to_string()
            })
        );
    }

    #[test]
    fn rejects_nan() {
        assert_eq!(
            Committee::new(CommitteeData::new("A").with_results(vec![1.0, f64::NAN])),
            Err(ConstructionError::NonFiniteResult {
                committee: "A".to_string()
            })
        );
    }

    #[test]
    fn length_mismatch_is_reported() {
        let committee = Committee::new(CommitteeData::new("A").with_results(vec![1.0, 2.0])).unwrap();
        assert_eq!(
            committee.validate_for(3),
            Err(ApportionmentError::ResultsLengthMismatch {
                committee: "A".to_string(),
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn serializes_active_representation_and_details() {
        let committee = Committee::new(
            CommitteeData::new("A")
                .with_result(10.0)
                .with_details(json!({"leader": "X"})),
        )
        .unwrap();
        assert_eq!(
            serde_json::to_value(&committee).unwrap(),
            json!({"name": "A", "averageResult": 10.0, "details": {"leader": "X"}})
        );
    }

    #[test]
    fn parses_camel_case_fields() {
        let data: CommitteeData = serde_json::from_value(json!({
            "name": "A",
            "result": 100,
            "districtResultDeviations": [5, -5]
        }))
        .unwrap();
        let committee = Committee::new(data).unwrap();
        assert_eq!(committee.results, CommitteeResults::PerDistrict(vec![105.0, 95.0]));
    }
}
