//! Workload descriptions.
//!
//! A workload bundles a process list with the policy to run it under, and
//! can be stored as JSON:
//!
//! ```json
//! {
//!   "policy": {"kind": "round_robin", "quantum": 2},
//!   "processes": [
//!     {"pid": "P1", "arrival": 0, "burst": 5},
//!     {"pid": "P2", "arrival": 1, "burst": 3, "priority": 2}
//!   ]
//! }
//! ```
//!
//! A missing `policy` means FCFS. Random workloads come from
//! [`WorkloadGenerator`].

mod generator;

pub use generator::WorkloadGenerator;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::SimResult;
use crate::models::ProcessSpec;
use crate::scheduler::{Policy, SimulationOutcome, SimulationRequest, Simulator};

/// A process list plus the policy to simulate it with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    /// Dispatch policy.
    #[serde(default)]
    pub policy: Policy,
    /// Processes, in input order.
    pub processes: Vec<ProcessSpec>,
}

impl Workload {
    /// Creates a workload.
    pub fn new(policy: Policy, processes: Vec<ProcessSpec>) -> Self {
        Self { policy, processes }
    }

    /// Parses a workload from JSON text.
    pub fn from_json_str(json: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a workload file.
    pub fn from_json_path(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading workload");
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serializes the workload as pretty-printed JSON.
    pub fn to_json_string(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Runs the workload under its policy.
    pub fn simulate(&self) -> SimResult<SimulationOutcome> {
        Simulator::new(self.policy).simulate(&self.processes)
    }
}

impl From<Workload> for SimulationRequest {
    fn from(workload: Workload) -> Self {
        SimulationRequest::new(workload.processes, workload.policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;
    use std::io::Write;

    const RR_WORKLOAD: &str = r#"{
        "policy": {"kind": "round_robin", "quantum": 2},
        "processes": [
            {"pid": "P1", "arrival": 0, "burst": 5},
            {"pid": "P2", "arrival": 1, "burst": 3, "priority": 2}
        ]
    }"#;

    #[test]
    fn test_parse_and_simulate() {
        let workload = Workload::from_json_str(RR_WORKLOAD).unwrap();
        assert_eq!(workload.policy, Policy::RoundRobin { quantum: 2 });
        assert_eq!(workload.processes[1].priority, 2);

        let outcome = workload.simulate().unwrap();
        assert_eq!(
            outcome.timeline.to_string(),
            "P1:0-2, P2:2-4, P1:4-6, P2:6-7, P1:7-8"
        );
    }

    #[test]
    fn test_default_policy_is_fcfs() {
        let workload =
            Workload::from_json_str(r#"{"processes": [{"pid": "P1", "arrival": 5, "burst": 2}]}"#)
                .unwrap();
        assert_eq!(workload.policy, Policy::Fcfs);
        assert_eq!(workload.simulate().unwrap().timeline.to_string(), "P1:5-7");
    }

    #[test]
    fn test_parse_error() {
        let err = Workload::from_json_str(r#"{"processes": "nope"}"#).unwrap_err();
        assert!(matches!(err, SimError::Parse(_)));

        let err = Workload::from_json_str(r#"{"policy": {"kind": "lottery"}, "processes": []}"#)
            .unwrap_err();
        assert!(matches!(err, SimError::Parse(_)));
    }

    #[test]
    fn test_invalid_values_surface_at_simulation() {
        let workload = Workload::from_json_str(
            r#"{"processes": [{"pid": "P1", "arrival": -3, "burst": 0}]}"#,
        )
        .unwrap();
        let err = workload.simulate().unwrap_err();
        assert_eq!(err.validation_errors().len(), 2);
    }

    #[test]
    fn test_json_round_trip_through_file() {
        let workload = Workload::new(
            Policy::Sjf,
            vec![
                ProcessSpec::new("A", 5),
                ProcessSpec::new("B", 3).with_arrival(1),
            ],
        );

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(workload.to_json_string().unwrap().as_bytes())
            .unwrap();

        let loaded = Workload::from_json_path(file.path()).unwrap();
        assert_eq!(loaded, workload);
    }

    #[test]
    fn test_missing_file() {
        let err = Workload::from_json_path("/nonexistent/workload.json").unwrap_err();
        assert!(matches!(err, SimError::Io(_)));
    }

    #[test]
    fn test_into_request() {
        let workload = Workload::from_json_str(RR_WORKLOAD).unwrap();
        let request: SimulationRequest = workload.into();
        assert_eq!(request.processes.len(), 2);
        assert_eq!(request.policy, Policy::round_robin());
    }
}
