//! Simulation run orchestration.
//!
//! A [`Simulation`] owns one run's worth of state: the loaded process
//! records, the event log of the last run, and the final clock value.
//! Callers construct their own instance (there is no shared global),
//! load a batch, dispatch a discipline, then read stats and timelines.
//!
//! Runs are strictly sequential: a run executes to completion inside
//! [`Simulation::run`] before anything can be inspected. Reusing the
//! same instance for a new batch requires [`Simulation::clear`] first,
//! since the algorithms mutate records in place.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::algorithms::{self, Algorithm, UnsupportedAlgorithm, DEFAULT_QUANTUM};
use crate::models::{EventLogEntry, ProcessDescriptor, ProcessRecord, ProcessState, TimelineEntry};
use crate::timeline::generate_timeline;
use crate::validation::{validate_processes, validate_quantum, ValidationError};

use super::stats::{ProcessStats, RunSummary};

/// Error from the run orchestration boundary.
///
/// Bad input surfaces here as a typed error; the algorithms themselves
/// never panic on caller data.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The algorithm selector names no supported discipline.
    UnsupportedAlgorithm(UnsupportedAlgorithm),
    /// The loaded batch or the quantum failed validation.
    InvalidInput(Vec<ValidationError>),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::UnsupportedAlgorithm(err) => err.fmt(f),
            SimulationError::InvalidInput(errors) => {
                let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
                write!(f, "invalid input: {}", messages.join("; "))
            }
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::UnsupportedAlgorithm(err) => Some(err),
            SimulationError::InvalidInput(_) => None,
        }
    }
}

impl From<UnsupportedAlgorithm> for SimulationError {
    fn from(err: UnsupportedAlgorithm) -> Self {
        SimulationError::UnsupportedAlgorithm(err)
    }
}

/// One simulation run over a loaded set of processes.
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    processes: Vec<ProcessRecord>,
    execution_log: Vec<EventLogEntry>,
    current_time: i64,
}

impl Simulation {
    /// Creates an empty simulation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a simulation loaded with the given batch.
    pub fn from_descriptors(descriptors: &[ProcessDescriptor]) -> Self {
        let mut simulation = Self::new();
        for descriptor in descriptors {
            simulation.add_descriptor(descriptor);
        }
        simulation
    }

    /// Loads one process into the run.
    pub fn add_process(
        &mut self,
        pid: impl Into<String>,
        arrival_time: i64,
        burst_time: i64,
        priority: i32,
    ) {
        self.processes
            .push(ProcessRecord::new(pid, arrival_time, burst_time, priority));
    }

    /// Loads one process from a caller-supplied descriptor.
    pub fn add_descriptor(&mut self, descriptor: &ProcessDescriptor) {
        self.processes.push(ProcessRecord::from_descriptor(descriptor));
    }

    /// Drops all processes and any previous run's log and clock.
    ///
    /// Required before loading a new batch into a reused instance.
    pub fn clear(&mut self) {
        self.processes.clear();
        self.execution_log.clear();
        self.current_time = 0;
    }

    /// Number of loaded processes.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    /// Looks up one record by pid.
    pub fn process_by_pid(&self, pid: &str) -> Option<&ProcessRecord> {
        self.processes.iter().find(|p| p.pid == pid)
    }

    /// All loaded records, in input order.
    pub fn processes(&self) -> &[ProcessRecord] {
        &self.processes
    }

    /// The last run's chronological event log.
    pub fn execution_log(&self) -> &[EventLogEntry] {
        &self.execution_log
    }

    /// Final clock value of the last run.
    pub fn final_time(&self) -> i64 {
        self.current_time
    }

    /// Read-only input view of the loaded batch.
    pub fn descriptors(&self) -> Vec<ProcessDescriptor> {
        self.processes.iter().map(ProcessRecord::to_descriptor).collect()
    }

    /// Runs the selected discipline over the loaded batch.
    ///
    /// Validates first: on error nothing is mutated and the previous
    /// run's state stays intact. `quantum` defaults to
    /// [`DEFAULT_QUANTUM`] and is only validated (and read) for
    /// Round-Robin. Returns the event log of the completed run.
    pub fn run(
        &mut self,
        algorithm: Algorithm,
        quantum: Option<i64>,
    ) -> Result<&[EventLogEntry], SimulationError> {
        let quantum = quantum.unwrap_or(DEFAULT_QUANTUM);

        let mut errors = match validate_processes(&self.descriptors()) {
            Ok(()) => Vec::new(),
            Err(errors) => errors,
        };
        if algorithm == Algorithm::RoundRobin {
            if let Err(err) = validate_quantum(quantum) {
                errors.push(err);
            }
        }
        if !errors.is_empty() {
            return Err(SimulationError::InvalidInput(errors));
        }

        self.reset_run_state();
        let (log, final_time) = match algorithm {
            Algorithm::Fcfs => algorithms::fcfs::schedule(&mut self.processes),
            Algorithm::Sjf => algorithms::sjf::schedule(&mut self.processes),
            Algorithm::RoundRobin => {
                algorithms::round_robin::schedule(&mut self.processes, quantum)
            }
        };
        self.execution_log = log;
        self.current_time = final_time;

        Ok(&self.execution_log)
    }

    /// Per-process stats rows, in input order. Pure projection.
    pub fn stats(&self) -> Vec<ProcessStats> {
        self.processes.iter().map(ProcessStats::from_record).collect()
    }

    /// Aggregate indicators for the last run.
    pub fn summary(&self) -> RunSummary {
        RunSummary::calculate(&self.processes, self.current_time)
    }

    /// Regenerates the per-tick timeline for the loaded batch.
    ///
    /// Derived from the immutable inputs, not from run state, so it can
    /// be called before or after (or instead of) a run.
    pub fn timeline(&self, algorithm: Algorithm, quantum: Option<i64>) -> Vec<TimelineEntry> {
        generate_timeline(
            &self.descriptors(),
            algorithm,
            quantum.unwrap_or(DEFAULT_QUANTUM),
        )
    }

    /// Puts every record back to its pre-run state.
    ///
    /// Every dispatch starts from freshly reset records, so repeating
    /// a run over the same batch gives identical results.
    fn reset_run_state(&mut self) {
        for record in &mut self.processes {
            record.remaining_time = record.burst_time;
            record.state = ProcessState::Created;
            record.start_time = None;
            record.completion_time = None;
            record.waiting_time = 0;
            record.turnaround_time = 0;
        }
        self.execution_log.clear();
        self.current_time = 0;
    }
}

/// Plain-data input for one complete simulation.
///
/// The shape a transport layer decodes: a process batch, an algorithm
/// selector token (`"fcfs"`, `"sjf"` or `"rr"`), and an optional
/// quantum. The selector stays a string here so an unknown name surfaces
/// as a typed [`SimulationError`], not a decode failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub processes: Vec<ProcessDescriptor>,
    pub algorithm: String,
    #[serde(default)]
    pub quantum: Option<i64>,
}

impl SimulationRequest {
    /// Request with the default quantum.
    pub fn new(processes: Vec<ProcessDescriptor>, algorithm: impl Into<String>) -> Self {
        Self {
            processes,
            algorithm: algorithm.into(),
            quantum: None,
        }
    }

    /// Sets an explicit Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }
}

/// Everything a front-end renders for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutput {
    /// Chronological event log.
    pub execution_log: Vec<EventLogEntry>,
    /// Stats rows, in input order.
    pub process_stats: Vec<ProcessStats>,
    /// Per-tick occupancy timeline for animation.
    pub timeline_data: Vec<TimelineEntry>,
    /// Final clock value.
    pub total_time: i64,
    /// Aggregate indicators.
    pub summary: RunSummary,
}

/// Runs one complete simulation from a plain request.
///
/// Parses the selector, loads a fresh [`Simulation`], validates and
/// runs, then projects stats and regenerates the animation timeline.
///
/// # Example
/// ```
/// use schedsim::{simulate, ProcessDescriptor, SimulationRequest};
///
/// let request = SimulationRequest::new(
///     vec![
///         ProcessDescriptor::new("P1", 0, 5),
///         ProcessDescriptor::new("P2", 1, 3),
///     ],
///     "fcfs",
/// );
/// let output = simulate(&request).unwrap();
/// assert_eq!(output.total_time, 8);
/// assert_eq!(output.timeline_data.len(), 8);
/// ```
pub fn simulate(request: &SimulationRequest) -> Result<SimulationOutput, SimulationError> {
    let algorithm: Algorithm = request.algorithm.parse()?;

    let mut simulation = Simulation::from_descriptors(&request.processes);
    simulation.run(algorithm, request.quantum)?;

    Ok(SimulationOutput {
        execution_log: simulation.execution_log().to_vec(),
        process_stats: simulation.stats(),
        timeline_data: simulation.timeline(algorithm, request.quantum),
        total_time: simulation.final_time(),
        summary: simulation.summary(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventSource, EventState};
    use crate::validation::ValidationErrorKind;

    fn batch(rows: &[(&str, i64, i64)]) -> Vec<ProcessDescriptor> {
        rows.iter()
            .map(|&(pid, arrival, burst)| ProcessDescriptor::new(pid, arrival, burst))
            .collect()
    }

    #[test]
    fn test_fcfs_run_end_to_end() {
        let mut simulation = Simulation::from_descriptors(&batch(&[("P1", 0, 5), ("P2", 1, 3)]));
        let log_len = simulation.run(Algorithm::Fcfs, None).unwrap().len();

        assert_eq!(log_len, 6);
        assert_eq!(simulation.final_time(), 8);

        let stats = simulation.stats();
        assert_eq!(stats[0].waiting_time, 0);
        assert_eq!(stats[0].completion_time, Some(5));
        assert_eq!(stats[1].waiting_time, 4);
        assert_eq!(stats[1].turnaround_time, 7);
    }

    #[test]
    fn test_stats_are_idempotent() {
        let mut simulation = Simulation::from_descriptors(&batch(&[("P1", 0, 4), ("P2", 1, 2)]));
        simulation.run(Algorithm::RoundRobin, Some(2)).unwrap();

        let first = simulation.stats();
        let second = simulation.stats();
        assert_eq!(first, second);
        assert_eq!(simulation.summary(), simulation.summary());
    }

    #[test]
    fn test_rerun_same_batch_is_deterministic() {
        let mut simulation = Simulation::from_descriptors(&batch(&[("P1", 0, 4), ("P2", 1, 2)]));
        simulation.run(Algorithm::RoundRobin, Some(2)).unwrap();
        let first = simulation.stats();

        simulation.run(Algorithm::RoundRobin, Some(2)).unwrap();
        assert_eq!(simulation.stats(), first);
    }

    #[test]
    fn test_clear_then_empty_run() {
        let mut simulation = Simulation::from_descriptors(&batch(&[("P1", 0, 5)]));
        simulation.run(Algorithm::Fcfs, None).unwrap();
        simulation.clear();

        assert_eq!(simulation.process_count(), 0);
        assert!(simulation.execution_log().is_empty());
        assert_eq!(simulation.final_time(), 0);

        simulation.run(Algorithm::Sjf, None).unwrap();
        assert!(simulation.execution_log().is_empty());
        assert!(simulation.stats().is_empty());
        assert!(simulation.timeline(Algorithm::Sjf, None).is_empty());
    }

    #[test]
    fn test_clear_prevents_cross_run_contamination() {
        let mut simulation = Simulation::from_descriptors(&batch(&[("P1", 0, 5)]));
        simulation.run(Algorithm::Fcfs, None).unwrap();

        simulation.clear();
        simulation.add_process("P9", 0, 2, 0);
        simulation.run(Algorithm::Fcfs, None).unwrap();

        let stats = simulation.stats();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].pid, "P9");
        assert!(simulation
            .execution_log()
            .iter()
            .all(|e| e.process == EventSource::Process("P9".to_string())));
    }

    #[test]
    fn test_invalid_batch_rejected_before_mutation() {
        let mut simulation = Simulation::from_descriptors(&batch(&[("P1", 0, 5), ("P1", 1, 0)]));
        let err = simulation.run(Algorithm::Fcfs, None).unwrap_err();

        match err {
            SimulationError::InvalidInput(errors) => {
                assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::DuplicatePid));
                assert!(errors
                    .iter()
                    .any(|e| e.kind == ValidationErrorKind::NonPositiveBurst));
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }

        // Nothing ran.
        assert!(simulation.execution_log().is_empty());
        assert!(simulation
            .processes()
            .iter()
            .all(|p| p.state == ProcessState::Created));
    }

    #[test]
    fn test_invalid_quantum_only_checked_for_round_robin() {
        let mut simulation = Simulation::from_descriptors(&batch(&[("P1", 0, 3)]));

        let err = simulation.run(Algorithm::RoundRobin, Some(0)).unwrap_err();
        match err {
            SimulationError::InvalidInput(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].kind, ValidationErrorKind::InvalidQuantum);
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }

        assert!(simulation.run(Algorithm::Fcfs, Some(0)).is_ok());
    }

    #[test]
    fn test_process_lookup() {
        let simulation = Simulation::from_descriptors(&batch(&[("P1", 0, 5), ("P2", 1, 3)]));
        assert_eq!(simulation.process_count(), 2);
        assert_eq!(simulation.process_by_pid("P2").map(|p| p.burst_time), Some(3));
        assert!(simulation.process_by_pid("P9").is_none());
    }

    #[test]
    fn test_simulate_full_pipeline() {
        let request = SimulationRequest::new(batch(&[("P1", 0, 5), ("P2", 1, 3)]), "fcfs");
        let output = simulate(&request).unwrap();

        assert_eq!(output.total_time, 8);
        assert_eq!(output.process_stats.len(), 2);
        assert_eq!(output.timeline_data.len(), 8);
        assert_eq!(output.summary.terminated_count, 2);

        // Executing ticks in the timeline match each burst.
        for stats in &output.process_stats {
            let busy = output
                .timeline_data
                .iter()
                .filter(|e| e.process == stats.pid)
                .count() as i64;
            assert_eq!(busy, stats.burst_time);
        }
    }

    #[test]
    fn test_simulate_round_robin_defaults_quantum() {
        let request = SimulationRequest::new(batch(&[("P1", 0, 4), ("P2", 1, 2)]), "rr");
        let output = simulate(&request).unwrap();

        // Same result as an explicit quantum of 2.
        assert_eq!(output.total_time, 6);
        let p2 = output.process_stats.iter().find(|s| s.pid == "P2").unwrap();
        assert_eq!(p2.completion_time, Some(4));
    }

    #[test]
    fn test_simulate_unknown_algorithm() {
        let request = SimulationRequest::new(batch(&[("P1", 0, 5)]), "priority");
        let err = simulate(&request).unwrap_err();

        match err {
            SimulationError::UnsupportedAlgorithm(inner) => assert_eq!(inner.name, "priority"),
            other => panic!("expected UnsupportedAlgorithm, got {other:?}"),
        }
    }

    #[test]
    fn test_request_decodes_with_defaults() {
        let request: SimulationRequest = serde_json::from_str(
            r#"{"processes":[{"pid":"P1","arrival_time":0,"burst_time":5}],"algorithm":"sjf"}"#,
        )
        .unwrap();
        assert_eq!(request.quantum, None);
        assert_eq!(request.processes[0].priority, 0);
    }

    #[test]
    fn test_output_wire_shape() {
        let request = SimulationRequest::new(batch(&[("P1", 0, 2)]), "fcfs");
        let output = simulate(&request).unwrap();
        let json: serde_json::Value = serde_json::to_value(&output).unwrap();

        assert!(json["execution_log"].is_array());
        assert!(json["process_stats"].is_array());
        assert!(json["timeline_data"].is_array());
        assert_eq!(json["total_time"], 2);
        assert!(json["summary"]["cpu_utilization"].is_number());
    }

    #[test]
    fn test_error_messages() {
        let err: SimulationError = "xyz".parse::<Algorithm>().unwrap_err().into();
        assert!(err.to_string().contains("xyz"));

        let mut simulation = Simulation::from_descriptors(&batch(&[("", 0, 5)]));
        let err = simulation.run(Algorithm::Fcfs, None).unwrap_err();
        assert!(err.to_string().contains("invalid input"));
    }

    #[test]
    fn test_run_log_sequence_for_sjf() {
        let mut simulation = Simulation::from_descriptors(&batch(&[("P1", 0, 8), ("P2", 1, 4)]));
        let log = simulation.run(Algorithm::Sjf, None).unwrap();

        assert_eq!(log[0].process, EventSource::System);
        let terminated: Vec<i64> = log
            .iter()
            .filter(|e| e.state == EventState::Terminated)
            .map(|e| e.time)
            .collect();
        assert_eq!(terminated, vec![5, 13]);
    }
}
