//! Scheduling disciplines.
//!
//! Three classical single-processor algorithms behind one contract: each
//! takes the run's records, simulates from t=0 on an integer clock, and
//! returns the chronological event log plus the final clock value.
//! Records are mutated in place (states, start/completion times, derived
//! waiting and turnaround times).
//!
//! FCFS and SJF are non-preemptive and share [`run_to_completion`];
//! Round-Robin preempts on a fixed quantum.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod fcfs;
pub mod round_robin;
pub mod sjf;

pub use round_robin::DEFAULT_QUANTUM;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{EventLogEntry, EventState, ProcessRecord, ProcessState};

/// Selects one of the supported disciplines.
///
/// Parse from the wire tokens `"fcfs"`, `"sjf"` and `"rr"` with
/// [`str::parse`]; anything else is an [`UnsupportedAlgorithm`] error,
/// never a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, batch variant.
    Sjf,
    /// Round-Robin with a fixed quantum.
    #[serde(rename = "rr")]
    RoundRobin,
}

impl Algorithm {
    /// Wire token for this discipline.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "fcfs",
            Algorithm::Sjf => "sjf",
            Algorithm::RoundRobin => "rr",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = UnsupportedAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fcfs" => Ok(Algorithm::Fcfs),
            "sjf" => Ok(Algorithm::Sjf),
            "rr" => Ok(Algorithm::RoundRobin),
            other => Err(UnsupportedAlgorithm {
                name: other.to_string(),
            }),
        }
    }
}

/// An algorithm selector that names no supported discipline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedAlgorithm {
    /// The selector token as received.
    pub name: String,
}

impl fmt::Display for UnsupportedAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported algorithm '{}' (expected fcfs, sjf or rr)",
            self.name
        )
    }
}

impl std::error::Error for UnsupportedAlgorithm {}

/// Runs one process to completion without preemption.
///
/// Shared by FCFS and SJF: the process is admitted, holds the processor
/// for its whole burst, and terminates. Emits the READY, EXECUTING and
/// TERMINATED entries and returns the clock after completion. The caller
/// has already advanced `clock` to at least the record's arrival time.
pub(crate) fn run_to_completion(
    record: &mut ProcessRecord,
    clock: i64,
    log: &mut Vec<EventLogEntry>,
) -> i64 {
    record.state = ProcessState::Ready;
    log.push(EventLogEntry::for_process(
        clock,
        format!("Process {} -> {}", record.pid, ProcessState::Ready),
        &record.pid,
        EventState::Ready,
    ));

    record.state = ProcessState::Executing;
    record.start_time = Some(clock);
    log.push(EventLogEntry::for_process(
        clock,
        format!("Process {} -> {}", record.pid, ProcessState::Executing),
        &record.pid,
        EventState::Executing,
    ));

    let finish = clock + record.burst_time;
    record.state = ProcessState::Terminated;
    record.completion_time = Some(finish);
    record.recompute_times();
    log.push(EventLogEntry::for_process(
        finish,
        format!("Process {} -> {}", record.pid, ProcessState::Terminated),
        &record.pid,
        EventState::Terminated,
    ));

    finish
}
