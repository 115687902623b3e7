//! Simulated process model.
//!
//! A `ProcessRecord` is the unit of work the disciplines schedule: a few
//! immutable inputs (pid, arrival, burst, priority) plus the timing and
//! state fields the algorithms mutate in place while the simulated clock
//! advances. A `ProcessDescriptor` is the caller-facing input row a run
//! is loaded from.
//!
//! # Time Representation
//! All times are integer ticks of the simulated clock, starting at t=0.
//! Nothing here measures wall-clock time.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 3.1, 5.1

use serde::{Deserialize, Serialize};
use std::fmt;

/// Execution state of a simulated process.
///
/// States advance monotonically (CREATED, READY, EXECUTING, TERMINATED)
/// except under Round-Robin, where a preempted process cycles through
/// READY, EXECUTING and WAITING until its remaining time reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessState {
    /// Loaded into a run, not yet eligible.
    Created,
    /// Eligible to run, waiting for the processor.
    Ready,
    /// Holding the processor.
    Executing,
    /// Preempted with work left (Round-Robin only).
    Waiting,
    /// Finished; timing fields are final.
    Terminated,
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProcessState::Created => "CREATED",
            ProcessState::Ready => "READY",
            ProcessState::Executing => "EXECUTING",
            ProcessState::Waiting => "WAITING",
            ProcessState::Terminated => "TERMINATED",
        };
        f.write_str(name)
    }
}

/// Caller-facing process descriptor.
///
/// The plain input row a simulation run is loaded from, and the read-only
/// shape the timeline generator recomputes from. `priority` is accepted
/// for forward compatibility; none of the three disciplines reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    /// Unique process identifier within one run.
    pub pid: String,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total processor time the process needs (ticks).
    pub burst_time: i64,
    /// Scheduling priority (unused by FCFS, SJF and Round-Robin).
    #[serde(default)]
    pub priority: i32,
}

impl ProcessDescriptor {
    /// Creates a descriptor with priority 0.
    pub fn new(pid: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            pid: pid.into(),
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// One simulated process.
///
/// Algorithms set the mutable fields directly; after any run the timing
/// invariants hold for every terminated record: `waiting_time >= 0`,
/// `turnaround_time >= burst_time`, and
/// `completion_time >= arrival_time + burst_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Unique process identifier within one run.
    pub pid: String,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total processor time the process needs (ticks).
    pub burst_time: i64,
    /// Scheduling priority (carried, never read by the disciplines).
    pub priority: i32,
    /// Ticks of work left. Decremented only by Round-Robin; the
    /// non-preemptive disciplines never touch it.
    pub remaining_time: i64,
    /// Current execution state.
    pub state: ProcessState,
    /// First tick the process held the processor. Set once.
    pub start_time: Option<i64>,
    /// Tick at which remaining work reached zero.
    pub completion_time: Option<i64>,
    /// `turnaround_time - burst_time`: ticks spent ready but not executing.
    pub waiting_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
}

impl ProcessRecord {
    /// Creates a record in the CREATED state with all timing fields reset.
    pub fn new(pid: impl Into<String>, arrival_time: i64, burst_time: i64, priority: i32) -> Self {
        Self {
            pid: pid.into(),
            arrival_time,
            burst_time,
            priority,
            remaining_time: burst_time,
            state: ProcessState::Created,
            start_time: None,
            completion_time: None,
            waiting_time: 0,
            turnaround_time: 0,
        }
    }

    /// Creates a record from a caller-supplied descriptor.
    pub fn from_descriptor(descriptor: &ProcessDescriptor) -> Self {
        Self::new(
            descriptor.pid.clone(),
            descriptor.arrival_time,
            descriptor.burst_time,
            descriptor.priority,
        )
    }

    /// Derives `turnaround_time` and `waiting_time` from the completion time.
    ///
    /// No-op while `completion_time` is unset; callers set completion first.
    pub fn recompute_times(&mut self) {
        if let Some(completion) = self.completion_time {
            self.turnaround_time = completion - self.arrival_time;
            self.waiting_time = self.turnaround_time - self.burst_time;
        }
    }

    /// Whether the process has run to completion.
    pub fn is_terminated(&self) -> bool {
        self.state == ProcessState::Terminated
    }

    /// Projects the immutable inputs back into descriptor form.
    pub fn to_descriptor(&self) -> ProcessDescriptor {
        ProcessDescriptor {
            pid: self.pid.clone(),
            arrival_time: self.arrival_time,
            burst_time: self.burst_time,
            priority: self.priority,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_initial_state() {
        let r = ProcessRecord::new("P1", 3, 7, 0);
        assert_eq!(r.pid, "P1");
        assert_eq!(r.arrival_time, 3);
        assert_eq!(r.burst_time, 7);
        assert_eq!(r.remaining_time, 7);
        assert_eq!(r.state, ProcessState::Created);
        assert_eq!(r.start_time, None);
        assert_eq!(r.completion_time, None);
        assert_eq!(r.waiting_time, 0);
        assert_eq!(r.turnaround_time, 0);
    }

    #[test]
    fn test_recompute_times() {
        let mut r = ProcessRecord::new("P1", 2, 5, 0);
        r.completion_time = Some(10);
        r.recompute_times();
        assert_eq!(r.turnaround_time, 8); // 10 - 2
        assert_eq!(r.waiting_time, 3); // 8 - 5
    }

    #[test]
    fn test_recompute_times_noop_without_completion() {
        let mut r = ProcessRecord::new("P1", 2, 5, 0);
        r.recompute_times();
        assert_eq!(r.turnaround_time, 0);
        assert_eq!(r.waiting_time, 0);
    }

    #[test]
    fn test_from_descriptor() {
        let d = ProcessDescriptor::new("P9", 4, 6).with_priority(2);
        let r = ProcessRecord::from_descriptor(&d);
        assert_eq!(r.pid, "P9");
        assert_eq!(r.arrival_time, 4);
        assert_eq!(r.burst_time, 6);
        assert_eq!(r.priority, 2);
        assert_eq!(r.to_descriptor(), d);
    }

    #[test]
    fn test_descriptor_priority_defaults_in_json() {
        let d: ProcessDescriptor =
            serde_json::from_str(r#"{"pid":"P1","arrival_time":0,"burst_time":5}"#).unwrap();
        assert_eq!(d.priority, 0);
    }

    #[test]
    fn test_state_serializes_screaming_case() {
        assert_eq!(
            serde_json::to_string(&ProcessState::Executing).unwrap(),
            "\"EXECUTING\""
        );
        assert_eq!(
            serde_json::from_str::<ProcessState>("\"TERMINATED\"").unwrap(),
            ProcessState::Terminated
        );
        assert_eq!(ProcessState::Ready.to_string(), "READY");
    }
}
