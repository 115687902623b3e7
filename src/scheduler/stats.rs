//! Per-process statistics and run-level aggregates.
//!
//! Both shapes are pure projections of post-run record state: computing
//! them mutates nothing, so they can be read any number of times with
//! identical results.
//!
//! # Metrics
//! - **Turnaround time**: completion - arrival
//! - **Waiting time**: turnaround - burst
//! - **Processor utilization**: busy ticks / total ticks
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::models::{ProcessRecord, ProcessState};

/// Read-only timing summary for one process.
///
/// Fields that a run never reached stay at their initial values: unset
/// `start_time`/`completion_time` serialize as `null`, and the derived
/// times stay 0 for a process that never terminated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStats {
    pub pid: String,
    pub arrival_time: i64,
    pub burst_time: i64,
    pub completion_time: Option<i64>,
    pub turnaround_time: i64,
    pub waiting_time: i64,
    pub state: ProcessState,
    pub start_time: Option<i64>,
}

impl ProcessStats {
    /// Projects the stats row out of a record.
    pub fn from_record(record: &ProcessRecord) -> Self {
        Self {
            pid: record.pid.clone(),
            arrival_time: record.arrival_time,
            burst_time: record.burst_time,
            completion_time: record.completion_time,
            turnaround_time: record.turnaround_time,
            waiting_time: record.waiting_time,
            state: record.state,
            start_time: record.start_time,
        }
    }
}

/// Aggregate indicators for one completed run.
///
/// Averages cover terminated processes only; a run in which nothing
/// terminated reports zeroed averages rather than dividing by zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Processes loaded into the run.
    pub process_count: usize,
    /// Processes that ran to completion.
    pub terminated_count: usize,
    /// Final clock value: the tick after the last completion.
    pub total_time: i64,
    /// Ticks the processor spent executing (sum of completed bursts).
    pub busy_time: i64,
    /// `busy_time / total_time`, in [0, 1]. Below 1 means idle gaps.
    pub cpu_utilization: f64,
    /// Mean waiting time over terminated processes.
    pub avg_waiting_time: f64,
    /// Mean turnaround time over terminated processes.
    pub avg_turnaround_time: f64,
}

impl RunSummary {
    /// Computes the aggregates from post-run records.
    pub fn calculate(processes: &[ProcessRecord], total_time: i64) -> Self {
        let mut terminated_count = 0usize;
        let mut busy_time = 0i64;
        let mut waiting_sum = 0i64;
        let mut turnaround_sum = 0i64;

        for record in processes {
            if record.is_terminated() {
                terminated_count += 1;
                busy_time += record.burst_time;
                waiting_sum += record.waiting_time;
                turnaround_sum += record.turnaround_time;
            }
        }

        let cpu_utilization = if total_time > 0 {
            busy_time as f64 / total_time as f64
        } else {
            0.0
        };
        let (avg_waiting_time, avg_turnaround_time) = if terminated_count > 0 {
            (
                waiting_sum as f64 / terminated_count as f64,
                turnaround_sum as f64 / terminated_count as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            process_count: processes.len(),
            terminated_count,
            total_time,
            busy_time,
            cpu_utilization,
            avg_waiting_time,
            avg_turnaround_time,
        }
    }
}
