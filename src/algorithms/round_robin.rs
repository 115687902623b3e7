//! Round-Robin scheduling with a fixed quantum.
//!
//! Preemptive: each dispatch grants the front of the ready queue at most
//! `quantum` ticks. The queue is strictly FIFO; fairness comes from
//! admission order alone. Processes that arrive while a slice runs are
//! admitted before the preempted process re-joins, so finishing a
//! quantum sends a process behind everyone who arrived during it.
//!
//! While nothing is ready and arrivals are still pending, the clock
//! advances one tick at a time without emitting events.

use std::collections::VecDeque;

use crate::models::{EventLogEntry, EventState, ProcessRecord, ProcessState};

/// Quantum used when the caller does not supply one.
pub const DEFAULT_QUANTUM: i64 = 2;

/// Schedules the records with a fixed quantum, mutating them in place.
///
/// Returns the chronological event log and the final clock value.
/// `quantum` must be positive; the run orchestration validates it.
pub fn schedule(processes: &mut [ProcessRecord], quantum: i64) -> (Vec<EventLogEntry>, i64) {
    let mut log = Vec::new();
    let mut clock: i64 = 0;

    // Pending keeps input order, which decides ties on arrival tick.
    let mut pending: Vec<usize> = (0..processes.len()).collect();
    let mut ready: VecDeque<usize> = VecDeque::new();
    let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();

    while !pending.is_empty() || !ready.is_empty() {
        admit_arrivals(processes, &mut pending, &mut ready, clock, &mut log);

        let Some(idx) = ready.pop_front() else {
            // Nothing ready yet; idle one tick toward the next arrival.
            clock += 1;
            continue;
        };

        let slice = quantum.min(remaining[idx]);
        {
            let record = &mut processes[idx];
            record.state = ProcessState::Executing;
            if record.start_time.is_none() {
                record.start_time = Some(clock);
            }
            log.push(EventLogEntry::for_process(
                clock,
                format!(
                    "Process {} -> EXECUTING for {} units (quantum={})",
                    record.pid, slice, quantum
                ),
                &record.pid,
                EventState::Executing,
            ));
        }

        clock += slice;
        remaining[idx] -= slice;

        // Arrivals during the slice queue ahead of the preempted process.
        admit_arrivals(processes, &mut pending, &mut ready, clock, &mut log);

        let record = &mut processes[idx];
        record.remaining_time = remaining[idx];
        if remaining[idx] > 0 {
            record.state = ProcessState::Waiting;
            log.push(EventLogEntry::for_process(
                clock,
                format!("Process {} -> WAITING ({} units left)", record.pid, remaining[idx]),
                &record.pid,
                EventState::Waiting,
            ));
            ready.push_back(idx);
        } else {
            record.state = ProcessState::Terminated;
            record.completion_time = Some(clock);
            record.recompute_times();
            log.push(EventLogEntry::for_process(
                clock,
                format!("Process {} -> TERMINATED", record.pid),
                &record.pid,
                EventState::Terminated,
            ));
        }
    }

    (log, clock)
}

/// Moves every pending process with `arrival_time <= clock` to the back
/// of the ready queue, preserving input order among equal arrivals.
fn admit_arrivals(
    processes: &mut [ProcessRecord],
    pending: &mut Vec<usize>,
    ready: &mut VecDeque<usize>,
    clock: i64,
    log: &mut Vec<EventLogEntry>,
) {
    let mut i = 0;
    while i < pending.len() {
        let idx = pending[i];
        if processes[idx].arrival_time <= clock {
            pending.remove(i);
            ready.push_back(idx);
            let record = &mut processes[idx];
            record.state = ProcessState::Ready;
            log.push(EventLogEntry::for_process(
                clock,
                format!("Process {} -> READY (joined queue)", record.pid),
                &record.pid,
                EventState::Ready,
            ));
        } else {
            i += 1;
        }
    }
}
