//! Per-tick execution timeline generation.
//!
//! Recomputes, for each discipline, which process holds the processor at
//! every simulated tick. Works from read-only descriptors rather than
//! the records a run mutates, so a timeline can be regenerated at any
//! time (re-rendering an animation, say) without touching or re-running
//! a simulation.
//!
//! The ordering, tie-break and preemption rules here must mirror the
//! algorithms exactly: same stable sorts, same FIFO queue, same
//! admission-before-re-enqueue rule. A tick in the timeline corresponds
//! one-to-one with a tick of execution in the run; idle ticks produce no
//! entry, so gaps in the sequence are idle time.

use std::collections::VecDeque;

use crate::algorithms::Algorithm;
use crate::models::{ProcessDescriptor, TimelineEntry};

/// Generates the tick-by-tick occupancy timeline for one discipline.
///
/// `quantum` is only read for Round-Robin; the other disciplines ignore
/// it. Entries are ordered by time, one per busy tick.
pub fn generate_timeline(
    processes: &[ProcessDescriptor],
    algorithm: Algorithm,
    quantum: i64,
) -> Vec<TimelineEntry> {
    match algorithm {
        Algorithm::Fcfs => sequential_timeline(processes, |d| d.arrival_time),
        Algorithm::Sjf => sequential_timeline(processes, |d| d.burst_time),
        Algorithm::RoundRobin => round_robin_timeline(processes, quantum),
    }
}

/// Timeline for the non-preemptive disciplines.
///
/// Both run processes back to back in a single stable sort order; only
/// the sort key differs (arrival time for FCFS, burst time for SJF).
fn sequential_timeline<K>(processes: &[ProcessDescriptor], key: K) -> Vec<TimelineEntry>
where
    K: Fn(&ProcessDescriptor) -> i64,
{
    let mut entries = Vec::new();
    let mut clock: i64 = 0;

    let mut order: Vec<&ProcessDescriptor> = processes.iter().collect();
    order.sort_by_key(|d| key(d));

    for descriptor in order {
        let start = clock.max(descriptor.arrival_time);
        for tick in start..start + descriptor.burst_time {
            entries.push(TimelineEntry::executing(tick, &descriptor.pid));
        }
        clock = start + descriptor.burst_time;
    }

    entries
}

/// Timeline for Round-Robin: replays the slice schedule tick by tick.
fn round_robin_timeline(processes: &[ProcessDescriptor], quantum: i64) -> Vec<TimelineEntry> {
    let mut entries = Vec::new();
    let mut clock: i64 = 0;

    let mut pending: Vec<usize> = (0..processes.len()).collect();
    let mut ready: VecDeque<usize> = VecDeque::new();
    let mut remaining: Vec<i64> = processes.iter().map(|d| d.burst_time).collect();

    while !pending.is_empty() || !ready.is_empty() {
        admit_arrivals(processes, &mut pending, &mut ready, clock);

        let Some(idx) = ready.pop_front() else {
            clock += 1;
            continue;
        };

        let slice = quantum.min(remaining[idx]);
        for tick in clock..clock + slice {
            entries.push(TimelineEntry::executing(tick, &processes[idx].pid));
        }
        clock += slice;
        remaining[idx] -= slice;

        admit_arrivals(processes, &mut pending, &mut ready, clock);

        if remaining[idx] > 0 {
            ready.push_back(idx);
        }
    }

    entries
}

fn admit_arrivals(
    processes: &[ProcessDescriptor],
    pending: &mut Vec<usize>,
    ready: &mut VecDeque<usize>,
    clock: i64,
) {
    let mut i = 0;
    while i < pending.len() {
        if processes[pending[i]].arrival_time <= clock {
            ready.push_back(pending.remove(i));
        } else {
            i += 1;
        }
    }
}
