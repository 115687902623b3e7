//! First-Come-First-Served scheduling.
//!
//! Non-preemptive: processes run to completion in arrival order. The
//! sort is stable, so processes with equal arrival times keep their
//! input order; no other tie-break exists. When the next process has
//! not arrived yet the clock jumps forward silently, leaving an idle
//! gap with no events.

use crate::models::{EventLogEntry, ProcessRecord};

use super::run_to_completion;

/// Schedules every record in arrival order, mutating records in place.
///
/// Returns the chronological event log and the final clock value.
pub fn schedule(processes: &mut [ProcessRecord]) -> (Vec<EventLogEntry>, i64) {
    let mut log = Vec::new();
    let mut clock: i64 = 0;

    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&i| processes[i].arrival_time);

    for idx in order {
        let record = &mut processes[idx];
        if clock < record.arrival_time {
            // Idle gap: nothing has arrived, jump to the next arrival.
            clock = record.arrival_time;
        }
        clock = run_to_completion(record, clock, &mut log);
    }

    (log, clock)
}
