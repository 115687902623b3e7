//! Shortest-Job-First scheduling, batch variant.
//!
//! The whole batch is sorted once by burst time before anything runs;
//! arrival times only gate when the next process in that fixed order may
//! start, they never reorder it. This is deliberate batch semantics, not
//! the arrival-aware greedy SJF from textbooks: the processor idles
//! waiting for the next process in burst order even while longer jobs
//! are already available. The sort is stable, so equal bursts keep input
//! order.
//!
//! SJF narrates its batch decisions into the event log as SYSTEM
//! entries: the loaded inventory, the computed order, and a closing
//! summary. Animation front-ends replay these verbatim.

use crate::models::{EventLogEntry, EventState, ProcessRecord};

use super::run_to_completion;

/// Schedules every record in burst order, mutating records in place.
///
/// Returns the chronological event log and the final clock value. An
/// empty batch produces an empty log, skipping the narration.
pub fn schedule(processes: &mut [ProcessRecord]) -> (Vec<EventLogEntry>, i64) {
    let mut log = Vec::new();
    let mut clock: i64 = 0;

    if processes.is_empty() {
        return (log, clock);
    }

    log.push(EventLogEntry::system(clock, "SJF: loading all processes"));
    let inventory = processes
        .iter()
        .map(|p| format!("{}(arrival: {}, burst: {})", p.pid, p.arrival_time, p.burst_time))
        .collect::<Vec<_>>()
        .join(", ");
    log.push(EventLogEntry::system(clock, format!("Processes: {inventory}")));

    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&i| processes[i].burst_time);

    log.push(EventLogEntry::system(clock, "Sorting by burst time"));
    let planned = order
        .iter()
        .map(|&i| format!("{}(burst: {})", processes[i].pid, processes[i].burst_time))
        .collect::<Vec<_>>()
        .join(" -> ");
    log.push(EventLogEntry::system(clock, format!("Final order: {planned}")));
    log.push(EventLogEntry::system(clock, "Starting SJF execution"));

    for (position, &idx) in order.iter().enumerate() {
        let record = &mut processes[idx];
        log.push(EventLogEntry::for_process(
            clock,
            format!(
                "Selected: {} (burst: {}) - position {}",
                record.pid,
                record.burst_time,
                position + 1
            ),
            &record.pid,
            EventState::Selected,
        ));

        if clock < record.arrival_time {
            // Next in burst order has not arrived; the processor idles.
            log.push(EventLogEntry::for_process(
                clock,
                format!("Waiting for arrival of {} (t={})", record.pid, record.arrival_time),
                &record.pid,
                EventState::Waiting,
            ));
            clock = record.arrival_time;
        }

        clock = run_to_completion(record, clock, &mut log);
    }

    log.push(EventLogEntry::system(clock, "SJF execution summary"));
    log.push(EventLogEntry::system(clock, format!("Order executed: {planned}")));

    (log, clock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventSource;

    fn records(rows: &[(&str, i64, i64)]) -> Vec<ProcessRecord> {
        rows.iter()
            .map(|&(pid, arrival, burst)| ProcessRecord::new(pid, arrival, burst, 0))
            .collect()
    }

    fn executing_pids(log: &[EventLogEntry]) -> Vec<String> {
        log.iter()
            .filter(|e| e.state == EventState::Executing)
            .filter_map(|e| match &e.process {
                EventSource::Process(pid) => Some(pid.clone()),
                EventSource::System => None,
            })
            .collect()
    }

    #[test]
    fn test_shorter_burst_runs_first_despite_later_arrival() {
        // P2 is shorter, so it leads the batch order; the processor
        // idles [0, 1) until P2 arrives, then P1 runs [5, 13).
        let mut processes = records(&[("P1", 0, 8), ("P2", 1, 4)]);
        let (log, final_time) = schedule(&mut processes);

        assert_eq!(executing_pids(&log), vec!["P2", "P1"]);
        assert_eq!(processes[1].start_time, Some(1));
        assert_eq!(processes[1].completion_time, Some(5));
        assert_eq!(processes[0].start_time, Some(5));
        assert_eq!(processes[0].completion_time, Some(13));
        assert_eq!(final_time, 13);

        let waited: Vec<&EventLogEntry> = log
            .iter()
            .filter(|e| e.state == EventState::Waiting)
            .collect();
        assert_eq!(waited.len(), 1);
        assert_eq!(waited[0].process, EventSource::Process("P2".to_string()));
        assert_eq!(waited[0].time, 0);
    }

    #[test]
    fn test_batch_order_idles_past_available_work() {
        // Greedy SJF would run P1 at t=0; batch SJF idles until the
        // shortest job arrives at t=5, then makes P1 wait its turn.
        let mut processes = records(&[("P1", 0, 10), ("P2", 5, 2)]);
        let (log, final_time) = schedule(&mut processes);

        assert_eq!(executing_pids(&log), vec!["P2", "P1"]);
        assert_eq!(processes[1].start_time, Some(5));
        assert_eq!(processes[1].completion_time, Some(7));
        assert_eq!(processes[0].start_time, Some(7));
        assert_eq!(final_time, 17);
    }

    #[test]
    fn test_equal_bursts_keep_input_order() {
        let mut processes = records(&[("P1", 0, 3), ("P2", 0, 3), ("P3", 0, 1)]);
        let (log, _) = schedule(&mut processes);
        assert_eq!(executing_pids(&log), vec!["P3", "P1", "P2"]);
    }

    #[test]
    fn test_narration_frames_the_run() {
        let mut processes = records(&[("P1", 0, 2)]);
        let (log, final_time) = schedule(&mut processes);

        assert_eq!(log[0], EventLogEntry::system(0, "SJF: loading all processes"));
        assert_eq!(
            log[1],
            EventLogEntry::system(0, "Processes: P1(arrival: 0, burst: 2)")
        );
        assert_eq!(log[2], EventLogEntry::system(0, "Sorting by burst time"));
        assert_eq!(log[3], EventLogEntry::system(0, "Final order: P1(burst: 2)"));
        assert_eq!(log[4], EventLogEntry::system(0, "Starting SJF execution"));
        assert_eq!(log[5].state, EventState::Selected);
        assert_eq!(
            log[log.len() - 1],
            EventLogEntry::system(final_time, "Order executed: P1(burst: 2)")
        );
    }

    #[test]
    fn test_selection_entry_precedes_admission() {
        let mut processes = records(&[("P1", 0, 4), ("P2", 0, 2)]);
        let (log, _) = schedule(&mut processes);

        let positions = |state: EventState| -> Vec<usize> {
            log.iter()
                .enumerate()
                .filter(|(_, e)| e.state == state)
                .map(|(i, _)| i)
                .collect()
        };
        let selected = positions(EventState::Selected);
        let ready = positions(EventState::Ready);
        assert_eq!(selected.len(), 2);
        assert!(selected[0] < ready[0]);
        assert!(selected[1] < ready[1]);

        let first = &log[selected[0]];
        assert_eq!(first.action, "Selected: P2 (burst: 2) - position 1");
    }

    #[test]
    fn test_empty_set_skips_narration() {
        let mut processes: Vec<ProcessRecord> = Vec::new();
        let (log, final_time) = schedule(&mut processes);
        assert!(log.is_empty());
        assert_eq!(final_time, 0);
    }
}
