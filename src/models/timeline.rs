//! Per-tick execution timeline records.

use serde::{Deserialize, Serialize};

use super::ProcessState;

/// One tick of processor occupancy.
///
/// A timeline is a list of these, one per tick the processor was busy,
/// ordered by time. Idle ticks produce no entry, so gaps in `time` mark
/// idle periods. Consumers step through the list to animate a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Simulated tick.
    pub time: i64,
    /// Pid of the process holding the processor during this tick.
    pub process: String,
    /// Always [`ProcessState::Executing`]; carried for rendering.
    pub state: ProcessState,
}

impl TimelineEntry {
    /// Entry for one busy tick.
    pub fn executing(time: i64, pid: impl Into<String>) -> Self {
        Self {
            time,
            process: pid.into(),
            state: ProcessState::Executing,
        }
    }
}
