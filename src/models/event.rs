//! Event log records.
//!
//! Every observable scheduling decision appends one `EventLogEntry` to
//! the run's chronological log: state transitions, batch narration, and
//! selection announcements. Entries are append-only and never reordered;
//! within one tick they appear in the order the simulation made the
//! decisions.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire token for simulator-scoped entries.
const SYSTEM_TOKEN: &str = "SYSTEM";

/// Who an event-log entry is about.
///
/// Either a specific process, or the simulator itself (batch loading,
/// sort announcements, run summaries). Serialized as a bare string, so
/// process entries carry the pid and system entries carry `"SYSTEM"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventSource {
    /// Simulator-scoped narration.
    System,
    /// An entry about one process, tagged by pid.
    Process(String),
}

impl Serialize for EventSource {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            EventSource::System => serializer.serialize_str(SYSTEM_TOKEN),
            EventSource::Process(pid) => serializer.serialize_str(pid),
        }
    }
}

impl<'de> Deserialize<'de> for EventSource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        if token == SYSTEM_TOKEN {
            Ok(EventSource::System)
        } else {
            Ok(EventSource::Process(token))
        }
    }
}

/// State label attached to an event-log entry.
///
/// A superset of [`ProcessState`](super::ProcessState): SELECTED marks a
/// batch-order announcement under SJF, INFO marks simulator narration
/// with no process state behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventState {
    Ready,
    Executing,
    Waiting,
    Terminated,
    Selected,
    Info,
}

/// One entry of the chronological event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLogEntry {
    /// Simulated tick at which the event occurred.
    pub time: i64,
    /// Human-readable description of the decision.
    pub action: String,
    /// Subject of the entry: a pid or the simulator itself.
    pub process: EventSource,
    /// State label for rendering.
    pub state: EventState,
}

impl EventLogEntry {
    /// Entry about one process.
    pub fn for_process(
        time: i64,
        action: impl Into<String>,
        pid: impl Into<String>,
        state: EventState,
    ) -> Self {
        Self {
            time,
            action: action.into(),
            process: EventSource::Process(pid.into()),
            state,
        }
    }

    /// Simulator-scoped narration entry.
    pub fn system(time: i64, action: impl Into<String>) -> Self {
        Self {
            time,
            action: action.into(),
            process: EventSource::System,
            state: EventState::Info,
        }
    }
}
