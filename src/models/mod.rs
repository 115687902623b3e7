//! Scheduling domain models.
//!
//! Core data types for one simulation run: the processes being
//! scheduled, the chronological event log the disciplines narrate into,
//! and the per-tick timeline that drives animations.
//!
//! # State Machine
//!
//! | From | To | When |
//! |------|----|------|
//! | CREATED | READY | admitted at its arrival tick |
//! | READY | EXECUTING | dispatched |
//! | EXECUTING | TERMINATED | remaining work reaches zero |
//! | EXECUTING | WAITING | quantum expired with work left (Round-Robin) |
//! | WAITING | EXECUTING | dispatched again from the ready queue |

mod event;
mod process;
mod timeline;

pub use event::{EventLogEntry, EventSource, EventState};
pub use process::{ProcessDescriptor, ProcessRecord, ProcessState};
pub use timeline::TimelineEntry;
