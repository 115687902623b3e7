//! Run orchestration and statistics.
//!
//! Provides the caller-owned [`Simulation`] run object, the one-shot
//! [`simulate`] pipeline, and the post-run statistics projections.
//!
//! # Orchestration
//!
//! `Simulation` holds one batch of records and dispatches a discipline
//! over them; `simulate` wraps the whole load-validate-run-project cycle
//! behind a plain request/response pair for transport layers.
//!
//! # Statistics
//!
//! `ProcessStats` and `RunSummary` compute standard metrics: waiting
//! time, turnaround time, processor utilization.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

mod simulation;
mod stats;

pub use simulation::{simulate, Simulation, SimulationError, SimulationOutput, SimulationRequest};
pub use stats::{ProcessStats, RunSummary};
