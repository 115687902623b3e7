//! Classical single-processor CPU scheduling simulator.
//!
//! Simulates First-Come-First-Served, batch Shortest-Job-First and
//! preemptive Round-Robin over a fixed set of synthetic processes,
//! producing a chronological event log, per-process statistics, and a
//! per-tick execution timeline for driving animations. A teaching tool:
//! time is an integer clock advanced by the algorithms, never wall-clock
//! time, and no real concurrency is involved.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessRecord`, `ProcessDescriptor`,
//!   `EventLogEntry`, `TimelineEntry`
//! - **`algorithms`**: The three disciplines and the `Algorithm` selector
//! - **`scheduler`**: The caller-owned `Simulation` run object, the
//!   one-shot `simulate` pipeline, and post-run statistics
//! - **`timeline`**: Standalone per-tick timeline recomputation
//! - **`validation`**: Input integrity checks (duplicate pids, bad bursts)
//! - **`workload`**: Random synthetic batches for demos and tests
//!
//! # Example
//!
//! ```
//! use schedsim::{simulate, ProcessDescriptor, SimulationRequest};
//!
//! let request = SimulationRequest::new(
//!     vec![
//!         ProcessDescriptor::new("P1", 0, 4),
//!         ProcessDescriptor::new("P2", 1, 2),
//!     ],
//!     "rr",
//! )
//! .with_quantum(2);
//!
//! let output = simulate(&request).expect("valid request");
//! assert_eq!(output.total_time, 6);
//! assert_eq!(output.summary.terminated_count, 2);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

pub mod algorithms;
pub mod models;
pub mod scheduler;
pub mod timeline;
pub mod validation;
pub mod workload;

pub use algorithms::{Algorithm, UnsupportedAlgorithm, DEFAULT_QUANTUM};
pub use models::{
    EventLogEntry, EventSource, EventState, ProcessDescriptor, ProcessRecord, ProcessState,
    TimelineEntry,
};
pub use scheduler::{
    simulate, ProcessStats, RunSummary, Simulation, SimulationError, SimulationOutput,
    SimulationRequest,
};
pub use timeline::generate_timeline;
pub use validation::{validate_processes, validate_quantum, ValidationError, ValidationErrorKind};
pub use workload::WorkloadGenerator;
