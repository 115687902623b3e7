//! Input validation for simulation runs.
//!
//! Checks structural integrity of a process batch before any algorithm
//! mutates state. Detects:
//! - Duplicate pids
//! - Empty pids
//! - Non-positive burst times
//! - Negative arrival times
//!
//! All violations are collected and reported together, not just the
//! first. A separate check covers the Round-Robin quantum, which only
//! applies when that discipline is selected.

use std::collections::HashSet;
use std::fmt;

use crate::models::ProcessDescriptor;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same pid.
    DuplicatePid,
    /// A process has an empty pid.
    EmptyPid,
    /// A burst time is zero or negative.
    NonPositiveBurst,
    /// An arrival time is negative.
    NegativeArrival,
    /// The Round-Robin quantum is zero or negative.
    InvalidQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process batch before a run.
///
/// Checks:
/// 1. Every pid is non-empty
/// 2. No two processes share a pid
/// 3. Every burst time is at least one tick
/// 4. No arrival time is negative
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[ProcessDescriptor]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut pids = HashSet::new();

    for descriptor in processes {
        if descriptor.pid.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyPid,
                "Process has an empty pid",
            ));
        } else if !pids.insert(descriptor.pid.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("Duplicate pid: {}", descriptor.pid),
            ));
        }

        if descriptor.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    descriptor.pid, descriptor.burst_time
                ),
            ));
        }

        if descriptor.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    descriptor.pid, descriptor.arrival_time
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a Round-Robin quantum: it must be a positive tick count.
pub fn validate_quantum(quantum: i64) -> Result<(), ValidationError> {
    if quantum > 0 {
        Ok(())
    } else {
        Err(ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Quantum must be positive, got {quantum}"),
        ))
    }
}
