//! Input validation for simulation requests.
//!
//! Checks process records and policy parameters before any PCB is built.
//! Detects:
//! - Empty or duplicate process IDs
//! - Negative arrival times
//! - Zero or negative burst times
//! - Non-positive round-robin quanta
//! - Malformed aging parameters
//! - Time values that would overflow the simulation clock
//!
//! Invalid input is reported, never corrected: silently clamping a burst or
//! an arrival would produce misleading statistics.

use std::collections::HashSet;

use crate::models::ProcessSpec;
use crate::scheduler::Policy;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process has an empty ID.
    EmptyId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requires no (or negative) service time.
    NonPositiveBurst,
    /// Round-robin quantum is zero or negative.
    InvalidQuantum,
    /// Aging interval or step is zero or negative.
    InvalidAging,
    /// A completion time would exceed `i64::MAX`.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the process list.
///
/// Checks:
/// 1. Every process has a non-empty ID
/// 2. No duplicate process IDs
/// 3. All arrivals are non-negative
/// 4. All bursts are positive
/// 5. No completion time can exceed `i64::MAX`: each `arrival + burst`
///    and the worst-case horizon `max(arrival) + sum(burst)` must fit
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[ProcessSpec]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut pids = HashSet::new();

    for (index, p) in processes.iter().enumerate() {
        if p.pid.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Process at index {index} has an empty ID"),
            ));
        } else if !pids.insert(p.pid.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.pid),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' has negative arrival {}", p.pid, p.arrival),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has non-positive burst {}", p.pid, p.burst),
            ));
        }

        if p.arrival.checked_add(p.burst).is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::TimeOverflow,
                format!(
                    "Process '{}' cannot finish: arrival {} + burst {} overflows",
                    p.pid, p.arrival, p.burst
                ),
            ));
        }
    }

    // The CPU only idles until the next arrival, so no completion lies past
    // max(arrival) + sum(burst)
    if errors.is_empty() {
        let latest_arrival = processes.iter().map(|p| p.arrival).max().unwrap_or(0);
        let horizon = processes
            .iter()
            .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst));
        if horizon.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::TimeOverflow,
                format!(
                    "Schedule horizon overflows: latest arrival {latest_arrival} plus total burst exceeds {}",
                    i64::MAX
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

/// Validates policy parameters.
pub fn validate_policy(policy: &Policy) -> ValidationResult {
    let mut errors = Vec::new();

    match policy {
        Policy::RoundRobin { quantum } if *quantum <= 0 => {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantum,
                format!("Round-robin quantum must be positive, got {quantum}"),
            ));
        }
        Policy::Priority { aging: Some(aging) } => {
            if aging.interval <= 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidAging,
                    format!("Aging interval must be positive, got {}", aging.interval),
                ));
            }
            if aging.step <= 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidAging,
                    format!("Aging step must be positive, got {}", aging.step),
                ));
            }
        }
        _ => {}
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a policy together with its process list, collecting errors
/// from both.
pub fn validate_input(processes: &[ProcessSpec], policy: &Policy) -> ValidationResult {
    let mut errors = validate_policy(policy).err().unwrap_or_default();
    if let Err(process_errors) = validate_processes(processes) {
        errors.extend(process_errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
