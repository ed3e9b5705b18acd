//! Crate error type.

use std::fmt;
use thiserror::Error;

use crate::validation::ValidationError;

/// Simulation result alias.
pub type SimResult<T> = Result<T, SimError>;

/// Errors reported by the simulator and workload loading.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("invalid input: {}", ErrorList(.0))]
    InvalidInput(Vec<ValidationError>),

    #[error("unknown policy '{0}'. Valid: fcfs, sjf, rr, priority")]
    UnknownPolicy(String),

    #[error("failed to read workload: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse workload: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SimError {
    /// Validation errors carried by `InvalidInput`, empty otherwise.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
            _ => &[],
        }
    }
}

struct ErrorList<'a>(&'a [ValidationError]);

impl fmt::Display for ErrorList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            f.write_str(&err.message)?;
        }
        Ok(())
    }
}
