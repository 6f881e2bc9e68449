//! Error types for circuit evaluation

use thiserror::Error;

/// Errors that can occur while evaluating a circuit
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CircuitError {
    /// Topology tag other than "series" or "parallel"
    #[error("invalid circuit type '{0}': choose either 'series' or 'parallel'")]
    InvalidTopology(String),

    /// Parallel circuit whose reciprocal sum is zero
    #[error("division by zero: a parallel circuit needs at least one non-zero resistance")]
    DivisionByZero,

    /// No resistors to evaluate
    #[error("circuit has no resistors")]
    EmptyCircuit,

    /// More resistors than a schematic may hold
    #[error("circuit has {count} resistors, at most {limit} can be drawn")]
    TooManyResistors { count: usize, limit: usize },
}
