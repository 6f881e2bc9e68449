//! Circuit model and resistance calculator
//!
//! A circuit is a list of resistors in input order plus one trailing
//! capacitor. The capacitor only appears in the drawing; totals are computed
//! over the resistors.

mod calculator;
mod error;

pub use calculator::{compute_total, compute_total_for_tag, compute_total_with, ZeroBranchPolicy};
pub use error::CircuitError;

use std::fmt;
use std::str::FromStr;

/// How the resistors are connected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topology {
    Series,
    Parallel,
}

impl Topology {
    /// Lowercase tag as accepted by `FromStr`
    pub fn as_str(&self) -> &'static str {
        match self {
            Topology::Series => "series",
            Topology::Parallel => "parallel",
        }
    }

    /// Capitalized name used in titles
    pub fn title(&self) -> &'static str {
        match self {
            Topology::Series => "Series",
            Topology::Parallel => "Parallel",
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topology {
    type Err = CircuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "series" => Ok(Topology::Series),
            "parallel" => Ok(Topology::Parallel),
            other => Err(CircuitError::InvalidTopology(other.to_string())),
        }
    }
}

/// A drawable part of the circuit
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    /// Resistor with its 1-based position in the input
    Resistor { index: usize, ohms: f64 },
    Capacitor,
}

impl Component {
    /// Text drawn next to the component symbol
    pub fn label(&self) -> String {
        match self {
            Component::Resistor { index, ohms } => format!("R{} = {}Ω", index, ohms),
            Component::Capacitor => "C".to_string(),
        }
    }
}

/// Resistor values plus the way they are wired
#[derive(Debug, Clone, PartialEq)]
pub struct Circuit {
    pub resistances: Vec<f64>,
    pub topology: Topology,
}

impl Circuit {
    pub fn new(resistances: Vec<f64>, topology: Topology) -> Self {
        Self {
            resistances,
            topology,
        }
    }

    /// Resistors in input order followed by exactly one capacitor
    pub fn components(&self) -> Vec<Component> {
        self.resistances
            .iter()
            .enumerate()
            .map(|(i, &ohms)| Component::Resistor {
                index: i + 1,
                ohms,
            })
            .chain(std::iter::once(Component::Capacitor))
            .collect()
    }

    /// Equivalent resistance under the given zero-branch policy
    pub fn total(&self, policy: ZeroBranchPolicy) -> Result<f64, CircuitError> {
        compute_total_with(&self.resistances, self.topology, policy)
    }
}
