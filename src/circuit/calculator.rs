//! Equivalent resistance of series and parallel networks

use serde::Deserialize;

use super::{CircuitError, Topology};

/// Treatment of zero-ohm branches in a parallel network
///
/// A zero-ohm branch shorts a parallel network, so the physical total is
/// 0 Ω. `Exclude` leaves such branches out of the reciprocal sum instead,
/// which overstates the total; it stays the default until the owner of the
/// calculator settles which behavior is wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ZeroBranchPolicy {
    /// Skip zero-ohm branches when summing reciprocals
    #[default]
    Exclude,
    /// A zero-ohm branch shorts the network: total is 0 Ω
    Short,
}

/// Total resistance with the default zero-branch policy
pub fn compute_total(resistances: &[f64], topology: Topology) -> Result<f64, CircuitError> {
    compute_total_with(resistances, topology, ZeroBranchPolicy::default())
}

/// Total resistance for a topology given as a tag ("series" or "parallel")
pub fn compute_total_for_tag(resistances: &[f64], tag: &str) -> Result<f64, CircuitError> {
    compute_total(resistances, tag.parse()?)
}

/// Total resistance with an explicit zero-branch policy
pub fn compute_total_with(
    resistances: &[f64],
    topology: Topology,
    policy: ZeroBranchPolicy,
) -> Result<f64, CircuitError> {
    if resistances.is_empty() {
        return Err(CircuitError::EmptyCircuit);
    }

    match topology {
        Topology::Series => Ok(resistances.iter().sum()),
        Topology::Parallel => {
            let zero_branches = resistances.iter().filter(|&&r| r == 0.0).count();
            if zero_branches > 0 {
                match policy {
                    ZeroBranchPolicy::Short => return Ok(0.0),
                    ZeroBranchPolicy::Exclude => tracing::warn!(
                        zero_branches,
                        "zero-ohm branches excluded from parallel total; the short is not reflected"
                    ),
                }
            }

            let conductance: f64 = resistances
                .iter()
                .filter(|&&r| r != 0.0)
                .map(|r| 1.0 / r)
                .sum();
            if conductance == 0.0 {
                return Err(CircuitError::DivisionByZero);
            }
            Ok(1.0 / conductance)
        }
    }
}
