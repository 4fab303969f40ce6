use crate::models::thermal::conductor::core::SolverConfig;

/// Configuration for transient calculations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransientConfig {
    /// Configuration for the initial and final steady-state solves.
    pub solver: SolverConfig,

    /// Maximum number of integration steps.
    ///
    /// Bounds both the trajectory length and the settling-time march.
    pub max_steps: usize,
}

impl Default for TransientConfig {
    fn default() -> Self {
        Self {
            solver: SolverConfig::default(),
            max_steps: 1_000_000,
        }
    }
}
