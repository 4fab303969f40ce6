/// Stopping criteria for the steady-state temperature solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Relative change between iterates, in percent, below which the solve has converged.
    pub max_error_percent: f64,

    /// Maximum iteration count.
    ///
    /// At least one iteration always runs.
    pub max_iters: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_error_percent: 1e-6,
            max_iters: 100,
        }
    }
}
