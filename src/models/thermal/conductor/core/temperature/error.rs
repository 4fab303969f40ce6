use thiserror::Error;
use uom::si::f64::{ElectricCurrent, ThermodynamicTemperature};

/// Errors that can occur while solving for a steady-state temperature.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TemperatureError {
    /// The target current is negative or not finite.
    #[error("target current must be finite and non-negative: {current:?}")]
    InvalidCurrent { current: ElectricCurrent },

    /// The secant update produced a non-finite temperature.
    #[error("temperature diverged at iteration {iter} from {previous:?}")]
    NonFinite {
        /// Iteration at which the iterate became non-finite.
        iter: usize,

        /// Last finite iterate.
        previous: ThermodynamicTemperature,
    },
}
