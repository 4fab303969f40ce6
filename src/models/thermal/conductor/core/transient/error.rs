use thiserror::Error;
use twine_solvers::transient::euler;
use uom::si::f64::{ThermodynamicTemperature, Time};

use crate::models::thermal::conductor::core::TemperatureError;

/// Errors that can occur during transient calculations.
#[derive(Debug, Error)]
pub enum TransientError {
    /// A steady-state temperature solve failed.
    #[error("steady-state temperature solve failed")]
    Temperature(#[from] TemperatureError),

    /// The forward-Euler integrator failed.
    #[error("forward-Euler integration failed")]
    Integration(#[from] euler::Error),

    /// The integrated temperature or net heating rate became non-finite.
    #[error("temperature diverged at step {step}")]
    NonFinite {
        /// Step at which the value became non-finite.
        step: usize,

        /// Last finite temperature.
        previous: ThermodynamicTemperature,
    },

    /// The final steady state is colder than the initial one.
    ///
    /// Settling time is only defined for a conductor that heats up.
    #[error("settling requires a rising temperature: {initial:?} to {target:?}")]
    CoolingTransient {
        initial: ThermodynamicTemperature,
        target: ThermodynamicTemperature,
    },

    /// The net heating rate turned negative before the final temperature was reached.
    #[error("heating stalled at {temperature:?} after {elapsed:?}")]
    Stalled {
        temperature: ThermodynamicTemperature,
        elapsed: Time,
    },

    /// The requested number of steps exceeds the configured limit.
    #[error("transient needs more than {max_steps} steps")]
    MaxSteps {
        max_steps: usize,

        /// Simulated time covered before the limit was hit.
        elapsed: Time,
    },
}
