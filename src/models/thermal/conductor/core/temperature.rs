//! Steady-state conductor temperature for a given current.
//!
//! The temperature is found with a modified secant method: each iteration
//! perturbs the current iterate by a fixed fraction and uses the two ratings
//! to estimate the slope of `rating(T) − I`. Iterates are tracked in degrees
//! Celsius, and the relative change between iterates is the stopping measure.
//!
//! When both trial temperatures give the same residual the slope estimate is
//! zero and the iterate is left unchanged. A zero change would otherwise read
//! as convergence, so a nonzero residual at that point is reported as
//! [`Status::Stalled`].

mod config;
mod error;

pub use config::SolverConfig;
pub use error::TemperatureError;

use uom::si::{
    electric_current::ampere,
    f64::{ElectricCurrent, ThermodynamicTemperature},
    thermodynamic_temperature::degree_celsius,
};

use super::HeatBalance;

/// Initial iterate offset above ambient, in °C.
const SEED_RISE: f64 = 5.0;

/// Fractional perturbation used to estimate the residual slope.
const PERTURBATION: f64 = 0.1;

/// Relative change reported before the first update, in percent.
const INITIAL_ERROR_PERCENT: f64 = 100.0;

/// Outcome of a steady-state temperature solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The relative change fell within the configured tolerance.
    Converged,

    /// The iteration limit was reached first.
    MaxIters,

    /// The slope estimate vanished while the residual was nonzero.
    ///
    /// This happens when both trial temperatures lie where no current holds
    /// the conductor, e.g. below ambient or where solar gain exceeds the
    /// losses. The final iterate is not a solution.
    Stalled,
}

/// Result of a steady-state temperature solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureSolution {
    /// Final iterate.
    pub temperature: ThermodynamicTemperature,

    /// Relative change of the final update, in percent.
    pub error_percent: f64,

    /// Iterations performed.
    pub iters: usize,

    /// How the iteration ended.
    pub status: Status,
}

impl TemperatureSolution {
    /// Returns `true` if the iteration met the tolerance on a real update.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }
}

/// Snapshot of one secant iteration, passed to the solver observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration number, starting at 1.
    pub iter: usize,

    /// Iterate at the start of the iteration.
    pub temperature: ThermodynamicTemperature,

    /// `rating(temperature) − I`.
    pub residual: ElectricCurrent,

    /// Perturbed iterate used for the slope estimate.
    pub perturbed: ThermodynamicTemperature,

    /// `rating(perturbed) − I`.
    pub perturbed_residual: ElectricCurrent,

    /// Iterate produced by this iteration.
    pub next: ThermodynamicTemperature,

    /// Relative change after this iteration, in percent.
    pub error_percent: f64,
}

/// Solves for the conductor temperature at which `current` is the thermal rating.
///
/// Trial temperatures with no valid rating count as a rating of zero, so the
/// iteration can pass through them. The observer is called once per
/// iteration, after the update.
///
/// # Errors
///
/// Returns [`TemperatureError::InvalidCurrent`] if `current` is negative or
/// not finite, and [`TemperatureError::NonFinite`] if an iterate diverges.
pub fn steady_state_temperature(
    balance: &HeatBalance<'_>,
    current: ElectricCurrent,
    config: &SolverConfig,
    mut observer: impl FnMut(&Event),
) -> Result<TemperatureSolution, TemperatureError> {
    let target = current.get::<ampere>();
    if !target.is_finite() || target < 0.0 {
        return Err(TemperatureError::InvalidCurrent { current });
    }

    let residual = |t: f64| balance.rating_or_zero_at(celsius(t)) - current;

    let mut t = balance.environment().ambient.get::<degree_celsius>() + SEED_RISE;
    let mut error_percent = INITIAL_ERROR_PERCENT;
    let mut iters = 0;

    let stalled = loop {
        iters += 1;

        let previous = t;
        let perturbed = t * (1.0 + PERTURBATION);
        let f = residual(t);
        let f_perturbed = residual(perturbed);

        let flat = f_perturbed == f;
        if !flat {
            t -= (PERTURBATION * t * f.value) / (f_perturbed.value - f.value);
        }

        if !t.is_finite() {
            return Err(TemperatureError::NonFinite {
                iter: iters,
                previous: celsius(previous),
            });
        }

        if t != 0.0 {
            error_percent = ((t - previous) / t).abs() * 100.0;
        }

        observer(&Event {
            iter: iters,
            temperature: celsius(previous),
            residual: f,
            perturbed: celsius(perturbed),
            perturbed_residual: f_perturbed,
            next: celsius(t),
            error_percent,
        });

        if error_percent <= config.max_error_percent || iters >= config.max_iters {
            break flat && f.value != 0.0;
        }
    };

    let status = if stalled {
        Status::Stalled
    } else if error_percent <= config.max_error_percent {
        Status::Converged
    } else {
        Status::MaxIters
    };

    Ok(TemperatureSolution {
        temperature: celsius(t),
        error_percent,
        iters,
        status,
    })
}

fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}
