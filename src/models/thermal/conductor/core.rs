//! Heat balance, rating, and temperature solvers for a bare conductor.
//!
//! Every calculation here is a pure function of a [`Conductor`] and its
//! [`Environment`]. A [`HeatBalance`] binds the two and caches the solar
//! gain, which is the only term that does not depend on conductor temperature.

mod heat_balance;
mod input;
mod rating;
mod temperature;
mod transient;

#[cfg(test)]
pub(super) mod test_support;

pub use heat_balance::{HeatBalance, HeatBalanceTerms};
pub use input::{Conductor, Environment};
pub use rating::{RatingError, rating, rating_or_zero};
pub use temperature::{
    Event, SolverConfig, Status, TemperatureError, TemperatureSolution, steady_state_temperature,
};
pub use transient::{
    CurrentStep, Settling, Trajectory, TransientConfig, TransientError, settling_time,
    temperature_trajectory,
};
