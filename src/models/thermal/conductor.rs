//! Overhead conductor thermal models.
//!
//! This module provides [`twine_core::Model`] implementations for the IEEE 738
//! heat balance of a bare conductor. The computational core is in the internal
//! [`core`] module; its entry points are re-exported here for callers that
//! need more control than the adapters offer, such as a solver observer.
//!
//! # Models
//!
//! - [`SteadyStateRating`]: conductor temperature in, thermal rating out.
//! - [`SteadyStateTemperature`]: current in, steady-state temperature out.
//! - [`TransientTemperature`]: current step in, temperature trajectory out.
//! - [`SettlingTime`]: current step in, time to reach the new steady state out.
//!
//! # Example
//!
//! ```
//! use jiff::civil::date;
//! use twine_core::Model;
//! use twine_ieee738::{
//!     models::thermal::conductor::{Conductor, Environment, SteadyStateRating},
//!     support::{
//!         constraint::{StrictlyPositive, UnitInterval},
//!         ieee738::{Atmosphere, HeatCapacity, ResistanceModel},
//!         units::{ohms_per_meter, per_kelvin},
//!     },
//! };
//! use uom::si::{
//!     angle::degree,
//!     electric_current::ampere,
//!     f64::{Angle, Length, Ratio, ThermodynamicTemperature, Velocity},
//!     length::meter,
//!     ratio::ratio,
//!     thermodynamic_temperature::degree_celsius,
//!     velocity::meter_per_second,
//! };
//!
//! let celsius = ThermodynamicTemperature::new::<degree_celsius>;
//!
//! let conductor = Conductor {
//!     diameter: StrictlyPositive::new(Length::new::<meter>(0.0281)).unwrap(),
//!     emissivity: UnitInterval::new(Ratio::new::<ratio>(0.8)).unwrap(),
//!     absorptivity: UnitInterval::new(Ratio::new::<ratio>(0.8)).unwrap(),
//!     resistance: ResistanceModel::new(
//!         ohms_per_meter(7.283e-5),
//!         celsius(25.0),
//!         per_kelvin(0.00403),
//!     ),
//!     heat_capacity: HeatCapacity::new(1300.0).unwrap(),
//! };
//!
//! let environment = Environment {
//!     wind_speed: Velocity::new::<meter_per_second>(0.61),
//!     wind_angle: Angle::new::<degree>(90.0),
//!     ambient: celsius(40.0),
//!     elevation: Length::new::<meter>(0.0),
//!     latitude: Angle::new::<degree>(30.0),
//!     conductor_azimuth: Angle::new::<degree>(90.0),
//!     atmosphere: Atmosphere::Clear,
//!     time: date(2023, 6, 10).at(11, 0, 0, 0),
//! };
//!
//! let model = SteadyStateRating::new(conductor, environment);
//! let rating = model.call(&celsius(100.0)).unwrap();
//! assert!(rating.current.get::<ampere>() > 0.0);
//! ```

pub(crate) mod core;

pub use self::core::{
    Conductor, CurrentStep, Environment, Event, HeatBalance, HeatBalanceTerms, RatingError,
    Settling, SolverConfig, Status, TemperatureError, TemperatureSolution, Trajectory,
    TransientConfig, TransientError, rating, rating_or_zero, settling_time,
    steady_state_temperature, temperature_trajectory,
};

use tracing::{debug, trace, warn};
use twine_core::Model;
use uom::si::{
    electric_current::ampere,
    f64::{ElectricCurrent, TemperatureInterval, ThermodynamicTemperature, Time},
    thermodynamic_temperature::degree_celsius,
    time::second,
};

use crate::support::{
    constraint::{Constrained, NonNegative, StrictlyPositive},
    units::LinearResistance,
};

/// Thermal rating together with the heat balance it was computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rating {
    /// Current that holds the conductor at the input temperature.
    pub current: ElectricCurrent,

    /// Heat flux terms at the input temperature.
    pub terms: HeatBalanceTerms,

    /// Conductor resistance at the input temperature.
    pub resistance: LinearResistance,
}

/// Steady-state thermal rating at a given maximum conductor temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteadyStateRating {
    /// Conductor being rated.
    pub conductor: Conductor,

    /// Weather and site conditions.
    pub environment: Environment,
}

impl SteadyStateRating {
    #[must_use]
    pub fn new(conductor: Conductor, environment: Environment) -> Self {
        Self {
            conductor,
            environment,
        }
    }
}

impl Model for SteadyStateRating {
    type Input = ThermodynamicTemperature;
    type Output = Rating;
    type Error = RatingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let balance = HeatBalance::new(&self.conductor, &self.environment);
        let terms = balance.terms_at(*input);
        let resistance = balance.resistance_at(*input);

        match rating(&terms, resistance) {
            Ok(current) => {
                debug!(
                    temperature_c = input.get::<degree_celsius>(),
                    current_a = current.get::<ampere>(),
                    "thermal rating"
                );
                Ok(Rating {
                    current,
                    terms,
                    resistance,
                })
            }
            Err(error) => {
                warn!(
                    temperature_c = input.get::<degree_celsius>(),
                    %error,
                    "no thermal rating at this temperature"
                );
                Err(error)
            }
        }
    }
}

/// Steady-state conductor temperature for a given current.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteadyStateTemperature {
    /// Conductor carrying the input current.
    pub conductor: Conductor,

    /// Weather and site conditions.
    pub environment: Environment,

    /// Secant solver tolerance and iteration limit.
    pub config: SolverConfig,
}

impl SteadyStateTemperature {
    /// Creates the model with the default [`SolverConfig`].
    #[must_use]
    pub fn new(conductor: Conductor, environment: Environment) -> Self {
        Self {
            conductor,
            environment,
            config: SolverConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(self, config: SolverConfig) -> Self {
        Self { config, ..self }
    }
}

impl Model for SteadyStateTemperature {
    type Input = ElectricCurrent;
    type Output = TemperatureSolution;
    type Error = TemperatureError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let balance = HeatBalance::new(&self.conductor, &self.environment);

        let solution = steady_state_temperature(&balance, *input, &self.config, |event: &Event| {
            trace!(
                iter = event.iter,
                temperature_c = event.next.get::<degree_celsius>(),
                error_percent = event.error_percent,
                "secant iteration"
            );
        })
        .inspect_err(|error| warn!(%error, "steady-state temperature solve failed"))?;

        match solution.status {
            Status::Converged => debug!(
                current_a = input.get::<ampere>(),
                temperature_c = solution.temperature.get::<degree_celsius>(),
                iters = solution.iters,
                "steady-state temperature"
            ),
            Status::MaxIters => warn!(
                current_a = input.get::<ampere>(),
                iters = solution.iters,
                error_percent = solution.error_percent,
                "steady-state temperature hit the iteration limit"
            ),
            Status::Stalled => warn!(
                current_a = input.get::<ampere>(),
                temperature_c = solution.temperature.get::<degree_celsius>(),
                iters = solution.iters,
                "steady-state temperature stalled where no current holds the conductor"
            ),
        }

        Ok(solution)
    }
}

/// Conductor temperature over time after a step change in current.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransientTemperature {
    /// Conductor carrying the stepped current.
    pub conductor: Conductor,

    /// Weather and site conditions, held fixed over the transient.
    pub environment: Environment,

    /// Integration time step.
    pub time_step: Constrained<Time, StrictlyPositive>,

    /// Simulated time after the current step.
    pub duration: Constrained<Time, NonNegative>,

    /// Steady-state solver settings and the step limit.
    pub config: TransientConfig,
}

impl TransientTemperature {
    /// Creates the model with the default [`TransientConfig`].
    #[must_use]
    pub fn new(
        conductor: Conductor,
        environment: Environment,
        time_step: Constrained<Time, StrictlyPositive>,
        duration: Constrained<Time, NonNegative>,
    ) -> Self {
        Self {
            conductor,
            environment,
            time_step,
            duration,
            config: TransientConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(self, config: TransientConfig) -> Self {
        Self { config, ..self }
    }
}

impl Model for TransientTemperature {
    type Input = CurrentStep;
    type Output = Trajectory;
    type Error = TransientError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let balance = HeatBalance::new(&self.conductor, &self.environment);

        let trajectory = temperature_trajectory(
            &balance,
            *input,
            self.time_step,
            self.duration,
            &self.config,
        )
        .inspect_err(|error| warn!(%error, "transient temperature failed"))?;

        if !trajectory.initial().converged() {
            warn!(
                status = ?trajectory.initial().status,
                iters = trajectory.initial().iters,
                "initial steady-state temperature did not converge"
            );
        }
        debug!(
            samples = trajectory.len(),
            final_temperature_c = trajectory.last().get::<degree_celsius>(),
            "transient temperature"
        );

        Ok(trajectory)
    }
}

/// Time to reach the new steady-state temperature after a current increase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettlingTime {
    /// Conductor carrying the stepped current.
    pub conductor: Conductor,

    /// Weather and site conditions, held fixed over the transient.
    pub environment: Environment,

    /// Temperature increment of the settling march.
    pub temperature_step: Constrained<TemperatureInterval, StrictlyPositive>,

    /// Steady-state solver settings and the step limit.
    pub config: TransientConfig,
}

impl SettlingTime {
    /// Creates the model with the default [`TransientConfig`].
    #[must_use]
    pub fn new(
        conductor: Conductor,
        environment: Environment,
        temperature_step: Constrained<TemperatureInterval, StrictlyPositive>,
    ) -> Self {
        Self {
            conductor,
            environment,
            temperature_step,
            config: TransientConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(self, config: TransientConfig) -> Self {
        Self { config, ..self }
    }
}

impl Model for SettlingTime {
    type Input = CurrentStep;
    type Output = Settling;
    type Error = TransientError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let balance = HeatBalance::new(&self.conductor, &self.environment);

        let settling = settling_time(&balance, *input, self.temperature_step, &self.config)
            .inspect_err(|error| warn!(%error, "settling time failed"))?;

        for (label, solution) in [("initial", &settling.initial), ("target", &settling.target)] {
            if !solution.converged() {
                warn!(
                    state = label,
                    status = ?solution.status,
                    iters = solution.iters,
                    "steady-state temperature did not converge"
                );
            }
        }
        debug!(
            time_s = settling.time.get::<second>(),
            steps = settling.steps,
            "settling time"
        );

        Ok(settling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::Velocity, temperature_interval::kelvin as delta_kelvin, velocity::meter_per_second,
    };

    use super::core::test_support::{celsius, conductor, june_noon};

    fn amps(value: f64) -> ElectricCurrent {
        ElectricCurrent::new::<ampere>(value)
    }

    #[test]
    fn rating_round_trips_through_temperature() {
        let rating_model = SteadyStateRating::new(conductor(), june_noon());
        let temperature_model = SteadyStateTemperature::new(conductor(), june_noon());

        let rating = rating_model.call(&celsius(100.0)).unwrap();
        let solution = temperature_model.call(&rating.current).unwrap();

        assert_relative_eq!(rating.current.get::<ampere>(), 741.8314046599354, max_relative = 1e-9);
        assert_relative_eq!(
            solution.temperature.get::<degree_celsius>(),
            100.0,
            max_relative = 1e-6
        );

        // The reported terms balance Joule heating.
        let joule = rating.resistance * (rating.current * rating.current);
        assert_relative_eq!(joule.value, rating.terms.net_loss().value, max_relative = 1e-12);
    }

    #[test]
    fn models_are_idempotent() {
        let model = SteadyStateTemperature::new(conductor(), june_noon());

        assert_eq!(model.call(&amps(550.0)).unwrap(), model.call(&amps(550.0)).unwrap());
    }

    #[test]
    fn rating_below_ambient_is_an_error() {
        let model = SteadyStateRating::new(conductor(), june_noon());

        assert!(matches!(
            model.call(&celsius(30.0)),
            Err(RatingError::NegativeHeatBalance { .. })
        ));
    }

    #[test]
    fn iteration_limit_is_reported_not_raised() {
        let model = SteadyStateTemperature::new(conductor(), june_noon()).with_config(SolverConfig {
            max_iters: 1,
            ..SolverConfig::default()
        });

        let solution = model.call(&amps(700.0)).unwrap();

        assert_eq!(solution.iters, 1);
        assert_eq!(solution.status, Status::MaxIters);
    }

    #[test]
    fn stalled_solve_is_not_converged() {
        let still_air = Environment {
            wind_speed: Velocity::new::<meter_per_second>(0.0),
            ..june_noon()
        };
        let model = SteadyStateTemperature::new(conductor(), still_air);

        let solution = model.call(&amps(350.0)).unwrap();

        assert_eq!(solution.status, Status::Stalled);
        assert!(!solution.converged());
        assert_eq!(solution.error_percent, 0.0);
    }

    #[test]
    fn trajectory_and_settling_agree() {
        let step = CurrentStep {
            before: amps(400.0),
            after: amps(741.8314046599354),
        };

        let trajectory = TransientTemperature::new(
            conductor(),
            june_noon(),
            StrictlyPositive::new(Time::new::<second>(10.0)).unwrap(),
            NonNegative::new(Time::new::<second>(14_400.0)).unwrap(),
        )
        .call(&step)
        .unwrap();

        let settling = SettlingTime::new(
            conductor(),
            june_noon(),
            StrictlyPositive::new(TemperatureInterval::new::<delta_kelvin>(0.5)).unwrap(),
        )
        .call(&step)
        .unwrap();

        // Both start from the same steady state.
        assert_eq!(trajectory.initial(), &settling.initial);

        // The trajectory passes within one temperature step of the target no
        // later than the settling march accumulates.
        let threshold = settling.target.temperature - TemperatureInterval::new::<delta_kelvin>(0.5);
        let crossing = trajectory
            .first_time_above(threshold)
            .expect("trajectory should approach the target");
        assert!(crossing <= settling.time);
    }
}
