//! Conductor temperature response to a step change in current.
//!
//! Both calculations start from the steady state at the current before the
//! step and integrate the lumped heat balance `C · dT/dt = R(T)·I² + q_s − q_c − q_r`
//! with forward Euler, using the current after the step. The trajectory steps
//! time and integrates temperature. The settling march steps temperature and
//! integrates time.

mod config;
mod error;
mod problem;
mod trajectory;

pub use config::TransientConfig;
pub use error::TransientError;
pub use trajectory::Trajectory;

use twine_solvers::transient::euler;
use uom::si::{
    f64::{ElectricCurrent, TemperatureInterval, Time},
    ratio::ratio,
    time::second,
};

use crate::support::{
    constraint::{Constrained, NonNegative, StrictlyPositive},
    units::{LinearHeatRate, TemperatureDifference},
};

use super::{HeatBalance, TemperatureSolution, steady_state_temperature};

use self::problem::{NetHeatingModel, TemperatureMarch, ThermalState, TimeMarch};

/// A step change in conductor current.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentStep {
    /// Current carried before the step, at steady state.
    pub before: ElectricCurrent,

    /// Current carried after the step.
    pub after: ElectricCurrent,
}

/// Time for a conductor to heat up to its new steady state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settling {
    /// Accumulated time over the temperature steps.
    pub time: Time,

    /// Number of temperature steps taken.
    pub steps: usize,

    /// Steady state before the current step.
    pub initial: TemperatureSolution,

    /// Steady state after the current step.
    pub target: TemperatureSolution,
}

/// Integrates the conductor temperature over fixed time steps after a current step.
///
/// The trajectory has `floor(duration / time_step) + 1` samples.
///
/// # Errors
///
/// Returns a [`TransientError`] if the initial steady-state solve fails, the
/// step count exceeds [`TransientConfig::max_steps`], or the integration
/// diverges.
pub fn temperature_trajectory(
    balance: &HeatBalance<'_>,
    current: CurrentStep,
    time_step: Constrained<Time, StrictlyPositive>,
    duration: Constrained<Time, NonNegative>,
    config: &TransientConfig,
) -> Result<Trajectory, TransientError> {
    let time_step = time_step.into_inner();
    let count = (duration.into_inner() / time_step).get::<ratio>().floor();

    if count > config.max_steps as f64 {
        return Err(TransientError::MaxSteps {
            max_steps: config.max_steps,
            elapsed: Time::new::<second>(0.0),
        });
    }

    // Bounded above by `max_steps` and never negative.
    let steps = count as usize;

    let initial = steady_state_temperature(balance, current.before, &config.solver, |_| {})?;

    let model = NetHeatingModel::new(balance, current.after);
    let problem = TimeMarch::new(*balance.conductor().heat_capacity);
    let start = ThermalState {
        temperature: initial.temperature,
        elapsed: Time::new::<second>(0.0),
    };

    let mut previous = initial.temperature;
    let mut diverged = None;

    let solution = euler::solve(
        &model,
        &problem,
        start,
        time_step,
        steps,
        |event: &euler::Event<ThermalState, LinearHeatRate>| {
            let temperature = event.snapshot.input.temperature;
            if !temperature.value.is_finite() {
                diverged = Some(TransientError::NonFinite {
                    step: event.step,
                    previous,
                });
                return Some(euler::Action::StopEarly);
            }
            previous = temperature;
            None
        },
    )?;

    if let Some(error) = diverged {
        return Err(error);
    }

    let temperatures = solution
        .history
        .into_iter()
        .map(|snapshot| snapshot.input.temperature)
        .collect();

    Ok(Trajectory::new(time_step, temperatures, initial))
}

/// Estimates the time to heat from the initial to the final steady state.
///
/// Marches the temperature from the initial steady state in fixed
/// increments while it does not exceed the final steady state, accumulating
/// `C / (net heating rate) · ΔT` for each increment. An increment at zero net
/// heating contributes no time.
///
/// # Errors
///
/// Returns a [`TransientError`] if either steady-state solve fails, the
/// final steady state is colder than the initial one, the net heating rate
/// turns negative or non-finite, or the march exceeds
/// [`TransientConfig::max_steps`].
pub fn settling_time(
    balance: &HeatBalance<'_>,
    current: CurrentStep,
    temperature_step: Constrained<TemperatureInterval, StrictlyPositive>,
    config: &TransientConfig,
) -> Result<Settling, TransientError> {
    let initial = steady_state_temperature(balance, current.before, &config.solver, |_| {})?;
    let target = steady_state_temperature(balance, current.after, &config.solver, |_| {})?;

    if target.temperature < initial.temperature {
        return Err(TransientError::CoolingTransient {
            initial: initial.temperature,
            target: target.temperature,
        });
    }

    if target.temperature == initial.temperature {
        return Ok(Settling {
            time: Time::new::<second>(0.0),
            steps: 0,
            initial,
            target,
        });
    }

    let temperature_step = temperature_step.into_inner();

    // The march passes the target after `floor(span / step) + 1` increments.
    // One more absorbs rounding in the accumulated temperature.
    let span = target.temperature.minus(initial.temperature);
    let needed = (span / temperature_step).get::<ratio>().floor() + 2.0;
    let steps = if needed < config.max_steps as f64 {
        needed as usize
    } else {
        config.max_steps
    };

    let model = NetHeatingModel::new(balance, current.after);
    let problem = TemperatureMarch::new(*balance.conductor().heat_capacity);
    let start = ThermalState {
        temperature: initial.temperature,
        elapsed: Time::new::<second>(0.0),
    };

    let mut failure = None;

    let solution = euler::solve(
        &model,
        &problem,
        start,
        temperature_step,
        steps,
        |event: &euler::Event<ThermalState, LinearHeatRate>| {
            let state = event.snapshot.input;
            let net = event.snapshot.output;

            if state.temperature > target.temperature {
                return Some(euler::Action::StopEarly);
            }
            if !net.value.is_finite() {
                failure = Some(TransientError::NonFinite {
                    step: event.step,
                    previous: state.temperature,
                });
            } else if net.value < 0.0 {
                failure = Some(TransientError::Stalled {
                    temperature: state.temperature,
                    elapsed: state.elapsed,
                });
            }
            failure.as_ref().map(|_| euler::Action::StopEarly)
        },
    )?;

    if let Some(error) = failure {
        return Err(error);
    }

    let elapsed = solution
        .history
        .last()
        .map_or(Time::new::<second>(0.0), |snapshot| snapshot.input.elapsed);

    match solution.status {
        euler::Status::StoppedByObserver => Ok(Settling {
            time: elapsed,
            steps: solution.steps,
            initial,
            target,
        }),
        euler::Status::Complete => Err(TransientError::MaxSteps {
            max_steps: config.max_steps,
            elapsed,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        electric_current::ampere, temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::degree_celsius, time::hour,
    };

    use crate::models::thermal::conductor::core::{
        TemperatureError,
        test_support::{celsius, conductor, june_noon},
    };

    fn step(before: f64, after: f64) -> CurrentStep {
        CurrentStep {
            before: ElectricCurrent::new::<ampere>(before),
            after: ElectricCurrent::new::<ampere>(after),
        }
    }

    /// A step to the 100 °C rating from 400 A.
    fn to_rating() -> CurrentStep {
        step(400.0, 741.8314046599354)
    }

    fn seconds(value: f64) -> Constrained<Time, StrictlyPositive> {
        StrictlyPositive::new(Time::new::<second>(value)).unwrap()
    }

    fn duration(value: Time) -> Constrained<Time, NonNegative> {
        NonNegative::new(value).unwrap()
    }

    fn kelvin_step(value: f64) -> Constrained<TemperatureInterval, StrictlyPositive> {
        StrictlyPositive::new(TemperatureInterval::new::<delta_kelvin>(value)).unwrap()
    }

    #[test]
    fn four_hour_trajectory() {
        let conductor = conductor();
        let environment = june_noon();
        let balance = HeatBalance::new(&conductor, &environment);

        let trajectory = temperature_trajectory(
            &balance,
            to_rating(),
            seconds(10.0),
            duration(Time::new::<hour>(4.0)),
            &TransientConfig::default(),
        )
        .unwrap();

        assert_eq!(trajectory.len(), 1441);
        assert_eq!(trajectory.temperatures()[0], trajectory.initial().temperature);
        assert_relative_eq!(trajectory.time_at(360).get::<second>(), 3600.0);

        let t = |index: usize| trajectory.temperatures()[index].get::<degree_celsius>();
        assert_relative_eq!(t(0), 59.7977605702374, max_relative = 1e-6);
        assert_relative_eq!(t(1), 60.057630530565795, max_relative = 1e-6);
        assert_relative_eq!(t(2), 60.315872654433086, max_relative = 1e-6);
        assert_relative_eq!(t(360), 96.2886, epsilon = 1e-3);
        assert_relative_eq!(t(720), 99.6671, epsilon = 1e-3);
        assert_relative_eq!(
            trajectory.last().get::<degree_celsius>(),
            99.99733690939348,
            max_relative = 1e-6
        );
    }

    #[test]
    fn heating_trajectory_rises_toward_the_new_steady_state() {
        let conductor = conductor();
        let environment = june_noon();
        let balance = HeatBalance::new(&conductor, &environment);

        let trajectory = temperature_trajectory(
            &balance,
            to_rating(),
            seconds(10.0),
            duration(Time::new::<hour>(4.0)),
            &TransientConfig::default(),
        )
        .unwrap();

        assert!(trajectory.temperatures().windows(2).all(|w| w[1] >= w[0]));
        assert!(trajectory.last() <= celsius(100.0));

        let crossing = trajectory
            .first_time_above(celsius(99.5))
            .expect("trajectory should pass 99.5 °C");
        assert_relative_eq!(crossing.get::<second>(), 6600.0);
    }

    #[test]
    fn partial_steps_are_dropped() {
        let conductor = conductor();
        let environment = june_noon();
        let balance = HeatBalance::new(&conductor, &environment);
        let config = TransientConfig::default();

        let trajectory = temperature_trajectory(
            &balance,
            to_rating(),
            seconds(10.0),
            duration(Time::new::<second>(25.0)),
            &config,
        )
        .unwrap();
        assert_eq!(trajectory.len(), 3);

        let trajectory = temperature_trajectory(
            &balance,
            to_rating(),
            seconds(10.0),
            NonNegative::zero(),
            &config,
        )
        .unwrap();
        assert_eq!(trajectory.len(), 1);
        assert_eq!(trajectory.last(), trajectory.initial().temperature);
    }

    #[test]
    fn trajectory_step_limit() {
        let conductor = conductor();
        let environment = june_noon();
        let balance = HeatBalance::new(&conductor, &environment);
        let config = TransientConfig {
            max_steps: 100,
            ..TransientConfig::default()
        };

        let result = temperature_trajectory(
            &balance,
            to_rating(),
            seconds(1.0),
            duration(Time::new::<hour>(1.0)),
            &config,
        );

        assert!(matches!(
            result,
            Err(TransientError::MaxSteps { max_steps: 100, .. })
        ));
    }

    #[test]
    fn runaway_current_is_reported_as_divergence() {
        let conductor = conductor();
        let environment = june_noon();
        let balance = HeatBalance::new(&conductor, &environment);

        let result = temperature_trajectory(
            &balance,
            step(400.0, 1.0e6),
            seconds(10.0),
            duration(Time::new::<hour>(1.0)),
            &TransientConfig::default(),
        );

        let Err(TransientError::NonFinite { step, previous }) = result else {
            panic!("expected the integration to diverge, got {result:?}");
        };
        assert!(step > 1);
        assert!(previous.value.is_finite());
    }

    #[test]
    fn trajectory_matches_a_manual_euler_step() {
        let conductor = conductor();
        let environment = june_noon();
        let balance = HeatBalance::new(&conductor, &environment);
        let current = to_rating();

        let trajectory = temperature_trajectory(
            &balance,
            current,
            seconds(10.0),
            duration(Time::new::<second>(10.0)),
            &TransientConfig::default(),
        )
        .unwrap();

        let t0 = trajectory.initial().temperature;
        let rise: TemperatureInterval = balance.net_heating(t0, current.after)
            / *conductor.heat_capacity
            * Time::new::<second>(10.0);
        assert_eq!(trajectory.temperatures(), &[t0, t0 + rise]);
    }

    #[test]
    fn settling_to_the_rated_temperature() {
        let conductor = conductor();
        let environment = june_noon();
        let balance = HeatBalance::new(&conductor, &environment);

        let settling = settling_time(
            &balance,
            to_rating(),
            kelvin_step(0.5),
            &TransientConfig::default(),
        )
        .unwrap();

        assert_eq!(settling.steps, 81);
        assert_relative_eq!(settling.time.get::<second>(), 10409.21, max_relative = 1e-4);
        assert_relative_eq!(
            settling.target.temperature.get::<degree_celsius>(),
            100.0,
            max_relative = 1e-6
        );

        // The march stops short of the target, so it takes at least as long as
        // the integrated trajectory needs to come within one step of it.
        assert!(settling.time.get::<second>() >= 6600.0);
    }

    #[test]
    fn unchanged_current_settles_immediately() {
        let conductor = conductor();
        let environment = june_noon();
        let balance = HeatBalance::new(&conductor, &environment);

        let settling = settling_time(
            &balance,
            step(500.0, 500.0),
            kelvin_step(0.5),
            &TransientConfig::default(),
        )
        .unwrap();

        assert_eq!(settling.steps, 0);
        assert_eq!(settling.time.get::<second>(), 0.0);
    }

    #[test]
    fn settling_requires_a_rising_current() {
        let conductor = conductor();
        let environment = june_noon();
        let balance = HeatBalance::new(&conductor, &environment);

        let result = settling_time(
            &balance,
            step(700.0, 400.0),
            kelvin_step(0.5),
            &TransientConfig::default(),
        );

        assert!(matches!(
            result,
            Err(TransientError::CoolingTransient { .. })
        ));
    }

    #[test]
    fn settling_step_limit() {
        let conductor = conductor();
        let environment = june_noon();
        let balance = HeatBalance::new(&conductor, &environment);
        let config = TransientConfig {
            max_steps: 10,
            ..TransientConfig::default()
        };

        let result = settling_time(&balance, to_rating(), kelvin_step(0.5), &config);

        let Err(TransientError::MaxSteps { elapsed, .. }) = result else {
            panic!("expected the step limit to be hit, got {result:?}");
        };
        assert!(elapsed.get::<second>() > 0.0);
    }

    #[test]
    fn invalid_current_propagates() {
        let conductor = conductor();
        let environment = june_noon();
        let balance = HeatBalance::new(&conductor, &environment);

        let result = settling_time(
            &balance,
            step(-1.0, 500.0),
            kelvin_step(0.5),
            &TransientConfig::default(),
        );

        assert!(matches!(
            result,
            Err(TransientError::Temperature(TemperatureError::InvalidCurrent { .. }))
        ));
    }
}
