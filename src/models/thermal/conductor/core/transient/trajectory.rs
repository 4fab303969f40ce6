use uom::si::f64::{ThermodynamicTemperature, Time};

use crate::models::thermal::conductor::core::TemperatureSolution;

/// Conductor temperatures at evenly spaced times after a current step.
///
/// Sample `k` is the temperature at time `k · step`. Sample 0 is the
/// steady-state temperature before the step, so a trajectory is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    step: Time,
    temperatures: Vec<ThermodynamicTemperature>,
    initial: TemperatureSolution,
}

impl Trajectory {
    pub(super) fn new(
        step: Time,
        temperatures: Vec<ThermodynamicTemperature>,
        initial: TemperatureSolution,
    ) -> Self {
        Self {
            step,
            temperatures,
            initial,
        }
    }

    /// Returns the time between samples.
    #[must_use]
    pub fn step(&self) -> Time {
        self.step
    }

    #[must_use]
    pub fn temperatures(&self) -> &[ThermodynamicTemperature] {
        &self.temperatures
    }

    /// Returns the steady-state solve that produced sample 0.
    #[must_use]
    pub fn initial(&self) -> &TemperatureSolution {
        &self.initial
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.temperatures.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.temperatures.is_empty()
    }

    /// Returns the time of sample `index`.
    #[must_use]
    pub fn time_at(&self, index: usize) -> Time {
        self.step * index as f64
    }

    /// Returns the temperature at the end of the trajectory.
    #[must_use]
    pub fn last(&self) -> ThermodynamicTemperature {
        self.temperatures
            .last()
            .copied()
            .unwrap_or(self.initial.temperature)
    }

    /// Iterates over `(time, temperature)` pairs.
    pub fn samples(&self) -> impl Iterator<Item = (Time, ThermodynamicTemperature)> + '_ {
        self.temperatures
            .iter()
            .enumerate()
            .map(|(index, &t)| (self.time_at(index), t))
    }

    /// Returns the time of the first sample above `threshold`, if any.
    #[must_use]
    pub fn first_time_above(&self, threshold: ThermodynamicTemperature) -> Option<Time> {
        self.samples()
            .find(|&(_, t)| t > threshold)
            .map(|(time, _)| time)
    }
}
