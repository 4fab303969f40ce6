//! Lumped heat balance as an ODE for forward-Euler integration.
//!
//! One [`NetHeatingModel`] evaluates `R(T)·I² + q_s − q_c − q_r` at a
//! [`ThermalState`]. Two problems integrate it:
//!
//! - [`TimeMarch`] steps time and integrates temperature, `dT/dt = net / C`.
//! - [`TemperatureMarch`] steps temperature and integrates elapsed time,
//!   `dt/dT = C / net`.

use std::convert::Infallible;

use num_traits::Zero;
use twine_core::{DerivativeOf, Model, OdeProblem, StepIntegrable};
use uom::si::f64::{ElectricCurrent, TemperatureInterval, ThermodynamicTemperature, Time};

use crate::support::units::{
    InverseTemperatureRate, LinearHeatCapacity, LinearHeatRate, TemperatureRate,
};

use super::super::HeatBalance;

/// Conductor temperature together with the time elapsed since the current step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ThermalState {
    pub(super) temperature: ThermodynamicTemperature,
    pub(super) elapsed: Time,
}

/// Net heating rate of a conductor carrying a fixed current.
pub(super) struct NetHeatingModel<'a> {
    balance: HeatBalance<'a>,
    current: ElectricCurrent,
}

impl<'a> NetHeatingModel<'a> {
    pub(super) fn new(balance: &HeatBalance<'a>, current: ElectricCurrent) -> Self {
        Self {
            balance: *balance,
            current,
        }
    }
}

impl Model for NetHeatingModel<'_> {
    type Input = ThermalState;
    type Output = LinearHeatRate;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.balance.net_heating(input.temperature, self.current))
    }
}

/// Integrated conductor temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ConductorTemperature(ThermodynamicTemperature);

impl StepIntegrable<Time> for ConductorTemperature {
    type Derivative = TemperatureRate;

    fn step(&self, derivative: TemperatureRate, delta: Time) -> Self {
        let rise: TemperatureInterval = derivative * delta;
        Self(self.0 + rise)
    }
}

/// Integrated time since the current step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Elapsed(Time);

impl StepIntegrable<TemperatureInterval> for Elapsed {
    type Derivative = InverseTemperatureRate;

    fn step(&self, derivative: InverseTemperatureRate, delta: TemperatureInterval) -> Self {
        let dt: Time = derivative * delta;
        Self(self.0 + dt)
    }
}

/// Steps time and integrates `dT/dt = net / C`.
pub(super) struct TimeMarch {
    heat_capacity: LinearHeatCapacity,
}

impl TimeMarch {
    pub(super) fn new(heat_capacity: LinearHeatCapacity) -> Self {
        Self { heat_capacity }
    }
}

impl OdeProblem for TimeMarch {
    type Input = ThermalState;
    type Output = LinearHeatRate;
    type Delta = Time;
    type State = ConductorTemperature;
    type Error = Infallible;

    fn state(&self, input: &ThermalState) -> Result<ConductorTemperature, Infallible> {
        Ok(ConductorTemperature(input.temperature))
    }

    fn derivative(
        &self,
        _input: &ThermalState,
        net: &LinearHeatRate,
    ) -> Result<DerivativeOf<ConductorTemperature, Time>, Infallible> {
        Ok(*net / self.heat_capacity)
    }

    fn build_input(
        &self,
        base: &ThermalState,
        state: &ConductorTemperature,
        delta: &Time,
    ) -> Result<ThermalState, Infallible> {
        Ok(ThermalState {
            temperature: state.0,
            elapsed: base.elapsed + *delta,
        })
    }
}

/// Steps temperature and integrates `dt/dT = C / net`.
///
/// A zero net heating rate contributes no time. The march is only meaningful
/// while the rate stays positive, which the caller checks on each snapshot.
pub(super) struct TemperatureMarch {
    heat_capacity: LinearHeatCapacity,
}

impl TemperatureMarch {
    pub(super) fn new(heat_capacity: LinearHeatCapacity) -> Self {
        Self { heat_capacity }
    }
}

impl OdeProblem for TemperatureMarch {
    type Input = ThermalState;
    type Output = LinearHeatRate;
    type Delta = TemperatureInterval;
    type State = Elapsed;
    type Error = Infallible;

    fn state(&self, input: &ThermalState) -> Result<Elapsed, Infallible> {
        Ok(Elapsed(input.elapsed))
    }

    fn derivative(
        &self,
        _input: &ThermalState,
        net: &LinearHeatRate,
    ) -> Result<DerivativeOf<Elapsed, TemperatureInterval>, Infallible> {
        Ok(if net.value > 0.0 {
            self.heat_capacity / *net
        } else {
            InverseTemperatureRate::zero()
        })
    }

    fn build_input(
        &self,
        base: &ThermalState,
        state: &Elapsed,
        delta: &TemperatureInterval,
    ) -> Result<ThermalState, Infallible> {
        Ok(ThermalState {
            temperature: base.temperature + *delta,
            elapsed: state.0,
        })
    }
}
