//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., temperature, length, current).
//! This module provides extensions that are useful for conductor modeling but
//! aren't included in [`uom`].
//!
//! ## Per-unit-length quantities
//!
//! Overhead line heat balances are written per meter of conductor, so heat
//! rates, resistances, and heat capacities all carry an extra inverse length.
//! [`uom`] has no named quantities for these, so this module defines type
//! aliases with the right dimensions along with SI constructors:
//!
//! ```
//! use twine_ieee738::support::units::{LinearHeatRate, watts_per_meter};
//!
//! let q: LinearHeatRate = watts_per_meter(48.7);
//! assert_eq!(q.value, 48.7);
//! ```
//!
//! Transient calculations divide a net heating rate by a heat capacity, so the
//! module also names the resulting [`TemperatureRate`] and its reciprocal.
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval.
//! See [`TemperatureDifference`] for details.

mod quantities;
mod temperature_difference;

pub use quantities::{
    InverseTemperatureRate, LinearHeatCapacity, LinearHeatRate, LinearResistance,
    TemperatureCoefficient, TemperatureRate, joules_per_meter_kelvin, ohms_per_meter, per_kelvin,
    watts_per_meter,
};
pub use temperature_difference::TemperatureDifference;
