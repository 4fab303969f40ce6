//! # Twine IEEE 738
//!
//! Thermal models of bare overhead conductors following the IEEE 738 heat
//! balance, built for [Twine](https://github.com/isentropic-dev/twine).
//!
//! Given a conductor and its weather, the crate computes:
//!
//! - the steady-state current that holds the conductor at a maximum temperature,
//! - the steady-state temperature produced by a given current,
//! - the temperature response to a step change in current, and the time it
//!   takes to reach the new steady state.
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations and the conductor API.
//! - [`support`]: The closed-form IEEE 738 sub-models and supporting utilities.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Model-specific code starts in a model's internal `core` module and moves to
//! [`support`] once it's useful on its own, the way the air-property,
//! convection, radiation, and solar correlations already have.

pub mod models;
pub mod support;
