//! Closed-form IEEE 738 sub-models for bare overhead conductors.
//!
//! Every function here is a stateless, total function of its physical inputs:
//! no iteration, no hidden state, and no failure mode. Degenerate inputs
//! (a zero film viscosity, a conductor colder than the air, the sun below the
//! horizon) produce a zero heat rate rather than an error or a panic.
//!
//! The empirical correlations are written in the IEEE 738 SI form, with
//! temperatures in degrees Celsius and lengths in meters. Inputs and outputs
//! are [`uom`] quantities, so callers never convert units by hand.
//!
//! # Sub-models
//!
//! - [`air`]: Air properties evaluated at the boundary-layer film temperature.
//! - [`convection`]: Natural and forced convective heat loss.
//! - [`radiation`]: Radiative heat loss.
//! - [`solar`]: Solar geometry and solar heat gain.
//! - [`resistance`]: Linear AC resistance versus temperature.
//! - [`heat_capacity`]: Total conductor heat capacity from its layers.

pub mod air;
pub mod convection;
pub mod heat_capacity;
pub mod radiation;
pub mod resistance;
pub mod solar;

pub use convection::convective_loss;
pub use heat_capacity::{HeatCapacity, Layer};
pub use radiation::radiative_loss;
pub use resistance::ResistanceModel;
pub use solar::{Atmosphere, solar_gain};
