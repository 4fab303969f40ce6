//! Steady-state thermal rating.

use thiserror::Error;
use uom::si::{
    electric_current::ampere,
    f64::{ElectricCurrent, ThermodynamicTemperature},
};

use crate::support::units::{LinearHeatRate, LinearResistance};

use super::{Conductor, Environment, HeatBalance, HeatBalanceTerms};

/// Errors that can occur when computing a thermal rating.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RatingError {
    /// The solar gain exceeds the heat losses, so no real current balances them.
    #[error("no real current balances net heat loss {net_loss:?} with resistance {resistance:?}")]
    NegativeHeatBalance {
        net_loss: LinearHeatRate,
        resistance: LinearResistance,
    },

    /// The resistance is zero or not finite.
    #[error("resistance must be nonzero and finite: {resistance:?}")]
    ZeroResistance { resistance: LinearResistance },
}

/// Returns the current `sqrt((q_c + q_r − q_s) / R)` that balances the heat flux terms.
///
/// # Errors
///
/// Returns [`RatingError::ZeroResistance`] if `resistance` is zero or not
/// finite, and [`RatingError::NegativeHeatBalance`] if the quotient is
/// negative or not a number.
pub fn rating(
    terms: &HeatBalanceTerms,
    resistance: LinearResistance,
) -> Result<ElectricCurrent, RatingError> {
    if resistance.value == 0.0 || !resistance.value.is_finite() {
        return Err(RatingError::ZeroResistance { resistance });
    }

    let net_loss = terms.net_loss();
    let squared = (net_loss / resistance).value;

    if squared.is_nan() || squared < 0.0 {
        return Err(RatingError::NegativeHeatBalance {
            net_loss,
            resistance,
        });
    }

    Ok(ElectricCurrent::new::<ampere>(squared.sqrt()))
}

/// Returns the rating, or zero when [`rating`] fails.
///
/// The temperature solver uses this form so an infeasible trial temperature
/// reads as "no current" instead of stopping the iteration.
#[must_use]
pub fn rating_or_zero(terms: &HeatBalanceTerms, resistance: LinearResistance) -> ElectricCurrent {
    rating(terms, resistance).unwrap_or(ElectricCurrent::new::<ampere>(0.0))
}

impl Conductor {
    /// Returns the current that holds this conductor at `max_temperature` in `environment`.
    ///
    /// # Errors
    ///
    /// Returns a [`RatingError`] if no real current balances the heat loss.
    pub fn rating_at(
        &self,
        max_temperature: ThermodynamicTemperature,
        environment: &Environment,
    ) -> Result<ElectricCurrent, RatingError> {
        HeatBalance::new(self, environment).rating_at(max_temperature)
    }
}
