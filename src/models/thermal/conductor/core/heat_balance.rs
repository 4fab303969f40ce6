use uom::si::f64::{ElectricCurrent, ThermodynamicTemperature};

use crate::support::{
    ieee738::{convective_loss, radiative_loss, solar_gain},
    units::{LinearHeatRate, LinearResistance},
};

use super::{Conductor, Environment, RatingError, rating, rating_or_zero};

/// Heat flux terms per unit length for one conductor temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatBalanceTerms {
    /// Convective heat loss.
    pub convective: LinearHeatRate,

    /// Radiative heat loss.
    pub radiative: LinearHeatRate,

    /// Solar heat gain.
    pub solar: LinearHeatRate,
}

impl HeatBalanceTerms {
    /// Returns the net loss `q_c + q_r − q_s` that Joule heating must supply.
    #[must_use]
    pub fn net_loss(&self) -> LinearHeatRate {
        self.convective + self.radiative - self.solar
    }
}

/// Heat balance of a conductor in fixed weather.
///
/// The solar gain does not depend on the conductor temperature, so it is
/// evaluated once on construction and reused for every temperature.
#[derive(Debug, Clone, Copy)]
pub struct HeatBalance<'a> {
    conductor: &'a Conductor,
    environment: &'a Environment,
    solar: LinearHeatRate,
}

impl<'a> HeatBalance<'a> {
    #[must_use]
    pub fn new(conductor: &'a Conductor, environment: &'a Environment) -> Self {
        let solar = solar_gain(
            environment.time,
            environment.elevation,
            environment.latitude,
            environment.atmosphere,
            environment.conductor_azimuth,
            conductor.diameter.into_inner(),
            conductor.absorptivity.into_inner(),
        );

        Self {
            conductor,
            environment,
            solar,
        }
    }

    #[must_use]
    pub fn conductor(&self) -> &'a Conductor {
        self.conductor
    }

    #[must_use]
    pub fn environment(&self) -> &'a Environment {
        self.environment
    }

    /// Returns the solar heat gain.
    #[must_use]
    pub fn solar(&self) -> LinearHeatRate {
        self.solar
    }

    /// Returns the heat flux terms at conductor temperature `t`.
    #[must_use]
    pub fn terms_at(&self, t: ThermodynamicTemperature) -> HeatBalanceTerms {
        let env = self.environment;
        let diameter = self.conductor.diameter.into_inner();

        HeatBalanceTerms {
            convective: convective_loss(
                t,
                env.ambient,
                env.elevation,
                diameter,
                env.wind_angle,
                env.wind_speed,
            ),
            radiative: radiative_loss(
                diameter,
                self.conductor.emissivity.into_inner(),
                t,
                env.ambient,
            ),
            solar: self.solar,
        }
    }

    /// Returns the conductor resistance per unit length at temperature `t`.
    #[must_use]
    pub fn resistance_at(&self, t: ThermodynamicTemperature) -> LinearResistance {
        self.conductor.resistance.at(t)
    }

    /// Returns the current that holds the conductor at temperature `t`.
    ///
    /// # Errors
    ///
    /// Returns a [`RatingError`] if no real current balances the heat loss at `t`.
    pub fn rating_at(&self, t: ThermodynamicTemperature) -> Result<ElectricCurrent, RatingError> {
        rating(&self.terms_at(t), self.resistance_at(t))
    }

    /// Returns the current that holds the conductor at temperature `t`, or zero
    /// if no real current does.
    #[must_use]
    pub fn rating_or_zero_at(&self, t: ThermodynamicTemperature) -> ElectricCurrent {
        rating_or_zero(&self.terms_at(t), self.resistance_at(t))
    }

    /// Returns the net heating rate `R(T)·I² + q_s − q_c − q_r` at temperature `t`.
    ///
    /// A positive rate means the conductor is warming.
    #[must_use]
    pub fn net_heating(
        &self,
        t: ThermodynamicTemperature,
        current: ElectricCurrent,
    ) -> LinearHeatRate {
        let terms = self.terms_at(t);
        self.resistance_at(t) * (current * current) + terms.solar
            - terms.convective
            - terms.radiative
    }
}
