use uom::si::{f64::ThermodynamicTemperature, ratio::ratio};

use crate::support::units::{LinearResistance, TemperatureCoefficient, TemperatureDifference};

/// Linear model of conductor AC resistance versus temperature.
///
/// `R(T) = R0 · (1 + α · (T − T0))`, where `R0` is the resistance per unit
/// length at the reference temperature `T0` and `α` is the temperature
/// coefficient of resistance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistanceModel {
    /// Resistance per unit length at the reference temperature.
    pub reference: LinearResistance,

    /// Temperature at which `reference` was measured.
    pub reference_temperature: ThermodynamicTemperature,

    /// Relative change in resistance per kelvin.
    pub coefficient: TemperatureCoefficient,
}

impl ResistanceModel {
    /// Creates a resistance model from a reference point and coefficient.
    #[must_use]
    pub fn new(
        reference: LinearResistance,
        reference_temperature: ThermodynamicTemperature,
        coefficient: TemperatureCoefficient,
    ) -> Self {
        Self {
            reference,
            reference_temperature,
            coefficient,
        }
    }

    /// Returns the resistance per unit length at conductor temperature `t`.
    ///
    /// Returns `reference` exactly when `t` equals the reference temperature.
    #[must_use]
    pub fn at(&self, t: ThermodynamicTemperature) -> LinearResistance {
        let relative_change = self.coefficient * t.minus(self.reference_temperature);
        self.reference * (1.0 + relative_change.get::<ratio>())
    }
}
