//! Radiative heat loss from a conductor surface.

use uom::si::{
    f64::{Length, Ratio, ThermodynamicTemperature},
    length::meter,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::{LinearHeatRate, watts_per_meter};

/// Returns the radiative heat loss per unit length of conductor.
///
/// Uses the IEEE 738 form of the Stefan–Boltzmann law, with absolute
/// temperatures expressed in hundreds of kelvin. The loss is negative when the
/// conductor is colder than its surroundings.
#[must_use]
pub fn radiative_loss(
    diameter: Length,
    emissivity: Ratio,
    surface: ThermodynamicTemperature,
    ambient: ThermodynamicTemperature,
) -> LinearHeatRate {
    let hundreds_of_kelvin =
        |t: ThermodynamicTemperature| (t.get::<degree_celsius>() + 273.0) / 100.0;

    watts_per_meter(
        17.8 * diameter.get::<meter>()
            * emissivity.get::<ratio>()
            * (hundreds_of_kelvin(surface).powi(4) - hundreds_of_kelvin(ambient).powi(4)),
    )
}
