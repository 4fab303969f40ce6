//! Convective heat loss from a conductor to the surrounding air.
//!
//! The loss is the larger of natural convection and forced convection, where
//! forced convection itself is the larger of a low-wind and a high-wind
//! correlation.

use uom::si::{
    angle::radian,
    f64::{
        Angle, DynamicViscosity, Length, MassDensity, Ratio, ThermodynamicTemperature, Velocity,
    },
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    ratio::ratio,
    temperature_interval::kelvin as delta_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::units::{LinearHeatRate, TemperatureDifference, watts_per_meter};

use super::air;

/// Returns the convective heat loss per unit length of conductor.
///
/// Air properties are evaluated at the film temperature. The result is zero
/// when the surface is not warmer than the air, and whenever the correlations
/// degenerate (zero viscosity or a non-finite intermediate).
#[must_use]
pub fn convective_loss(
    surface: ThermodynamicTemperature,
    ambient: ThermodynamicTemperature,
    elevation: Length,
    diameter: Length,
    wind_angle: Angle,
    wind_speed: Velocity,
) -> LinearHeatRate {
    let rise = surface.minus(ambient).get::<delta_kelvin>();

    // Fractional powers of a negative rise are undefined.
    if rise.is_nan() || rise <= 0.0 {
        return watts_per_meter(0.0);
    }

    let film = air::film_temperature(surface, ambient);
    let rho = air::density(elevation, film);
    let k = air::thermal_conductivity(film);

    let Some(reynolds) = reynolds_number(diameter, rho, wind_speed, air::viscosity(film)) else {
        return watts_per_meter(0.0);
    };

    let natural = natural_convection(
        rho.get::<kilogram_per_cubic_meter>(),
        diameter.get::<meter>(),
        rise,
    );
    let forced = forced_convection(
        wind_direction_factor(wind_angle),
        reynolds,
        k.get::<watt_per_meter_kelvin>(),
        rise,
    );

    let loss = forced.max(natural);
    watts_per_meter(if loss.is_finite() { loss } else { 0.0 })
}

/// Returns the wind direction factor for the angle between wind and conductor axis.
///
/// The factor is 1 for wind perpendicular to the conductor and drops to
/// about 0.39 for wind parallel to it.
#[must_use]
pub fn wind_direction_factor(wind_angle: Angle) -> f64 {
    let phi = wind_angle.get::<radian>();
    1.194 - phi.cos() + 0.194 * (2.0 * phi).cos() + 0.368 * (2.0 * phi).sin()
}

/// Returns the Reynolds number `D·ρ·V/μ`.
///
/// Returns `None` when the viscosity is zero or the result is not finite.
#[must_use]
pub fn reynolds_number(
    diameter: Length,
    density: MassDensity,
    wind_speed: Velocity,
    viscosity: DynamicViscosity,
) -> Option<f64> {
    if viscosity.value == 0.0 {
        return None;
    }
    let reynolds: Ratio = diameter * density * wind_speed / viscosity;
    let reynolds = reynolds.get::<ratio>();
    reynolds.is_finite().then_some(reynolds)
}

/// Natural convection loss in W/m for a temperature rise in K.
fn natural_convection(density: f64, diameter: f64, rise: f64) -> f64 {
    3.645 * density.sqrt() * diameter.powf(0.75) * rise.powf(1.25)
}

/// Forced convection loss in W/m, the larger of the low- and high-wind correlations.
fn forced_convection(direction_factor: f64, reynolds: f64, conductivity: f64, rise: f64) -> f64 {
    let low_wind = direction_factor * (1.01 + 1.35 * reynolds.powf(0.52)) * conductivity * rise;
    let high_wind = direction_factor * 0.754 * reynolds.powf(0.6) * conductivity * rise;
    low_wind.max(high_wind)
}
