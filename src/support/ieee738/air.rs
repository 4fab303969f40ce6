//! Properties of air in the thermal boundary layer around a conductor.
//!
//! All correlations are evaluated at the film temperature, the arithmetic mean
//! of the conductor surface and ambient air temperatures.

use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, Length, MassDensity, ThermalConductivity, ThermodynamicTemperature},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
};

/// Returns the boundary-layer film temperature.
#[must_use]
pub fn film_temperature(
    surface: ThermodynamicTemperature,
    ambient: ThermodynamicTemperature,
) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(film_celsius(
        surface.get::<degree_celsius>(),
        ambient.get::<degree_celsius>(),
    ))
}

/// Returns the density of air at the given elevation and film temperature.
#[must_use]
pub fn density(elevation: Length, film: ThermodynamicTemperature) -> MassDensity {
    MassDensity::new::<kilogram_per_cubic_meter>(density_si(
        elevation.get::<meter>(),
        film.get::<degree_celsius>(),
    ))
}

/// Returns the dynamic viscosity of air at the film temperature.
#[must_use]
pub fn viscosity(film: ThermodynamicTemperature) -> DynamicViscosity {
    DynamicViscosity::new::<pascal_second>(viscosity_si(film.get::<degree_celsius>()))
}

/// Returns the thermal conductivity of air at the film temperature.
#[must_use]
pub fn thermal_conductivity(film: ThermodynamicTemperature) -> ThermalConductivity {
    ThermalConductivity::new::<watt_per_meter_kelvin>(conductivity_si(
        film.get::<degree_celsius>(),
    ))
}

fn film_celsius(surface_c: f64, ambient_c: f64) -> f64 {
    (surface_c + ambient_c) / 2.0
}

/// Air density in kg/m³ for an elevation in m and a film temperature in °C.
fn density_si(elevation_m: f64, film_c: f64) -> f64 {
    (1.293 - 1.525e-4 * elevation_m + 6.379e-9 * elevation_m.powi(2)) / (1.0 + 0.00367 * film_c)
}

/// Dynamic viscosity in Pa·s for a film temperature in °C.
fn viscosity_si(film_c: f64) -> f64 {
    1.458e-6 * (film_c + 273.0).powf(1.5) / (film_c + 383.4)
}

/// Thermal conductivity in W/(m·K) for a film temperature in °C.
fn conductivity_si(film_c: f64) -> f64 {
    2.424e-2 + 7.477e-5 * film_c - 4.407e-9 * film_c.powi(2)
}
