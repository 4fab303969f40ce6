//! Solar heat gain on a conductor.
//!
//! The gain depends on where the sun is relative to the conductor, which is
//! derived from the date, hour, and latitude by the geometry helpers in
//! [`geometry`]. None of this depends on the conductor temperature, so solvers
//! evaluate it once per call.

pub mod geometry;

use jiff::civil::DateTime;
use uom::si::{
    angle::{degree, radian},
    f64::{Angle, HeatFluxDensity, Length, Ratio},
    heat_flux_density::watt_per_square_meter,
    length::meter,
    ratio::ratio,
};

use crate::support::units::{LinearHeatRate, watts_per_meter};

/// Atmospheric clarity used to select the total heat flux correlation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Atmosphere {
    /// Clear sky.
    #[default]
    Clear,

    /// Industrial (hazy) atmosphere.
    Industrial,
}

impl Atmosphere {
    /// Polynomial coefficients of heat flux density (W/m²) in sun altitude (degrees).
    fn coefficients(self) -> [f64; 7] {
        match self {
            Self::Clear => [
                -42.2391,
                63.8044,
                -1.9220,
                3.46921e-2,
                -3.61118e-4,
                1.94318e-6,
                -4.07608e-9,
            ],
            Self::Industrial => [
                53.1821, 14.2110, 6.6138e-1, -3.1658e-2, 5.4654e-4, 4.3446e-6, 1.3236e-8,
            ],
        }
    }
}

/// Returns the total solar and sky heat flux density at sea level.
#[must_use]
pub fn heat_flux_density(altitude: Angle, atmosphere: Atmosphere) -> HeatFluxDensity {
    let h = altitude.get::<degree>();
    let q = atmosphere
        .coefficients()
        .iter()
        .enumerate()
        .map(|(power, c)| c * h.powi(power as i32))
        .sum::<f64>();
    HeatFluxDensity::new::<watt_per_square_meter>(q)
}

/// Returns the solar flux correction factor for conductor elevation.
#[must_use]
pub fn elevation_correction_factor(elevation: Length) -> f64 {
    let h = elevation.get::<meter>();
    1.0 + 1.148e-4 * h - 1.108e-8 * h.powi(2)
}

/// Returns the solar heat gain per unit length of conductor.
///
/// The gain is zero when the sun is at or below the horizon, and is never
/// negative: a negative gain would mean the sun cools the conductor.
#[must_use]
pub fn solar_gain(
    time: DateTime,
    elevation: Length,
    latitude: Angle,
    atmosphere: Atmosphere,
    conductor_azimuth: Angle,
    diameter: Length,
    absorptivity: Ratio,
) -> LinearHeatRate {
    let declination = geometry::solar_declination(geometry::day_of_year(time.date()));
    let hour_angle = geometry::hour_angle(time);
    let altitude = geometry::sun_altitude(latitude, declination, hour_angle);

    if altitude.get::<degree>() <= 0.0 {
        return watts_per_meter(0.0);
    }

    let flux = heat_flux_density(altitude, atmosphere) * elevation_correction_factor(elevation);

    let chi = geometry::azimuth_variable(hour_angle, latitude, declination);
    let sun_azimuth = geometry::sun_azimuth(geometry::azimuth_constant(hour_angle, chi), chi);
    let incidence = geometry::incidence_angle(altitude, sun_azimuth, conductor_azimuth);

    let gain = absorptivity.get::<ratio>()
        * flux.get::<watt_per_square_meter>()
        * incidence.get::<radian>().sin()
        * diameter.get::<meter>();

    watts_per_meter(gain.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use jiff::civil::date;

    fn gain_at(hour: i8, atmosphere: Atmosphere) -> f64 {
        solar_gain(
            date(2023, 6, 10).at(hour, 0, 0, 0),
            Length::new::<meter>(0.0),
            Angle::new::<degree>(30.0),
            atmosphere,
            Angle::new::<degree>(90.0),
            Length::new::<meter>(0.01),
            Ratio::new::<ratio>(0.5),
        )
        .value
    }

    #[test]
    fn june_noon_at_30_degrees_north() {
        assert_relative_eq!(
            gain_at(12, Atmosphere::Clear),
            5.164509209155758,
            max_relative = 1e-9
        );
    }

    #[test]
    fn morning_and_afternoon_are_symmetric() {
        assert_relative_eq!(
            gain_at(9, Atmosphere::Clear),
            3.655210556221372,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            gain_at(15, Atmosphere::Clear),
            gain_at(9, Atmosphere::Clear),
            max_relative = 1e-9
        );
        assert_relative_eq!(
            gain_at(9, Atmosphere::Industrial),
            12.399877413145175,
            max_relative = 1e-9
        );
    }

    #[test]
    fn zero_at_midnight() {
        assert_eq!(gain_at(0, Atmosphere::Clear), 0.0);
        assert_eq!(gain_at(0, Atmosphere::Industrial), 0.0);

        // Southern hemisphere, December.
        let q = solar_gain(
            date(2023, 12, 21).at(0, 0, 0, 0),
            Length::new::<meter>(500.0),
            Angle::new::<degree>(-45.0),
            Atmosphere::Clear,
            Angle::new::<degree>(0.0),
            Length::new::<meter>(0.03),
            Ratio::new::<ratio>(0.8),
        );
        assert_eq!(q.value, 0.0);
    }

    #[test]
    fn clear_sky_polynomial_at_horizon_and_zenith() {
        assert_relative_eq!(
            heat_flux_density(Angle::new::<degree>(0.0), Atmosphere::Clear)
                .get::<watt_per_square_meter>(),
            -42.2391
        );
        let zenith = heat_flux_density(Angle::new::<degree>(90.0), Atmosphere::Clear);
        assert!(zenith.get::<watt_per_square_meter>() > 1000.0);
    }

    #[test]
    fn flux_increases_with_elevation() {
        assert_relative_eq!(elevation_correction_factor(Length::new::<meter>(0.0)), 1.0);
        assert_relative_eq!(
            elevation_correction_factor(Length::new::<meter>(1000.0)),
            1.10372,
            max_relative = 1e-12
        );
    }
}
