//! Sun position relative to a conductor.
//!
//! Angles follow the IEEE 738 conventions: the hour angle is negative before
//! solar noon, azimuths are measured clockwise from north, and the sun
//! altitude is clamped at the horizon.

use jiff::civil::{Date, DateTime};
use uom::si::{angle::degree, f64::Angle};

/// Returns the zero-based day of the year (January 1st is day 0).
///
/// The declination formula is referenced to this count.
#[must_use]
pub fn day_of_year(date: Date) -> i16 {
    date.day_of_year() - 1
}

/// Returns the solar declination for a zero-based day of the year.
#[must_use]
pub fn solar_declination(day: i16) -> Angle {
    let phase = Angle::new::<degree>((284.0 + f64::from(day)) * 360.0 / 365.0);
    Angle::new::<degree>(23.46 * phase.sin().value)
}

/// Returns the hour angle, `15° · (hour − 12)`, using fractional hours.
#[must_use]
pub fn hour_angle(time: DateTime) -> Angle {
    let hour = f64::from(time.hour())
        + f64::from(time.minute()) / 60.0
        + f64::from(time.second()) / 3600.0;
    Angle::new::<degree>(15.0 * (hour - 12.0))
}

/// Returns the altitude of the sun above the horizon, clamped to be non-negative.
#[must_use]
pub fn sun_altitude(latitude: Angle, declination: Angle, hour_angle: Angle) -> Angle {
    let sin_altitude = latitude.cos().value * declination.cos().value * hour_angle.cos().value
        + latitude.sin().value * declination.sin().value;
    let altitude = Angle::new::<degree>(sin_altitude.asin().to_degrees());
    if altitude.get::<degree>() < 0.0 {
        Angle::new::<degree>(0.0)
    } else {
        altitude
    }
}

/// Returns the dimensionless solar azimuth variable.
///
/// A zero denominator yields an infinite variable, whose arctangent is ±90°.
/// If the numerator is also zero the variable is taken as zero.
#[must_use]
pub fn azimuth_variable(hour_angle: Angle, latitude: Angle, declination: Angle) -> f64 {
    let chi = hour_angle.sin().value
        / (latitude.sin().value * hour_angle.cos().value
            - latitude.cos().value * declination.tan().value);
    if chi.is_nan() { 0.0 } else { chi }
}

/// Returns the solar azimuth constant for an hour angle and azimuth variable.
#[must_use]
pub fn azimuth_constant(hour_angle: Angle, chi: f64) -> Angle {
    let omega = hour_angle.get::<degree>();
    let constant = if (-180.0..0.0).contains(&omega) && chi >= 0.0 {
        0.0
    } else if (0.0..180.0).contains(&omega) && chi < 0.0 {
        360.0
    } else {
        180.0
    };
    Angle::new::<degree>(constant)
}

/// Returns the azimuth of the sun.
#[must_use]
pub fn sun_azimuth(constant: Angle, chi: f64) -> Angle {
    constant + Angle::new::<degree>(chi.atan().to_degrees())
}

/// Returns the effective angle of incidence of the sun's rays on the conductor.
#[must_use]
pub fn incidence_angle(altitude: Angle, sun_azimuth: Angle, conductor_azimuth: Angle) -> Angle {
    let cos_theta = altitude.cos().value * (sun_azimuth - conductor_azimuth).cos().value;
    Angle::new::<degree>(cos_theta.acos().to_degrees())
}
