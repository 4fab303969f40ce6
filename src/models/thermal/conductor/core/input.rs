use jiff::civil::DateTime;
use uom::si::f64::{Angle, Length, Ratio, ThermodynamicTemperature, Velocity};

use crate::support::{
    constraint::{Constrained, StrictlyPositive, UnitInterval},
    ieee738::{Atmosphere, HeatCapacity, ResistanceModel},
};

/// Weather and site conditions around a conductor.
///
/// Only `time` is used to position the sun; it carries no time zone and is
/// interpreted as local solar time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    /// Wind speed at the conductor.
    pub wind_speed: Velocity,

    /// Angle between the wind direction and the conductor axis.
    pub wind_angle: Angle,

    /// Ambient air temperature.
    pub ambient: ThermodynamicTemperature,

    /// Conductor elevation above sea level.
    pub elevation: Length,

    /// Site latitude, positive north.
    pub latitude: Angle,

    /// Azimuth of the conductor line, clockwise from north.
    pub conductor_azimuth: Angle,

    /// Atmospheric clarity.
    pub atmosphere: Atmosphere,

    /// Local date and time of day.
    pub time: DateTime,
}

/// Physical properties of a bare conductor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conductor {
    /// Outside diameter.
    pub diameter: Constrained<Length, StrictlyPositive>,

    /// Surface emissivity.
    pub emissivity: Constrained<Ratio, UnitInterval>,

    /// Surface solar absorptivity.
    pub absorptivity: Constrained<Ratio, UnitInterval>,

    /// AC resistance versus temperature.
    pub resistance: ResistanceModel,

    /// Total heat capacity per unit length.
    pub heat_capacity: HeatCapacity,
}
