use jiff::civil::date;
use uom::si::{
    angle::degree,
    f64::{
        Angle, Length, LinearMassDensity, Ratio, SpecificHeatCapacity, ThermodynamicTemperature,
        Velocity,
    },
    length::meter,
    linear_mass_density::kilogram_per_meter,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::degree_celsius,
    velocity::meter_per_second,
};

use crate::support::{
    constraint::{StrictlyPositive, UnitInterval},
    ieee738::{Atmosphere, HeatCapacity, Layer, ResistanceModel},
    units::{ohms_per_meter, per_kelvin},
};

use super::{Conductor, Environment};

pub(crate) fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

/// A 1 cm aluminum conductor with a steel core.
pub(crate) fn conductor() -> Conductor {
    let layer = |mass: f64, specific_heat: f64| {
        Layer::new(
            LinearMassDensity::new::<kilogram_per_meter>(mass),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(specific_heat),
        )
        .unwrap()
    };

    Conductor {
        diameter: StrictlyPositive::new(Length::new::<meter>(0.01)).unwrap(),
        emissivity: UnitInterval::new(Ratio::new::<ratio>(0.5)).unwrap(),
        absorptivity: UnitInterval::new(Ratio::new::<ratio>(0.5)).unwrap(),
        resistance: ResistanceModel::new(
            ohms_per_meter(7.283e-5),
            celsius(25.0),
            per_kelvin(0.00403),
        ),
        heat_capacity: HeatCapacity::from_layers([layer(1.116, 897.0), layer(0.5119, 481.0)])
            .unwrap(),
    }
}

/// Noon on June 10th at 30° north, in 40 °C air with a light crosswind.
pub(crate) fn june_noon() -> Environment {
    Environment {
        wind_speed: Velocity::new::<meter_per_second>(0.61),
        wind_angle: Angle::new::<degree>(90.0),
        ambient: celsius(40.0),
        elevation: Length::new::<meter>(0.0),
        latitude: Angle::new::<degree>(30.0),
        conductor_azimuth: Angle::new::<degree>(90.0),
        atmosphere: Atmosphere::Clear,
        time: date(2023, 6, 10).at(12, 0, 0, 0),
    }
}

/// Midnight at the same site and weather as [`june_noon`], with no sun.
pub(crate) fn june_midnight() -> Environment {
    Environment {
        time: date(2023, 6, 10).at(0, 0, 0, 0),
        ..june_noon()
    }
}
