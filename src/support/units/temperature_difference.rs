use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// Subtracting two [`ThermodynamicTemperature`] values in [`uom`] does not
/// yield a [`TemperatureInterval`], but conductor models need one constantly:
/// the surface-to-air rise that drives convection, or the offset from the
/// reference temperature of a resistance model.
///
/// See [#380](https://github.com/iliekturtles/uom/issues/380) for background.
///
/// ```
/// use twine_ieee738::support::units::TemperatureDifference;
/// use uom::si::{
///     f64::ThermodynamicTemperature,
///     temperature_interval::kelvin as delta_kelvin,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// let surface = ThermodynamicTemperature::new::<degree_celsius>(100.0);
/// let air = ThermodynamicTemperature::new::<degree_celsius>(40.0);
/// let rise = surface.minus(air).get::<delta_kelvin>();
/// assert!((rise - 60.0).abs() < 1e-9);
/// ```
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}
