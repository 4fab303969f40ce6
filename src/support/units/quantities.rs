use uom::{
    si::{
        ISQ, Quantity, SI,
        electrical_resistance::ohm,
        energy::joule,
        f64::{ElectricalResistance, Energy, Length, Power, Ratio, TemperatureInterval},
        length::meter,
        power::watt,
        ratio::ratio,
        temperature_interval::kelvin as delta_kelvin,
    },
    typenum::{N1, N2, N3, P1, Z0},
};

/// Heat flow rate per unit length of conductor, W/m in SI.
pub type LinearHeatRate = Quantity<ISQ<P1, P1, N3, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Electrical resistance per unit length of conductor, Ω/m in SI.
pub type LinearResistance = Quantity<ISQ<P1, P1, N3, N2, Z0, Z0, Z0>, SI<f64>, f64>;

/// Heat capacity per unit length of conductor, J/(m·K) in SI.
pub type LinearHeatCapacity = Quantity<ISQ<P1, P1, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Relative change of a property per unit temperature, 1/K in SI.
pub type TemperatureCoefficient = Quantity<ISQ<Z0, Z0, Z0, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Rate of change of temperature, K/s in SI.
pub type TemperatureRate = Quantity<ISQ<Z0, Z0, N1, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Time taken per unit temperature change, s/K in SI.
pub type InverseTemperatureRate = Quantity<ISQ<Z0, Z0, P1, Z0, N1, Z0, Z0>, SI<f64>, f64>;

fn unit_length() -> Length {
    Length::new::<meter>(1.0)
}

/// Creates a [`LinearHeatRate`] from a value in W/m.
#[must_use]
pub fn watts_per_meter(value: f64) -> LinearHeatRate {
    Power::new::<watt>(value) / unit_length()
}

/// Creates a [`LinearResistance`] from a value in Ω/m.
#[must_use]
pub fn ohms_per_meter(value: f64) -> LinearResistance {
    ElectricalResistance::new::<ohm>(value) / unit_length()
}

/// Creates a [`LinearHeatCapacity`] from a value in J/(m·K).
#[must_use]
pub fn joules_per_meter_kelvin(value: f64) -> LinearHeatCapacity {
    Energy::new::<joule>(value) / (unit_length() * TemperatureInterval::new::<delta_kelvin>(1.0))
}

/// Creates a [`TemperatureCoefficient`] from a value in 1/K (equivalently 1/°C).
#[must_use]
pub fn per_kelvin(value: f64) -> TemperatureCoefficient {
    Ratio::new::<ratio>(value) / TemperatureInterval::new::<delta_kelvin>(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{ElectricCurrent, LinearMassDensity, SpecificHeatCapacity},
        electric_current::ampere,
        linear_mass_density::kilogram_per_meter,
        specific_heat_capacity::joule_per_kilogram_kelvin,
    };

    #[test]
    fn constructors_store_si_values() {
        assert_relative_eq!(watts_per_meter(12.5).value, 12.5);
        assert_relative_eq!(ohms_per_meter(7.283e-5).value, 7.283e-5);
        assert_relative_eq!(joules_per_meter_kelvin(1247.0).value, 1247.0);
        assert_relative_eq!(per_kelvin(0.00403).value, 0.00403);
    }

    #[test]
    fn joule_heating_has_heat_rate_dimensions() {
        let current = ElectricCurrent::new::<ampere>(100.0);
        let q: LinearHeatRate = ohms_per_meter(1e-4) * current * current;
        assert_relative_eq!(q.value, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn heat_rate_per_heat_capacity_is_a_temperature_rate() {
        let rate: TemperatureRate = watts_per_meter(12.47) / joules_per_meter_kelvin(1247.0);
        assert_relative_eq!(rate.value, 0.01, max_relative = 1e-12);

        let pace: InverseTemperatureRate = joules_per_meter_kelvin(1247.0) / watts_per_meter(12.47);
        assert_relative_eq!(pace.value, 100.0, max_relative = 1e-12);
    }

    #[test]
    fn mass_times_specific_heat_is_heat_capacity() {
        let c: LinearHeatCapacity = LinearMassDensity::new::<kilogram_per_meter>(1.116)
            * SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(897.0);
        assert_relative_eq!(c.value, 1.116 * 897.0);
    }
}
