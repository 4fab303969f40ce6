use std::ops::Deref;

use uom::si::f64::{LinearMassDensity, SpecificHeatCapacity};

use crate::support::{
    constraint::{Constrained, ConstraintResult, NonNegative, StrictlyPositive},
    units::{LinearHeatCapacity, joules_per_meter_kelvin},
};

/// One material layer of a conductor, such as the aluminum strands or the steel core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    mass: Constrained<LinearMassDensity, NonNegative>,
    specific_heat: Constrained<SpecificHeatCapacity, NonNegative>,
}

impl Layer {
    /// Creates a layer from its mass per unit length and specific heat.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either value is negative or not a number.
    pub fn new(
        mass: LinearMassDensity,
        specific_heat: SpecificHeatCapacity,
    ) -> ConstraintResult<Self> {
        Ok(Self {
            mass: NonNegative::new(mass)?,
            specific_heat: NonNegative::new(specific_heat)?,
        })
    }

    /// Returns the layer's heat capacity per unit length, `m · c`.
    #[must_use]
    pub fn heat_capacity(&self) -> LinearHeatCapacity {
        *self.mass.as_ref() * *self.specific_heat.as_ref()
    }
}

/// Total heat capacity per unit length of a conductor.
///
/// The value must be strictly positive, since transient integration divides by it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct HeatCapacity(Constrained<LinearHeatCapacity, StrictlyPositive>);

impl HeatCapacity {
    /// Create a [`HeatCapacity`] from a value in J/(m·K).
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new(joules_per_meter_kelvin_value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(joules_per_meter_kelvin(joules_per_meter_kelvin_value))
    }

    /// Create a [`HeatCapacity`] from a heat-capacity-per-length quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not strictly positive.
    pub fn from_quantity(quantity: LinearHeatCapacity) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(quantity)?))
    }

    /// Create a [`HeatCapacity`] as the sum of `m · c` over the conductor layers.
    ///
    /// The sum does not depend on the order of the layers.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the total is zero, e.g. for an empty layer list, or if
    /// a layer's `m · c` is not a number.
    pub fn from_layers(layers: impl IntoIterator<Item = Layer>) -> ConstraintResult<Self> {
        let total: Constrained<LinearHeatCapacity, NonNegative> = layers
            .into_iter()
            .map(|layer| NonNegative::new(layer.heat_capacity()))
            .sum::<ConstraintResult<_>>()?;
        Self::from_quantity(total.into_inner())
    }
}

impl Deref for HeatCapacity {
    type Target = LinearHeatCapacity;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
