//! Train type.

use super::{PassengerWagon, TractionUnit, Wagon};

/// A train: traction units, an optional control car and ordered wagons.
///
/// The type does not reject an empty traction unit list; the loader
/// always supplies whatever the input record lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Train {
    name: String,
    traction_units: Vec<TractionUnit>,
    has_control_car: bool,
    wagons: Vec<Wagon>,
}

impl Train {
    /// Creates a train with no wagons.
    pub fn new(
        name: impl Into<String>,
        traction_units: Vec<TractionUnit>,
        has_control_car: bool,
    ) -> Self {
        Self {
            name: name.into(),
            traction_units,
            has_control_car,
            wagons: Vec::new(),
        }
    }

    /// Appends a wagon to the end of the train.
    pub fn add_wagon(&mut self, wagon: Wagon) {
        self.wagons.push(wagon);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn traction_units(&self) -> &[TractionUnit] {
        &self.traction_units
    }

    pub fn has_control_car(&self) -> bool {
        self.has_control_car
    }

    /// Returns the wagons in coupling order.
    pub fn wagons(&self) -> &[Wagon] {
        &self.wagons
    }

    /// Returns the passenger wagons in coupling order.
    pub fn passenger_wagons(&self) -> impl Iterator<Item = &PassengerWagon> {
        self.wagons.iter().filter_map(Wagon::as_passenger)
    }
}
