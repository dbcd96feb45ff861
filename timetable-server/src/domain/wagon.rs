//! Wagon types.
//!
//! A wagon is one of a small closed set of kinds. Only passenger wagons
//! carry compartments, so only [`PassengerWagon`] has `add_compartment`;
//! reach it through [`Wagon::as_passenger_mut`].

use std::fmt;

use super::Compartment;

/// The kind of a wagon, without any payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WagonKind {
    Passenger,
    Dining,
    Freight,
}

impl WagonKind {
    /// Resolve an input type tag.
    ///
    /// Recognised tags are `Personenwagen`, `Speisewagen` and
    /// `Gitterwaggon`. Anything else is treated as a freight wagon.
    ///
    /// ```
    /// use timetable_server::domain::WagonKind;
    ///
    /// assert_eq!(WagonKind::from_tag("Speisewagen"), WagonKind::Dining);
    /// assert_eq!(WagonKind::from_tag("Kesselwagen"), WagonKind::Freight);
    /// ```
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Personenwagen" => WagonKind::Passenger,
            "Speisewagen" => WagonKind::Dining,
            _ => WagonKind::Freight,
        }
    }

    /// The type name shown in the timetable.
    pub fn type_name(&self) -> &'static str {
        match self {
            WagonKind::Passenger => "Personenwagen",
            WagonKind::Dining => "Speisewagen",
            WagonKind::Freight => "Gitterwaggon",
        }
    }
}

impl fmt::Display for WagonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A passenger wagon and its ordered compartments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassengerWagon {
    compartments: Vec<Compartment>,
}

impl PassengerWagon {
    /// Creates a passenger wagon with no compartments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a compartment. Insertion order is preserved.
    pub fn add_compartment(&mut self, compartment: Compartment) {
        self.compartments.push(compartment);
    }

    /// Returns the compartments in insertion order.
    pub fn compartments(&self) -> &[Compartment] {
        &self.compartments
    }

    /// Returns the compartment numbers in insertion order.
    pub fn compartment_numbers(&self) -> impl Iterator<Item = i64> + '_ {
        self.compartments.iter().map(Compartment::number)
    }
}

/// A wagon attached to a train.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Wagon {
    Passenger(PassengerWagon),
    Dining,
    Freight,
}

impl Wagon {
    /// Builds an empty wagon of the kind named by `tag`.
    ///
    /// Unrecognised tags produce a freight wagon.
    pub fn from_tag(tag: &str) -> Self {
        Self::of_kind(WagonKind::from_tag(tag))
    }

    /// Builds an empty wagon of the given kind.
    pub fn of_kind(kind: WagonKind) -> Self {
        match kind {
            WagonKind::Passenger => Wagon::Passenger(PassengerWagon::new()),
            WagonKind::Dining => Wagon::Dining,
            WagonKind::Freight => Wagon::Freight,
        }
    }

    pub fn kind(&self) -> WagonKind {
        match self {
            Wagon::Passenger(_) => WagonKind::Passenger,
            Wagon::Dining => WagonKind::Dining,
            Wagon::Freight => WagonKind::Freight,
        }
    }

    /// The type name shown in the timetable.
    pub fn type_name(&self) -> &'static str {
        self.kind().type_name()
    }

    /// Returns the passenger wagon if this is one.
    pub fn as_passenger(&self) -> Option<&PassengerWagon> {
        match self {
            Wagon::Passenger(wagon) => Some(wagon),
            Wagon::Dining | Wagon::Freight => None,
        }
    }

    /// Returns the passenger wagon mutably if this is one.
    pub fn as_passenger_mut(&mut self) -> Option<&mut PassengerWagon> {
        match self {
            Wagon::Passenger(wagon) => Some(wagon),
            Wagon::Dining | Wagon::Freight => None,
        }
    }
}

impl From<PassengerWagon> for Wagon {
    fn from(wagon: PassengerWagon) -> Self {
        Wagon::Passenger(wagon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognised_tags() {
        assert_eq!(WagonKind::from_tag("Personenwagen"), WagonKind::Passenger);
        assert_eq!(WagonKind::from_tag("Speisewagen"), WagonKind::Dining);
        assert_eq!(WagonKind::from_tag("Gitterwaggon"), WagonKind::Freight);
    }

    #[test]
    fn unknown_tag_falls_back_to_freight() {
        assert_eq!(Wagon::from_tag("Schlafwagen"), Wagon::Freight);
        assert_eq!(Wagon::from_tag(""), Wagon::Freight);
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert_eq!(Wagon::from_tag("personenwagen"), Wagon::Freight);
        assert_eq!(Wagon::from_tag("SPEISEWAGEN"), Wagon::Freight);
    }

    #[test]
    fn type_names() {
        assert_eq!(Wagon::from_tag("Personenwagen").type_name(), "Personenwagen");
        assert_eq!(Wagon::from_tag("Speisewagen").type_name(), "Speisewagen");
        assert_eq!(Wagon::from_tag("Gitterwaggon").type_name(), "Gitterwaggon");
        assert_eq!(Wagon::from_tag("Autotransportwagen").type_name(), "Gitterwaggon");
        assert_eq!(WagonKind::Dining.to_string(), "Speisewagen");
    }

    #[test]
    fn compartments_keep_insertion_order() {
        let mut wagon = PassengerWagon::new();
        wagon.add_compartment(Compartment::new(1));
        wagon.add_compartment(Compartment::new(2));
        wagon.add_compartment(Compartment::new(7));

        let numbers: Vec<i64> = wagon.compartment_numbers().collect();
        assert_eq!(numbers, vec![1, 2, 7]);
        assert_eq!(wagon.compartments().len(), 3);
    }

    #[test]
    fn passenger_capability() {
        let mut passenger = Wagon::from_tag("Personenwagen");
        assert_eq!(passenger.kind(), WagonKind::Passenger);
        passenger
            .as_passenger_mut()
            .unwrap()
            .add_compartment(Compartment::new(4));
        assert_eq!(passenger.as_passenger().unwrap().compartments().len(), 1);

        let mut dining = Wagon::from_tag("Speisewagen");
        assert_eq!(dining.kind(), WagonKind::Dining);
        assert!(dining.as_passenger().is_none());
        assert!(dining.as_passenger_mut().is_none());
    }

    #[test]
    fn new_passenger_wagon_is_empty() {
        let wagon = Wagon::of_kind(WagonKind::Passenger);
        assert_eq!(wagon, Wagon::Passenger(PassengerWagon::new()));
        assert!(wagon.as_passenger().unwrap().compartments().is_empty());
    }
}
