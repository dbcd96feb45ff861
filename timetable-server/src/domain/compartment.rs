//! Compartment type.

/// A numbered seating unit inside a passenger wagon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Compartment {
    number: i64,
}

impl Compartment {
    pub fn new(number: i64) -> Self {
        Self { number }
    }

    pub fn number(&self) -> i64 {
        self.number
    }
}
