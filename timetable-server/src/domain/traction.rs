//! Traction unit types.

use std::fmt;

/// A motive unit attached to a train.
///
/// `DieselLok` and `ELok` tags map to the diesel and electric variants.
/// Any other tag is kept as a generic unit labelled with the tag itself.
///
/// # Examples
///
/// ```
/// use timetable_server::domain::TractionUnit;
///
/// assert_eq!(TractionUnit::from_tag("ELok").label(), "E-Lok");
/// assert_eq!(TractionUnit::from_tag("DieselLok").label(), "Diesel-Lok");
/// assert_eq!(TractionUnit::from_tag("Dampflok").label(), "Dampflok");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TractionUnit {
    /// Diesel locomotive
    Diesel,
    /// Electric locomotive
    Electric,
    /// Unrecognised unit, labelled with its input tag
    Other(String),
}

impl TractionUnit {
    /// Resolve an input type tag.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "DieselLok" => TractionUnit::Diesel,
            "ELok" => TractionUnit::Electric,
            other => TractionUnit::Other(other.to_string()),
        }
    }

    /// The label shown in the timetable header.
    pub fn label(&self) -> &str {
        match self {
            TractionUnit::Diesel => "Diesel-Lok",
            TractionUnit::Electric => "E-Lok",
            TractionUnit::Other(tag) => tag,
        }
    }
}

impl fmt::Display for TractionUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
