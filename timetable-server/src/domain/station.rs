//! Station type.

use std::fmt;

/// A named point on a route.
///
/// Stations are created fresh for every route entry; two stations with the
/// same name on different journeys are separate values.
///
/// # Examples
///
/// ```
/// use timetable_server::domain::Station;
///
/// let essen = Station::new("Essen");
/// assert_eq!(essen.name(), "Essen");
/// assert_eq!(essen.to_string(), "Essen");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Station {
    name: String,
}

impl Station {
    /// Creates a station with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the station name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_kept_verbatim() {
        let station = Station::new("Kassel-Wilhelmshöhe");
        assert_eq!(station.name(), "Kassel-Wilhelmshöhe");
    }

    #[test]
    fn empty_name_allowed() {
        assert_eq!(Station::new("").name(), "");
    }

    #[test]
    fn display() {
        let station = Station::new("Hamburg Hbf");
        assert_eq!(format!("{}", station), "Hamburg Hbf");
    }
}
