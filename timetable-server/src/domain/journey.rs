//! Journey type.
//!
//! A `Journey` is one train's traversal of an ordered route of stations.

use super::{DomainError, Station, Train};

/// Fewest stations a route may have.
pub const MIN_ROUTE_STATIONS: usize = 2;

/// One train running over an ordered route.
///
/// # Invariants
///
/// - The route has at least [`MIN_ROUTE_STATIONS`] stations
/// - Immutable once constructed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    train: Train,
    route: Vec<Station>,
}

impl Journey {
    /// Constructs a journey, taking ownership of the train and route.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidRoute`] if the route has fewer than
    /// two stations.
    ///
    /// # Examples
    ///
    /// ```
    /// use timetable_server::domain::{DomainError, Journey, Station, TractionUnit, Train};
    ///
    /// let train = Train::new("RB 40", vec![TractionUnit::Electric], false);
    /// let route = vec![Station::new("Essen"), Station::new("Hagen")];
    /// let journey = Journey::new(train.clone(), route).unwrap();
    /// assert_eq!(journey.origin().name(), "Essen");
    ///
    /// let err = Journey::new(train, vec![Station::new("Essen")]).unwrap_err();
    /// assert_eq!(err, DomainError::InvalidRoute { stations: 1 });
    /// ```
    pub fn new(train: Train, route: Vec<Station>) -> Result<Self, DomainError> {
        if route.len() < MIN_ROUTE_STATIONS {
            return Err(DomainError::InvalidRoute {
                stations: route.len(),
            });
        }

        Ok(Journey { train, route })
    }

    pub fn train(&self) -> &Train {
        &self.train
    }

    /// Returns the stations in travel order.
    pub fn route(&self) -> &[Station] {
        &self.route
    }

    /// Returns the first station.
    pub fn origin(&self) -> &Station {
        // Non-empty by construction
        &self.route[0]
    }

    /// Returns the last station.
    pub fn destination(&self) -> &Station {
        &self.route[self.route.len() - 1]
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn route(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<Station>> {
        proptest::collection::vec("[A-Za-zäöü ]{1,12}".prop_map(Station::new), len)
    }

    proptest! {
        /// Routes of two or more stations always build and keep their length
        #[test]
        fn long_routes_accepted(stations in route(2..30)) {
            let len = stations.len();
            let journey = Journey::new(Train::new("T", Vec::new(), false), stations).unwrap();
            prop_assert_eq!(journey.route().len(), len);
        }

        /// Routes shorter than two stations are always rejected
        #[test]
        fn short_routes_rejected(stations in route(0..2)) {
            let len = stations.len();
            let err = Journey::new(Train::new("T", Vec::new(), false), stations).unwrap_err();
            prop_assert_eq!(err, DomainError::InvalidRoute { stations: len });
        }
    }
}
