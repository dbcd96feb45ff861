//! Building domain objects from raw records.

use tracing::{debug, info, warn};

use super::TrainRecord;
use crate::domain::{Compartment, DomainError, Journey, Station, TractionUnit, Train, Wagon};
use crate::timetable::Timetable;

/// Build a train from a record.
///
/// Tags resolve with their fallbacks, in input order. The passenger wagon
/// at index `i` receives the compartments listed at index `i`; a missing
/// entry leaves the wagon without compartments. Entries at non-passenger
/// positions are ignored.
pub fn build_train(record: &TrainRecord) -> Train {
    let traction_units = record
        .traction_unit_types
        .iter()
        .map(|tag| TractionUnit::from_tag(tag))
        .collect();

    let mut train = Train::new(&record.name, traction_units, record.has_control_car);

    for (index, tag) in record.wagon_types.iter().enumerate() {
        let mut wagon = Wagon::from_tag(tag);
        if let Some(passenger) = wagon.as_passenger_mut() {
            let numbers = record
                .compartment_numbers_by_wagon_index
                .get(index)
                .map(Vec::as_slice)
                .unwrap_or_default();
            for &number in numbers {
                passenger.add_compartment(Compartment::new(number));
            }
        }
        train.add_wagon(wagon);
    }

    train
}

/// Build a complete journey from a record.
///
/// # Errors
///
/// Returns [`DomainError::InvalidRoute`] if the record names fewer than
/// two stations.
pub fn build_journey(record: &TrainRecord) -> Result<Journey, DomainError> {
    let train = build_train(record);
    let route = record
        .route_station_names
        .iter()
        .map(|name| Station::new(name.as_str()))
        .collect();

    Journey::new(train, route)
}

/// Build a journey from a record and append it to the timetable.
///
/// On error the timetable is left untouched.
pub fn load_record(timetable: &mut Timetable, record: &TrainRecord) -> Result<(), DomainError> {
    let journey = build_journey(record)?;
    timetable.add_journey(journey);
    Ok(())
}

/// A record that could not be turned into a journey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    /// Position of the record in the input
    pub index: usize,
    /// Train name from the record
    pub name: String,
    pub error: DomainError,
}

/// Outcome of loading a batch of records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of journeys added to the timetable
    pub loaded: usize,
    /// Records that were skipped, in input order
    pub rejected: Vec<RejectedRecord>,
}

impl LoadReport {
    /// Returns true if every record was loaded.
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Load records in order, skipping the ones that fail.
///
/// Each record is all-or-nothing: a rejected record contributes nothing
/// to the timetable, and later records are still loaded.
pub fn load_records(timetable: &mut Timetable, records: &[TrainRecord]) -> LoadReport {
    let mut report = LoadReport::default();

    for (index, record) in records.iter().enumerate() {
        match load_record(timetable, record) {
            Ok(()) => {
                debug!(train = %record.name, "loaded record");
                report.loaded += 1;
            }
            Err(error) => {
                warn!(index, train = %record.name, %error, "rejected record");
                report.rejected.push(RejectedRecord {
                    index,
                    name: record.name.clone(),
                    error,
                });
            }
        }
    }

    info!(
        loaded = report.loaded,
        rejected = report.rejected.len(),
        "loaded train records"
    );
    report
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn record_with_route(route: Vec<String>) -> TrainRecord {
        TrainRecord {
            name: "T".into(),
            route_station_names: route,
            ..TrainRecord::default()
        }
    }

    proptest! {
        /// A record either becomes exactly one journey or changes nothing
        #[test]
        fn load_is_all_or_nothing(route in proptest::collection::vec("[A-Z][a-z]{1,8}", 0..6)) {
            let len = route.len();
            let mut timetable = Timetable::new();
            let result = load_record(&mut timetable, &record_with_route(route));

            if len >= 2 {
                prop_assert!(result.is_ok());
                prop_assert_eq!(timetable.len(), 1);
                prop_assert_eq!(timetable.journeys()[0].route().len(), len);
            } else {
                prop_assert_eq!(result, Err(DomainError::InvalidRoute { stations: len }));
                prop_assert!(timetable.is_empty());
            }
        }

        /// Passenger wagon compartments read back in input order
        #[test]
        fn compartment_order_preserved(numbers in proptest::collection::vec(any::<i64>(), 0..10)) {
            let record = TrainRecord {
                wagon_types: vec!["Personenwagen".into()],
                compartment_numbers_by_wagon_index: vec![numbers.clone()],
                ..record_with_route(vec!["A".into(), "B".into()])
            };
            let train = build_train(&record);
            let read_back: Vec<i64> = train.wagons()[0]
                .as_passenger()
                .unwrap()
                .compartment_numbers()
                .collect();
            prop_assert_eq!(read_back, numbers);
        }
    }
}
