//! Loading raw train records into the timetable.
//!
//! A [`TrainRecord`] is the external input shape: tag lists and names,
//! nothing validated. [`build_journey`] turns one record into a
//! [`Journey`](crate::domain::Journey); [`load_record`] and
//! [`load_records`] append the results to a
//! [`Timetable`](crate::timetable::Timetable).

mod builder;
mod error;
mod record;
mod sample;

pub use builder::{
    LoadReport, RejectedRecord, build_journey, build_train, load_record, load_records,
};
pub use error::LoadError;
pub use record::{TrainRecord, parse_records, read_records};
pub use sample::sample_records;
