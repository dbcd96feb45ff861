//! Domain types for the rail timetable.
//!
//! Trains, their rolling stock and the journeys they run. Ownership is a
//! strict tree: a [`Journey`] owns its [`Train`] and its route of
//! [`Station`]s, a train owns its traction units and wagons, and a
//! passenger wagon owns its compartments.
//!
//! The only invariant checked at runtime is the route length of a
//! journey; everything else is encoded in the types.

mod compartment;
mod error;
mod journey;
mod station;
mod traction;
mod train;
mod wagon;

pub use compartment::Compartment;
pub use error::DomainError;
pub use journey::{Journey, MIN_ROUTE_STATIONS};
pub use station::Station;
pub use traction::TractionUnit;
pub use train::Train;
pub use wagon::{PassengerWagon, Wagon, WagonKind};
