//! Application state for the web layer.

use std::sync::Arc;

use crate::timetable::Timetable;

/// Shared application state.
///
/// The timetable is fully loaded before the server starts and only read
/// afterwards.
#[derive(Clone)]
pub struct AppState {
    pub timetable: Arc<Timetable>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(timetable: Timetable) -> Self {
        Self {
            timetable: Arc::new(timetable),
        }
    }
}
