//! Data transfer objects for web responses.

use serde::Serialize;

use crate::render::JourneyView;

/// Response for the timetable endpoint.
#[derive(Debug, Serialize)]
pub struct TimetableResponse {
    /// Journeys in timetable order (empty if there are none)
    pub journeys: Vec<JourneyView>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
