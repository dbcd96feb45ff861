//! The timetable: an ordered, append-only collection of journeys.

use tracing::debug;

use crate::domain::Journey;
use crate::render::{JourneyView, NO_JOURNEYS, TextSink, TimetableSink};

/// Ordered collection of journeys.
///
/// Journeys are kept in insertion order and never removed or reordered.
#[derive(Debug, Clone, Default)]
pub struct Timetable {
    journeys: Vec<Journey>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a journey.
    pub fn add_journey(&mut self, journey: Journey) {
        debug!(
            train = journey.train().name(),
            stations = journey.route().len(),
            "adding journey"
        );
        self.journeys.push(journey);
    }

    /// Returns the journeys in insertion order.
    pub fn journeys(&self) -> &[Journey] {
        &self.journeys
    }

    pub fn len(&self) -> usize {
        self.journeys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.journeys.is_empty()
    }

    /// Render into a presentation sink.
    ///
    /// An empty timetable produces only the [`NO_JOURNEYS`] placeholder.
    pub fn render<S: TimetableSink + ?Sized>(&self, sink: &mut S) {
        if self.journeys.is_empty() {
            sink.empty(NO_JOURNEYS);
            return;
        }

        for journey in &self.journeys {
            sink.journey(&JourneyView::from_journey(journey));
        }
    }

    /// Render as plain text lines.
    pub fn render_text(&self) -> Vec<String> {
        let mut sink = TextSink::new();
        self.render(&mut sink);
        sink.into_lines()
    }

    /// Returns one view per journey, in order.
    pub fn views(&self) -> Vec<JourneyView> {
        let mut views = Vec::with_capacity(self.journeys.len());
        self.render(&mut views);
        views
    }
}
