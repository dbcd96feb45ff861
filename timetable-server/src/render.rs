//! Read-only views of the timetable for presentation.
//!
//! The timetable drives a [`TimetableSink`] with either a single
//! placeholder or one [`JourneyView`] per journey. What the sink does with
//! them (plain lines, HTML, JSON) is up to the sink.

use serde::Serialize;

use crate::domain::{Journey, Station, TractionUnit, Wagon};

/// Shown instead of journeys when the timetable is empty.
pub const NO_JOURNEYS: &str = "Keine Fahrten im Fahrplan.";

const TRACTION_SEPARATOR: &str = " + ";
const CONTROL_CAR_SUFFIX: &str = " + Steuerwagen";
const ROUTE_SEPARATOR: &str = " ➝ ";
const LIST_SEPARATOR: &str = ", ";

/// Display strings for one journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JourneyView {
    /// Train name, traction labels and control car, e.g. `S1 [E-Lok + E-Lok]`
    pub header: String,
    /// Station names joined in travel order
    pub route: String,
    /// Wagon type names joined in coupling order
    pub wagons: String,
    /// One `Abteile: …` line per passenger wagon that has compartments
    pub compartments: Vec<String>,
}

impl JourneyView {
    /// Create from a domain Journey.
    pub fn from_journey(journey: &Journey) -> Self {
        let train = journey.train();

        let traction = train
            .traction_units()
            .iter()
            .map(TractionUnit::label)
            .collect::<Vec<_>>()
            .join(TRACTION_SEPARATOR);
        let suffix = if train.has_control_car() {
            CONTROL_CAR_SUFFIX
        } else {
            ""
        };

        let route = journey
            .route()
            .iter()
            .map(Station::name)
            .collect::<Vec<_>>()
            .join(ROUTE_SEPARATOR);

        let wagons = train
            .wagons()
            .iter()
            .map(Wagon::type_name)
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR);

        let compartments = train
            .passenger_wagons()
            .filter(|w| !w.compartments().is_empty())
            .map(|w| {
                let numbers = w
                    .compartment_numbers()
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join(LIST_SEPARATOR);
                format!("Abteile: {numbers}")
            })
            .collect();

        JourneyView {
            header: format!("{} [{traction}{suffix}]", train.name()),
            route,
            wagons,
            compartments,
        }
    }

    /// The route line, e.g. `Route: Essen ➝ Hagen`.
    pub fn route_line(&self) -> String {
        format!("Route: {}", self.route)
    }

    /// The wagon summary line, e.g. `Waggons: Personenwagen, Speisewagen`.
    pub fn wagon_line(&self) -> String {
        format!("Waggons: {}", self.wagons)
    }

    /// All lines for this journey in display order.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(3 + self.compartments.len());
        lines.push(self.header.clone());
        lines.push(self.route_line());
        lines.push(self.wagon_line());
        lines.extend(self.compartments.iter().cloned());
        lines
    }
}

/// Receives rendered timetable content.
///
/// A render pass calls either `empty` once, or `journey` once per journey
/// in timetable order. Never both.
pub trait TimetableSink {
    /// Called when there are no journeys to show.
    fn empty(&mut self, placeholder: &str);

    /// Called for each journey, in order.
    fn journey(&mut self, view: &JourneyView);
}

/// Collects rendered output as plain text lines.
#[derive(Debug, Clone, Default)]
pub struct TextSink {
    lines: Vec<String>,
}

impl TextSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl TimetableSink for TextSink {
    fn empty(&mut self, placeholder: &str) {
        self.lines.push(placeholder.to_string());
    }

    fn journey(&mut self, view: &JourneyView) {
        self.lines.extend(view.lines());
    }
}

/// Collects the journey views themselves.
impl TimetableSink for Vec<JourneyView> {
    fn empty(&mut self, _placeholder: &str) {}

    fn journey(&mut self, view: &JourneyView) {
        self.push(view.clone());
    }
}
