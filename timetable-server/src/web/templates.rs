//! Askama templates for the web frontend.

use askama::Template;

use crate::render::{JourneyView, TimetableSink};

/// Timetable page.
///
/// Acts as a render sink: pass it to
/// [`Timetable::render`](crate::timetable::Timetable::render), then
/// render the template.
#[derive(Template, Debug, Default)]
#[template(path = "timetable.html")]
pub struct TimetableTemplate {
    pub journeys: Vec<JourneyView>,
    pub placeholder: Option<String>,
}

impl TimetableSink for TimetableTemplate {
    fn empty(&mut self, placeholder: &str) {
        self.placeholder = Some(placeholder.to_string());
    }

    fn journey(&mut self, view: &JourneyView) {
        self.journeys.push(view.clone());
    }
}
