//! Web layer for the timetable.
//!
//! Serves the rendered timetable as an HTML page and as JSON.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
