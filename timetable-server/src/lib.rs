//! Rail timetable server.
//!
//! Models trains, their rolling stock and the journeys they run, builds
//! them from raw train records and renders the resulting timetable as
//! text, HTML or JSON.

pub mod config;
pub mod domain;
pub mod loader;
pub mod logging;
pub mod render;
pub mod timetable;
pub mod web;
