//! scenario lookup and presentation logic for the Fire Cover Consultation Tool.
//!
//! the [`model`] module owns the fixed, read-only [`model::ScenarioTable`] and the
//! `MM:SS` duration codec. the [`present`] module maps a selected scenario onto the
//! display surfaces of the dashboard: metric tiles, narrative text, line charts,
//! the on-screen table and the CSV download.
pub mod model;
pub mod present;
