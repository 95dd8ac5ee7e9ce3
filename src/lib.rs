//! Terminal RSVP speed reader.
//!
//! Text is split into whitespace-delimited tokens and shown one word at a
//! time at a fixed focus point. [`reading::Scheduler`] owns the cursor and
//! the per-word deadline; [`app::App`] wires it to input sources, saved
//! notes and settings; [`ui`] draws it with ratatui.

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod notes;
pub mod reading;
pub mod ui;
