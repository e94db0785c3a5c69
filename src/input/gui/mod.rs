//! Windowed front end: winit event loop, egui panel and pixels surface.

pub mod app;
pub mod commands;
pub mod events;

pub use commands::run_viewer::{EXIT_DISPLAY_INIT, EXIT_RUNTIME, EXIT_USAGE, RunViewerCommand, RunViewerError};
