//! Input adapters: command-line parsing and the windowed event loop.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
