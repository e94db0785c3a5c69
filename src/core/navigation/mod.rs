pub mod controls;
pub mod step;

pub use controls::InputSnapshot;
pub use step::{NavigationReport, NavigationSettings, apply_input};
