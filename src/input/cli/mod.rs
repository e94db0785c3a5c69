pub mod args;

pub use args::{SnapshotCli, ViewerArgs, ViewerCli};
