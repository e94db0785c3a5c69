//! Logger setup for the binaries. Library code only uses the `log` macros.

mod init;

pub use init::{LoggingConfig, init_logging};
