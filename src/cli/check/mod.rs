//! Configuration validation command.

mod config;

pub use config::{execute_config, print_diagnostics};
