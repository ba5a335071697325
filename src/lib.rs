//! kalshibot - autonomous prediction market trading for Kalshi.
//!
//! This crate holds the bot's startup core: configuration is resolved from
//! environment inputs into an immutable snapshot, validated into errors and
//! warnings, and logging is wired before anything else runs.
//!
//! # Modules
//!
//! - [`config`] - Environment-driven configuration, derivation rules and validation
//! - [`logging`] - One-shot installation of the rotating file and stdout sinks
//! - [`app`] - Bot lifecycle around the validated snapshot
//! - [`cli`] - `run` and `check` commands
//! - [`error`] - Error types for the crate

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
