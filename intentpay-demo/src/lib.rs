//! Command-line demo for the intentpay SDK.
//!
//! Wires the family crates into one registry, loads API settings from a TOML
//! file and the environment, and exposes the route / pay / status / chains
//! flows the binary runs.
//!
//! # Modules
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - the flows behind each subcommand
//! - [`config`] - configuration with environment variable expansion
//! - [`error`] - demo error type
//! - [`networks`] - registry and validator covering every chain family

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod networks;

pub use config::DemoConfig;
pub use error::DemoError;
