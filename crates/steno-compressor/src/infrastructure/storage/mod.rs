//! Storage infrastructure: configuration file persistence.
//!
//! Reads the TOML configuration from the platform-appropriate directory and
//! falls back to defaults when the file does not exist yet.

pub mod config;
