//! Command-line interface
//!
//! This module contains the CLI commands and argument parsing
//! for inspecting a node's configuration.

pub mod commands;

pub use commands::{Command, Opt};
