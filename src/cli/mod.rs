//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, subcommand handlers
//! and the grid output formats.

mod args;
mod commands;
mod enums;
mod output;

pub use args::{Args, Command, ConfigAction};
pub use commands::{handle_config_action, load_config};
pub use enums::{FilterChoice, OutputFormat};
pub use output::write_grid;
