// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for cmlint.
//!
//! Handles loading and validating configuration from TOML files, with
//! built-in defaults matching the project's commit conventions.

pub mod default;
mod loader;
mod schema;

pub use default::example_config;
pub use loader::{find_config_file, find_config_file_from, load_config, parse_config};
pub use schema::*;
