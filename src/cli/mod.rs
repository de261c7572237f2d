// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI module for cmlint.

pub mod args;
mod dispatch;

pub use args::{Cli, Commands, OutputFormat};
pub use dispatch::run;
