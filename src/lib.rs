// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! cmlint - Conventional Commit Message Linter
//!
//! Lints commit messages against a configurable rule set.
//!
//! # Features
//!
//! - **Rule Engine**: named rules with severities, evaluated independently
//! - **Ignore Predicates**: merge/revert/release/wip commits skip linting
//! - **Closed Sets**: allowed types and scopes are enforced in one place
//! - **Prompt Schema**: machine-readable schema for interactive composers
//!
//! # Example
//!
//! ```
//! use cmlint::config::CmlintConfig;
//! use cmlint::rules::RuleEngine;
//!
//! let config = CmlintConfig::default();
//! let engine = RuleEngine::new(
//!     config.rule_set().unwrap(),
//!     config.ignore_predicates(),
//! );
//!
//! let verdict = engine.evaluate("feat(editor): add multi-cursor support");
//! assert!(verdict.is_valid());
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod error;
pub mod ignore;
pub mod message;
pub mod prompt;
pub mod rules;

// Re-exports for convenience
pub use config::CmlintConfig;
pub use error::{CmlintError, Result};
pub use message::CommitMessage;
pub use rules::{RuleEngine, Verdict};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of cmlint.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
