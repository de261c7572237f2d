// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit message linting.
//!
//! A rule set is immutable configuration built once at startup; evaluation
//! of a message against it is a pure function.

mod engine;
mod rule;
mod verdict;

pub use engine::RuleEngine;
pub use rule::{Applicability, CaseForm, Constraint, Rule, RuleName, RuleSet, Severity};
pub use verdict::{RuleOutcome, Status, Verdict};
