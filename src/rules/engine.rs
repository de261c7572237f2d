// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit message evaluation.

use crate::ignore::IgnorePredicate;
use crate::message::CommitMessage;

use super::rule::RuleSet;
use super::verdict::Verdict;

/// Rule engine holding an immutable rule set and ignore predicates.
///
/// Evaluation is a pure function of the message and this configuration:
/// no shared mutable state, so one engine can evaluate any number of
/// messages, in any order.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rule_set: RuleSet,
    ignores: Vec<IgnorePredicate>,
}

impl RuleEngine {
    /// Create a new rule engine.
    pub fn new(rule_set: RuleSet, ignores: Vec<IgnorePredicate>) -> Self {
        Self { rule_set, ignores }
    }

    /// Evaluate a raw commit message.
    ///
    /// Ignore predicates are tested first, in order, against the raw text;
    /// the first match short-circuits to a skipped verdict. Otherwise every
    /// enabled rule runs; a failing rule never halts the ones after it.
    pub fn evaluate(&self, raw: &str) -> Verdict {
        if let Some(predicate) = self.ignores.iter().find(|p| p.matches(raw)) {
            tracing::debug!(predicate = %predicate.name, "message vetoed by ignore predicate");
            return Verdict::skipped(raw, predicate.name.clone());
        }

        let message = CommitMessage::parse(raw);
        let mut verdict = Verdict::new(raw);

        for rule in self.rule_set.iter() {
            if let Some(outcome) = rule.check(&message) {
                verdict.outcomes.push(outcome);
            }
        }

        verdict
    }
}
