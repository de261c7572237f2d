// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Ignore predicates.
//!
//! An ignore predicate exempts a commit message from rule evaluation
//! entirely. Predicates are tested in order against the raw message text;
//! the first match vetoes the whole rule set for that message.

/// How a predicate matches the raw message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// Substring match, case-sensitive.
    Contains(String),
    /// Substring match on the lowercased message.
    ContainsIgnoreCase(String),
}

/// A named ignore predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnorePredicate {
    /// Short name, reported when the predicate vetoes a message.
    pub name: String,
    pub matcher: Matcher,
}

impl IgnorePredicate {
    /// Case-sensitive substring predicate named after its needle.
    pub fn contains(needle: impl Into<String>) -> Self {
        let needle = needle.into();
        Self {
            name: needle.clone(),
            matcher: Matcher::Contains(needle),
        }
    }

    /// Case-insensitive substring predicate named after its needle.
    pub fn contains_ignore_case(needle: impl Into<String>) -> Self {
        let needle = needle.into();
        Self {
            name: needle.to_lowercase(),
            matcher: Matcher::ContainsIgnoreCase(needle.to_lowercase()),
        }
    }

    /// Test the predicate against raw message text.
    pub fn matches(&self, message: &str) -> bool {
        match &self.matcher {
            Matcher::Contains(needle) => message.contains(needle.as_str()),
            Matcher::ContainsIgnoreCase(needle) => {
                message.to_lowercase().contains(needle.as_str())
            }
        }
    }
}

/// The built-in ignore predicates, applied when `default_ignores` is on:
/// merge commits, reverts, automated release commits, and work-in-progress
/// commits (case-insensitive).
pub fn default_ignores() -> Vec<IgnorePredicate> {
    vec![
        IgnorePredicate::contains("Merge"),
        IgnorePredicate::contains("Revert"),
        IgnorePredicate::contains("Release"),
        IgnorePredicate::contains_ignore_case("wip"),
    ]
}
