// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Interactive prompt schema.
//!
//! cmlint does not render prompts itself; this module only carries the
//! question texts and commit-type choices as serializable data, so external
//! composer tooling can drive an interactive commit flow that matches the
//! lint rules.

use serde::{Deserialize, Serialize};

/// The full prompt schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptSchema {
    pub questions: Questions,
}

/// Question texts for each step of an interactive commit flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Questions {
    #[serde(rename = "type")]
    pub commit_type: TypeQuestion,
    pub scope: Question,
    pub subject: Question,
    pub body: Question,
    pub is_breaking: Question,
    pub breaking_body: Question,
    pub breaking: Question,
    pub is_issue_affected: Question,
    pub issues_body: Question,
    pub issues: Question,
}

/// A free-form question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub description: String,
}

impl Question {
    fn new(description: &str) -> Self {
        Self {
            description: description.to_string(),
        }
    }
}

/// The commit-type question, with its closed choice list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeQuestion {
    pub description: String,
    pub choices: Vec<TypeChoice>,
}

/// One selectable commit type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeChoice {
    pub value: String,
    pub title: String,
    pub description: String,
    pub emoji: String,
}

impl TypeChoice {
    fn new(value: &str, title: &str, description: &str, emoji: &str) -> Self {
        Self {
            value: value.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            emoji: emoji.to_string(),
        }
    }
}

/// The built-in prompt schema.
pub fn default_prompt_schema() -> PromptSchema {
    PromptSchema {
        questions: Questions {
            commit_type: TypeQuestion {
                description: "Select the type of change that you're committing:".to_string(),
                choices: vec![
                    TypeChoice::new("feat", "Features", "A new feature", "✨"),
                    TypeChoice::new("fix", "Bug Fixes", "A bug fix", "🐛"),
                    TypeChoice::new("docs", "Documentation", "Documentation only changes", "📚"),
                    TypeChoice::new(
                        "style",
                        "Styles",
                        "Changes that do not affect the meaning of the code (white-space, formatting, missing semi-colons, etc)",
                        "💎",
                    ),
                    TypeChoice::new(
                        "refactor",
                        "Code Refactoring",
                        "A code change that neither fixes a bug nor adds a feature",
                        "📦",
                    ),
                    TypeChoice::new(
                        "perf",
                        "Performance Improvements",
                        "A code change that improves performance",
                        "🚀",
                    ),
                    TypeChoice::new(
                        "test",
                        "Tests",
                        "Adding missing tests or correcting existing tests",
                        "🚨",
                    ),
                    TypeChoice::new(
                        "build",
                        "Builds",
                        "Changes that affect the build system or external dependencies (example scopes: gulp, broccoli, npm)",
                        "🛠",
                    ),
                    TypeChoice::new(
                        "ci",
                        "Continuous Integrations",
                        "Changes to our CI configuration files and scripts (example scopes: Travis, Circle, BrowserStack, SauceLabs)",
                        "⚙️",
                    ),
                    TypeChoice::new(
                        "chore",
                        "Chores",
                        "Other changes that don't modify src or test files",
                        "♻️",
                    ),
                    TypeChoice::new("revert", "Reverts", "Reverts a previous commit", "🗑"),
                    TypeChoice::new(
                        "security",
                        "Security",
                        "Security improvements or fixes",
                        "🔒",
                    ),
                    TypeChoice::new("deps", "Dependencies", "Dependency updates", "📦"),
                    TypeChoice::new("ui", "User Interface", "UI/UX improvements", "🎨"),
                ],
            },
            scope: Question::new(
                "What is the scope of this change (e.g. component or file name)",
            ),
            subject: Question::new(
                "Write a short, imperative tense description of the change",
            ),
            body: Question::new("Provide a longer description of the change"),
            is_breaking: Question::new("Are there any breaking changes?"),
            breaking_body: Question::new(
                "A BREAKING CHANGE commit requires a body. Please enter a longer description of the commit itself",
            ),
            breaking: Question::new("Describe the breaking changes"),
            is_issue_affected: Question::new("Does this change affect any open issues?"),
            issues_body: Question::new(
                "If issues are closed, the commit requires a body. Please enter a longer description of the commit itself",
            ),
            issues: Question::new("Add issue references (e.g. \"fix #123\", \"re #123\".)"),
        },
    }
}
