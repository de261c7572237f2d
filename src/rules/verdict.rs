// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Verdict types produced by rule evaluation.

use console::{style, Style};

use super::rule::Severity;

/// Outcome of a single rule against one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    /// Rule name, e.g. `subject-max-length`.
    pub name: String,
    /// Whether the rule passed.
    pub passed: bool,
    /// Configured severity of the rule.
    pub severity: Severity,
    /// Human-readable detail, set when the rule failed.
    pub detail: Option<String>,
}

impl RuleOutcome {
    /// Format a failed outcome for terminal output.
    pub fn format(&self) -> String {
        let (prefix, code_style) = match self.severity {
            Severity::Error => (style("✗").red().bold(), Style::new().red()),
            _ => (style("⚠").yellow().bold(), Style::new().yellow()),
        };

        format!(
            "{} {} {}",
            prefix,
            code_style.apply_to(&self.name),
            self.detail.as_deref().unwrap_or("failed")
        )
    }
}

/// Overall status of a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No rule failed (or evaluation was skipped by an ignore predicate).
    Clean,
    /// Only warning-severity rules failed.
    Warning,
    /// At least one error-severity rule failed.
    Error,
}

impl Status {
    /// Status name for machine output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Clean => "clean",
            Status::Warning => "warning",
            Status::Error => "error",
        }
    }
}

/// Result of evaluating one commit message against a rule set.
#[derive(Debug, Clone)]
pub struct Verdict {
    /// The raw message that was evaluated.
    pub message: String,
    /// Label for the input (file path, "-" for stdin, etc.).
    pub input: Option<String>,
    /// True when an ignore predicate vetoed evaluation; no rules ran.
    pub skipped: bool,
    /// Name of the matching ignore predicate, when skipped.
    pub skipped_by: Option<String>,
    /// Per-rule outcomes, in rule-set order.
    pub outcomes: Vec<RuleOutcome>,
}

impl Verdict {
    /// Create an empty verdict for a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            input: None,
            skipped: false,
            skipped_by: None,
            outcomes: Vec::new(),
        }
    }

    /// Create a skipped verdict (ignore predicate matched).
    pub fn skipped(message: impl Into<String>, predicate: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            input: None,
            skipped: true,
            skipped_by: Some(predicate.into()),
            outcomes: Vec::new(),
        }
    }

    /// Failed outcomes with the given severity.
    fn failed_with(&self, severity: Severity) -> usize {
        self.outcomes
            .iter()
            .filter(|o| !o.passed && o.severity == severity)
            .count()
    }

    /// Number of error-severity failures.
    pub fn error_count(&self) -> usize {
        self.failed_with(Severity::Error)
    }

    /// Number of warning-severity failures.
    pub fn warning_count(&self) -> usize {
        self.failed_with(Severity::Warning)
    }

    /// Aggregate status over all outcomes.
    pub fn status(&self) -> Status {
        if self.error_count() > 0 {
            Status::Error
        } else if self.warning_count() > 0 {
            Status::Warning
        } else {
            Status::Clean
        }
    }

    /// Whether the message passed (no error-severity failures).
    pub fn is_valid(&self) -> bool {
        self.status() != Status::Error
    }

    /// Print the verdict in text form.
    pub fn print_text(&self, help_url: Option<&str>) {
        let first_line = self.message.lines().next().unwrap_or("");

        if self.skipped {
            println!(
                "{} {} {}",
                style("○").dim(),
                first_line,
                style(format!(
                    "(skipped: {})",
                    self.skipped_by.as_deref().unwrap_or("ignored")
                ))
                .dim()
            );
            return;
        }

        let icon = match self.status() {
            Status::Clean => style("✓").green().bold(),
            Status::Warning => style("⚠").yellow().bold(),
            Status::Error => style("✗").red().bold(),
        };
        if let Some(ref input) = self.input {
            println!("{} {} {}", icon, style(input).cyan(), first_line);
        } else {
            println!("{} {}", icon, first_line);
        }

        for outcome in self.outcomes.iter().filter(|o| !o.passed) {
            println!("  {}", outcome.format());
        }

        if self.status() == Status::Error {
            if let Some(url) = help_url {
                println!("  {} {}", style("→").dim(), style(url).dim());
            }
        }
    }

    /// Print the verdict as JSON.
    pub fn print_json(&self) {
        let json = serde_json::json!({
            "input": self.input,
            "message": self.message,
            "skipped": self.skipped,
            "skipped_by": self.skipped_by,
            "status": self.status().as_str(),
            "valid": self.is_valid(),
            "outcomes": self.outcomes.iter().map(|o| {
                serde_json::json!({
                    "name": o.name,
                    "passed": o.passed,
                    "severity": o.severity.as_level(),
                    "detail": o.detail,
                })
            }).collect::<Vec<_>>(),
        });

        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
    }

    /// One-line summary.
    pub fn summary(&self) -> String {
        if self.skipped {
            return "Skipped".to_string();
        }
        match self.status() {
            Status::Clean => "Valid".to_string(),
            Status::Warning => format!("Valid ({} warnings)", self.warning_count()),
            Status::Error => format!(
                "Invalid ({} errors, {} warnings)",
                self.error_count(),
                self.warning_count()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(name: &str, passed: bool, severity: Severity) -> RuleOutcome {
        RuleOutcome {
            name: name.to_string(),
            passed,
            severity,
            detail: if passed { None } else { Some("failed".to_string()) },
        }
    }

    #[test]
    fn test_clean_verdict() {
        let mut verdict = Verdict::new("feat: test");
        verdict.outcomes.push(outcome("type-enum", true, Severity::Error));
        assert_eq!(verdict.status(), Status::Clean);
        assert!(verdict.is_valid());
        assert_eq!(verdict.summary(), "Valid");
    }

    #[test]
    fn test_warning_only_is_valid() {
        let mut verdict = Verdict::new("feat: test");
        verdict
            .outcomes
            .push(outcome("subject-case", false, Severity::Warning));
        assert_eq!(verdict.status(), Status::Warning);
        assert!(verdict.is_valid());
        assert!(verdict.summary().contains("1 warnings"));
    }

    #[test]
    fn test_error_dominates_warning() {
        let mut verdict = Verdict::new("feat: test");
        verdict
            .outcomes
            .push(outcome("subject-case", false, Severity::Warning));
        verdict
            .outcomes
            .push(outcome("type-enum", false, Severity::Error));
        assert_eq!(verdict.status(), Status::Error);
        assert!(!verdict.is_valid());
        assert_eq!(verdict.error_count(), 1);
        assert_eq!(verdict.warning_count(), 1);
    }

    #[test]
    fn test_skipped_verdict_is_valid() {
        let verdict = Verdict::skipped("chore: wip", "wip");
        assert!(verdict.skipped);
        assert!(verdict.is_valid());
        assert_eq!(verdict.status(), Status::Clean);
        assert_eq!(verdict.summary(), "Skipped");
    }

    #[test]
    fn test_outcome_format_contains_name() {
        let o = outcome("header-max-length", false, Severity::Error);
        assert!(o.format().contains("header-max-length"));
    }
}
