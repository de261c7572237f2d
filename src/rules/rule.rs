// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule model: severity levels, applicability polarity, constraints, and
//! the closed set of known rule names.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CmlintError, ConfigError, Result};
use crate::message::CommitMessage;

use super::verdict::RuleOutcome;

/// Rule strictness level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Level 0: the rule is kept in the set but never evaluated.
    Disabled,
    /// Level 1: failures are reported but do not block.
    Warning,
    /// Level 2: failures block.
    Error,
}

impl Severity {
    /// Numeric level (0-2).
    pub fn as_level(&self) -> u8 {
        match self {
            Severity::Disabled => 0,
            Severity::Warning => 1,
            Severity::Error => 2,
        }
    }

    /// Lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Disabled => "disabled",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "disabled" | "0" => Ok(Severity::Disabled),
            "warning" | "1" => Ok(Severity::Warning),
            "error" | "2" => Ok(Severity::Error),
            _ => Err(ConfigError::UnknownSeverity {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        // Accept either the numeric level (commitlint style) or the name.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Level(i64),
            Name(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Level(0) => Ok(Severity::Disabled),
            Repr::Level(1) => Ok(Severity::Warning),
            Repr::Level(2) => Ok(Severity::Error),
            Repr::Level(n) => Err(D::Error::custom(format!(
                "unknown severity level: {} (expected 0-2)",
                n
            ))),
            Repr::Name(s) => s.parse().map_err(|e: ConfigError| D::Error::custom(e)),
        }
    }
}

/// Whether the constraint must hold (`always`) or must not (`never`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    Always,
    Never,
}

impl std::str::FromStr for Applicability {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "always" => Ok(Applicability::Always),
            "never" => Ok(Applicability::Never),
            _ => Err(ConfigError::UnknownApplicability {
                value: s.to_string(),
            }),
        }
    }
}

/// Case form for case rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseForm {
    #[serde(rename = "lower-case")]
    LowerCase,
    #[serde(rename = "upper-case")]
    UpperCase,
}

impl CaseForm {
    /// Check whether a value is in this case form.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            CaseForm::LowerCase => value == value.to_lowercase(),
            CaseForm::UpperCase => value == value.to_uppercase(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseForm::LowerCase => "lower-case",
            CaseForm::UpperCase => "upper-case",
        }
    }
}

/// The closed set of known rule names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleName {
    TypeEnum,
    TypeCase,
    TypeEmpty,
    ScopeEnum,
    ScopeCase,
    SubjectCase,
    SubjectEmpty,
    SubjectMinLength,
    SubjectMaxLength,
    SubjectFullStop,
    HeaderMaxLength,
    BodyMaxLineLength,
    FooterMaxLineLength,
}

impl RuleName {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleName::TypeEnum => "type-enum",
            RuleName::TypeCase => "type-case",
            RuleName::TypeEmpty => "type-empty",
            RuleName::ScopeEnum => "scope-enum",
            RuleName::ScopeCase => "scope-case",
            RuleName::SubjectCase => "subject-case",
            RuleName::SubjectEmpty => "subject-empty",
            RuleName::SubjectMinLength => "subject-min-length",
            RuleName::SubjectMaxLength => "subject-max-length",
            RuleName::SubjectFullStop => "subject-full-stop",
            RuleName::HeaderMaxLength => "header-max-length",
            RuleName::BodyMaxLineLength => "body-max-line-length",
            RuleName::FooterMaxLineLength => "footer-max-line-length",
        }
    }
}

impl std::fmt::Display for RuleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The constraint a rule applies to its target field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// Membership in a closed set, tested on the lowercased field value.
    Enum(Vec<String>),
    /// Case form of the field value.
    Case(CaseForm),
    /// Minimum character count.
    MinLength(usize),
    /// Maximum character count.
    MaxLength(usize),
    /// Maximum character count per line (body/footer).
    MaxLineLength(usize),
    /// The field ends with the given suffix.
    Suffix(String),
    /// The field is empty after trimming whitespace.
    Empty,
}

/// A single named validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub name: RuleName,
    pub severity: Severity,
    pub applicability: Applicability,
    pub constraint: Constraint,
}

impl Rule {
    /// Evaluate the rule against a message.
    ///
    /// Returns `None` for disabled rules; otherwise an outcome whose `passed`
    /// flag already accounts for the `never` polarity.
    pub fn check(&self, message: &CommitMessage) -> Option<RuleOutcome> {
        if self.severity == Severity::Disabled {
            return None;
        }

        let (passed, detail) = self.apply(message);

        Some(RuleOutcome {
            name: self.name.as_str().to_string(),
            passed,
            severity: self.severity,
            detail: if passed { None } else { Some(detail) },
        })
    }

    /// Apply the constraint to the rule's target field.
    fn apply(&self, message: &CommitMessage) -> (bool, String) {
        match self.name {
            RuleName::TypeEnum | RuleName::TypeCase | RuleName::TypeEmpty => {
                self.apply_scalar("type", &message.commit_type)
            }
            RuleName::ScopeEnum | RuleName::ScopeCase => match message.scope {
                // Absent scope always passes scope rules.
                None => (true, String::new()),
                Some(ref scope) => self.apply_scalar("scope", scope),
            },
            RuleName::SubjectCase
            | RuleName::SubjectEmpty
            | RuleName::SubjectMinLength
            | RuleName::SubjectMaxLength
            | RuleName::SubjectFullStop => self.apply_scalar("subject", &message.subject),
            RuleName::HeaderMaxLength => self.apply_scalar("header", &message.header),
            RuleName::BodyMaxLineLength => self.apply_lines("body", &message.body_lines()),
            RuleName::FooterMaxLineLength => self.apply_lines("footer", &message.footer_lines()),
        }
    }

    /// Constraint check for a single-valued field.
    fn apply_scalar(&self, field: &str, value: &str) -> (bool, String) {
        let holds = match &self.constraint {
            Constraint::Enum(allowed) => allowed.iter().any(|a| a == &value.to_lowercase()),
            Constraint::Case(form) => form.matches(value),
            Constraint::MinLength(min) => value.chars().count() >= *min,
            Constraint::MaxLength(max) => value.chars().count() <= *max,
            Constraint::Suffix(suffix) => value.ends_with(suffix.as_str()),
            Constraint::Empty => value.trim().is_empty(),
            Constraint::MaxLineLength(max) => value.chars().count() <= *max,
        };
        let passed = self.polarity(holds);
        let detail = if passed {
            String::new()
        } else {
            self.failure_detail(field, value)
        };
        (passed, detail)
    }

    /// Constraint check over individual lines (body/footer). Absent content
    /// trivially passes.
    fn apply_lines(&self, field: &str, lines: &[&str]) -> (bool, String) {
        let max = match &self.constraint {
            Constraint::MaxLineLength(max) | Constraint::MaxLength(max) => *max,
            // A line rule with a non-length constraint cannot be built from
            // config; treat it as vacuously passing.
            _ => return (true, String::new()),
        };

        for (index, line) in lines.iter().enumerate() {
            let len = line.chars().count();
            if !self.polarity(len <= max) {
                return (
                    false,
                    format!(
                        "{} line {} is too long: {} characters (max: {})",
                        field,
                        index + 1,
                        len,
                        max
                    ),
                );
            }
        }
        (true, String::new())
    }

    /// Fold the `never` polarity into a raw constraint result.
    fn polarity(&self, holds: bool) -> bool {
        match self.applicability {
            Applicability::Always => holds,
            Applicability::Never => !holds,
        }
    }

    /// Human-readable detail for a failed scalar check.
    fn failure_detail(&self, field: &str, value: &str) -> String {
        match (&self.constraint, self.applicability) {
            (Constraint::Enum(allowed), _) => format!(
                "{} '{}' is not allowed (expected one of: {})",
                field,
                value,
                allowed.join(", ")
            ),
            (Constraint::Case(form), Applicability::Always) => {
                format!("{} must be {}, found '{}'", field, form.as_str(), value)
            }
            (Constraint::Case(form), Applicability::Never) => {
                format!("{} must not be {}", field, form.as_str())
            }
            (Constraint::MinLength(min), _) => format!(
                "{} is too short: {} characters (min: {})",
                field,
                value.chars().count(),
                min
            ),
            (Constraint::MaxLength(max), _) | (Constraint::MaxLineLength(max), _) => format!(
                "{} is too long: {} characters (max: {})",
                field,
                value.chars().count(),
                max
            ),
            (Constraint::Suffix(suffix), Applicability::Never) => {
                format!("{} must not end with '{}'", field, suffix)
            }
            (Constraint::Suffix(suffix), Applicability::Always) => {
                format!("{} must end with '{}'", field, suffix)
            }
            (Constraint::Empty, Applicability::Never) => format!("{} must not be empty", field),
            (Constraint::Empty, Applicability::Always) => format!("{} must be empty", field),
        }
    }
}

/// An ordered set of rules with unique names.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build a rule set, rejecting duplicate rule names.
    pub fn from_rules(rules: Vec<Rule>) -> Result<Self> {
        for (i, rule) in rules.iter().enumerate() {
            if rules[..i].iter().any(|r| r.name == rule.name) {
                return Err(CmlintError::Config(ConfigError::InvalidValue {
                    key: rule.name.as_str().to_string(),
                    message: "duplicate rule name".to_string(),
                }));
            }
        }
        Ok(Self { rules })
    }

    /// Iterate over the rules in order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
