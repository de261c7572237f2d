// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from cmlint.toml.
//! Malformed entries (unknown rule keys, unknown severities, non-lowercase
//! enum values) are fatal at load time; no message is evaluated against a
//! partially valid configuration.

use serde::{Deserialize, Serialize};

use crate::error::{CmlintError, ConfigError, Result};
use crate::ignore::{self, IgnorePredicate};
use crate::rules::{Applicability, CaseForm, Constraint, Rule, RuleName, RuleSet, Severity};

use super::default::{DEFAULT_HELP_URL, DEFAULT_SCOPES, DEFAULT_TYPES};

/// The main configuration structure for cmlint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CmlintConfig {
    /// Whether the built-in ignore predicates apply in addition to the
    /// `ignores` list below.
    pub default_ignores: bool,

    /// URL pointing at the commit message format documentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_url: Option<String>,

    /// User-defined ignore predicates, tested after the built-in ones.
    pub ignores: Vec<IgnoreEntry>,

    /// Rule configuration.
    pub rules: RulesConfig,
}

impl Default for CmlintConfig {
    fn default() -> Self {
        Self {
            default_ignores: true,
            help_url: Some(DEFAULT_HELP_URL.to_string()),
            ignores: Vec::new(),
            rules: RulesConfig::default(),
        }
    }
}

impl CmlintConfig {
    /// Load configuration from the default locations.
    pub fn load() -> Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Build the ordered rule set from this configuration.
    pub fn rule_set(&self) -> Result<RuleSet> {
        self.rules.build()
    }

    /// Build the ordered ignore predicate list: built-in defaults first
    /// (when enabled), then user entries.
    pub fn ignore_predicates(&self) -> Vec<IgnorePredicate> {
        let mut predicates = if self.default_ignores {
            ignore::default_ignores()
        } else {
            Vec::new()
        };
        for entry in &self.ignores {
            predicates.push(if entry.case_insensitive {
                IgnorePredicate::contains_ignore_case(&entry.contains)
            } else {
                IgnorePredicate::contains(&entry.contains)
            });
        }
        predicates
    }

    /// Validate the configuration, failing fast on malformed rule entries.
    pub fn validate(&self) -> Result<()> {
        self.rule_set().map(|_| ())
    }
}

/// A user-defined ignore predicate entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IgnoreEntry {
    /// Substring to look for in the raw message.
    pub contains: String,

    /// Match against the lowercased message.
    #[serde(default)]
    pub case_insensitive: bool,
}

/// Per-rule configuration. Every known rule has one optional entry; fields
/// missing from the file keep their defaults, and unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct RulesConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_enum: Option<EnumRuleConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_case: Option<CaseRuleConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_empty: Option<EmptyRuleConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope_enum: Option<EnumRuleConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope_case: Option<CaseRuleConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_case: Option<CaseRuleConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_empty: Option<EmptyRuleConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_min_length: Option<MinLengthRuleConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_max_length: Option<MaxLengthRuleConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_full_stop: Option<SuffixRuleConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_max_length: Option<MaxLengthRuleConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_max_line_length: Option<MaxLengthRuleConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_max_line_length: Option<MaxLengthRuleConfig>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            type_enum: Some(EnumRuleConfig::with_values(DEFAULT_TYPES)),
            type_case: Some(CaseRuleConfig::lower()),
            type_empty: Some(EmptyRuleConfig::default()),
            scope_enum: Some(EnumRuleConfig::with_values(DEFAULT_SCOPES)),
            scope_case: Some(CaseRuleConfig::lower()),
            subject_case: Some(CaseRuleConfig::lower()),
            subject_empty: Some(EmptyRuleConfig::default()),
            subject_min_length: Some(MinLengthRuleConfig { severity: Severity::Error, min: 3 }),
            subject_max_length: Some(MaxLengthRuleConfig { severity: Severity::Error, max: 72 }),
            subject_full_stop: Some(SuffixRuleConfig::default()),
            header_max_length: Some(MaxLengthRuleConfig { severity: Severity::Error, max: 100 }),
            body_max_line_length: Some(MaxLengthRuleConfig {
                severity: Severity::Error,
                max: 100,
            }),
            footer_max_line_length: Some(MaxLengthRuleConfig {
                severity: Severity::Error,
                max: 100,
            }),
        }
    }
}

impl RulesConfig {
    /// Build the ordered rule set, validating parameters.
    pub fn build(&self) -> Result<RuleSet> {
        let mut rules = Vec::new();

        if let Some(ref c) = self.type_enum {
            rules.push(c.to_rule(RuleName::TypeEnum)?);
        }
        if let Some(ref c) = self.type_case {
            rules.push(c.to_rule(RuleName::TypeCase));
        }
        if let Some(ref c) = self.type_empty {
            rules.push(c.to_rule(RuleName::TypeEmpty));
        }
        if let Some(ref c) = self.scope_enum {
            rules.push(c.to_rule(RuleName::ScopeEnum)?);
        }
        if let Some(ref c) = self.scope_case {
            rules.push(c.to_rule(RuleName::ScopeCase));
        }
        if let Some(ref c) = self.subject_case {
            rules.push(c.to_rule(RuleName::SubjectCase));
        }
        if let Some(ref c) = self.subject_empty {
            rules.push(c.to_rule(RuleName::SubjectEmpty));
        }
        if let Some(ref c) = self.subject_min_length {
            rules.push(Rule {
                name: RuleName::SubjectMinLength,
                severity: c.severity,
                applicability: Applicability::Always,
                constraint: Constraint::MinLength(c.min),
            });
        }
        if let Some(ref c) = self.subject_max_length {
            rules.push(Rule {
                name: RuleName::SubjectMaxLength,
                severity: c.severity,
                applicability: Applicability::Always,
                constraint: Constraint::MaxLength(c.max),
            });
        }
        if let (Some(min), Some(max)) = (&self.subject_min_length, &self.subject_max_length) {
            if min.min > max.max {
                return Err(CmlintError::Config(ConfigError::InvalidValue {
                    key: "subject-min-length".to_string(),
                    message: format!("min ({}) exceeds max ({})", min.min, max.max),
                }));
            }
        }
        if let Some(ref c) = self.subject_full_stop {
            rules.push(c.to_rule(RuleName::SubjectFullStop));
        }
        if let Some(ref c) = self.header_max_length {
            rules.push(Rule {
                name: RuleName::HeaderMaxLength,
                severity: c.severity,
                applicability: Applicability::Always,
                constraint: Constraint::MaxLength(c.max),
            });
        }
        if let Some(ref c) = self.body_max_line_length {
            rules.push(Rule {
                name: RuleName::BodyMaxLineLength,
                severity: c.severity,
                applicability: Applicability::Always,
                constraint: Constraint::MaxLineLength(c.max),
            });
        }
        if let Some(ref c) = self.footer_max_line_length {
            rules.push(Rule {
                name: RuleName::FooterMaxLineLength,
                severity: c.severity,
                applicability: Applicability::Always,
                constraint: Constraint::MaxLineLength(c.max),
            });
        }

        RuleSet::from_rules(rules)
    }
}

fn default_severity() -> Severity {
    Severity::Error
}

fn always() -> Applicability {
    Applicability::Always
}

fn never() -> Applicability {
    Applicability::Never
}

/// Closed-set membership rule (`type-enum`, `scope-enum`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumRuleConfig {
    #[serde(default = "default_severity")]
    pub severity: Severity,

    #[serde(default = "always")]
    pub when: Applicability,

    pub values: Vec<String>,
}

impl EnumRuleConfig {
    fn with_values(values: &[&str]) -> Self {
        Self {
            severity: Severity::Error,
            when: Applicability::Always,
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    fn to_rule(&self, name: RuleName) -> Result<Rule> {
        // Membership is tested on the canonicalized lowercase form, so a
        // non-lowercase configured value could never match anything.
        if let Some(bad) = self.values.iter().find(|v| **v != v.to_lowercase()) {
            return Err(CmlintError::Config(ConfigError::InvalidValue {
                key: name.as_str().to_string(),
                message: format!("enum value '{}' must be lowercase", bad),
            }));
        }
        if self.values.is_empty() {
            return Err(CmlintError::Config(ConfigError::InvalidValue {
                key: name.as_str().to_string(),
                message: "values must not be empty".to_string(),
            }));
        }
        Ok(Rule {
            name,
            severity: self.severity,
            applicability: self.when,
            constraint: Constraint::Enum(self.values.clone()),
        })
    }
}

/// Case-form rule (`type-case`, `scope-case`, `subject-case`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseRuleConfig {
    #[serde(default = "default_severity")]
    pub severity: Severity,

    #[serde(default = "always")]
    pub when: Applicability,

    pub case: CaseForm,
}

impl CaseRuleConfig {
    fn lower() -> Self {
        Self {
            severity: Severity::Error,
            when: Applicability::Always,
            case: CaseForm::LowerCase,
        }
    }

    fn to_rule(&self, name: RuleName) -> Rule {
        Rule {
            name,
            severity: self.severity,
            applicability: self.when,
            constraint: Constraint::Case(self.case),
        }
    }
}

/// Emptiness rule (`type-empty`, `subject-empty`), `never` by default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmptyRuleConfig {
    #[serde(default = "default_severity")]
    pub severity: Severity,

    #[serde(default = "never")]
    pub when: Applicability,
}

impl Default for EmptyRuleConfig {
    fn default() -> Self {
        Self {
            severity: Severity::Error,
            when: Applicability::Never,
        }
    }
}

impl EmptyRuleConfig {
    fn to_rule(&self, name: RuleName) -> Rule {
        Rule {
            name,
            severity: self.severity,
            applicability: self.when,
            constraint: Constraint::Empty,
        }
    }
}

/// Suffix rule (`subject-full-stop`), `never` by default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuffixRuleConfig {
    #[serde(default = "default_severity")]
    pub severity: Severity,

    #[serde(default = "never")]
    pub when: Applicability,

    #[serde(default = "full_stop")]
    pub value: String,
}

fn full_stop() -> String {
    ".".to_string()
}

impl Default for SuffixRuleConfig {
    fn default() -> Self {
        Self {
            severity: Severity::Error,
            when: Applicability::Never,
            value: full_stop(),
        }
    }
}

impl SuffixRuleConfig {
    fn to_rule(&self, name: RuleName) -> Rule {
        Rule {
            name,
            severity: self.severity,
            applicability: self.when,
            constraint: Constraint::Suffix(self.value.clone()),
        }
    }
}

/// Minimum-length rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MinLengthRuleConfig {
    #[serde(default = "default_severity")]
    pub severity: Severity,

    pub min: usize,
}

/// Maximum-length rule (whole field or per line).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MaxLengthRuleConfig {
    #[serde(default = "default_severity")]
    pub severity: Severity,

    pub max: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CmlintConfig::default();
        assert!(config.default_ignores);
        assert_eq!(config.rules.subject_max_length.as_ref().unwrap().max, 72);
        assert_eq!(config.rules.subject_min_length.as_ref().unwrap().min, 3);
        assert_eq!(config.rules.header_max_length.as_ref().unwrap().max, 100);
    }

    #[test]
    fn test_default_rule_set_builds() {
        let config = CmlintConfig::default();
        let rule_set = config.rule_set().unwrap();
        assert_eq!(rule_set.len(), 13);
    }

    #[test]
    fn test_default_ignore_predicates() {
        let config = CmlintConfig::default();
        let predicates = config.ignore_predicates();
        assert_eq!(predicates.len(), 4);
    }

    #[test]
    fn test_disabling_default_ignores() {
        let config = CmlintConfig {
            default_ignores: false,
            ..Default::default()
        };
        assert!(config.ignore_predicates().is_empty());
    }

    #[test]
    fn test_user_ignores_follow_defaults() {
        let config = CmlintConfig {
            ignores: vec![IgnoreEntry {
                contains: "fixup!".to_string(),
                case_insensitive: false,
            }],
            ..Default::default()
        };
        let predicates = config.ignore_predicates();
        assert_eq!(predicates.len(), 5);
        assert_eq!(predicates.last().unwrap().name, "fixup!");
    }

    #[test]
    fn test_non_lowercase_enum_value_is_rejected() {
        let config = CmlintConfig {
            rules: RulesConfig {
                type_enum: Some(EnumRuleConfig::with_values(&["Feat"])),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.rule_set().is_err());
    }

    #[test]
    fn test_empty_enum_values_are_rejected() {
        let config = CmlintConfig {
            rules: RulesConfig {
                scope_enum: Some(EnumRuleConfig::with_values(&[])),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.rule_set().is_err());
    }

    #[test]
    fn test_min_greater_than_max_is_rejected() {
        let config = CmlintConfig {
            rules: RulesConfig {
                subject_min_length: Some(MinLengthRuleConfig {
                    severity: Severity::Error,
                    min: 80,
                }),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.rule_set().is_err());
    }

    #[test]
    fn test_config_serialization_round_trip() {
        let config = CmlintConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("type-enum"));
        assert!(toml_str.contains("subject-max-length"));
    }
}
