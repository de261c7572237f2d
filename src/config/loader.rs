// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.
//!
//! Parse and validation errors are fatal: a malformed configuration must
//! never be silently downgraded to the defaults.

use crate::error::{CmlintError, ConfigError, Result};
use std::path::{Path, PathBuf};

use super::schema::CmlintConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["cmlint.toml", ".cmlint.toml", ".config/cmlint.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        // Try parent directory
        if !current.pop() {
            break;
        }
    }

    // Also check user's home directory
    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }
    }

    // Check XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("cmlint").join("config.toml");
        if config_path.exists() {
            return Some(config_path);
        }
    }

    None
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<CmlintConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(CmlintConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<CmlintConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(CmlintError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        CmlintError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse and validate configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<CmlintConfig> {
    let config: CmlintConfig = toml::from_str(content).map_err(|e| {
        CmlintError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })?;

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Severity;

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.rules.subject_max_length.unwrap().max, 72);
        assert!(config.default_ignores);
    }

    #[test]
    fn test_parse_custom_rules() {
        let toml = r#"
[rules]
subject-max-length = { severity = "error", max = 50 }
subject-case = { severity = "warning", case = "lower-case" }
type-enum = { values = ["feat", "fix"] }
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.rules.subject_max_length.as_ref().unwrap().max, 50);
        assert_eq!(
            config.rules.subject_case.as_ref().unwrap().severity,
            Severity::Warning
        );
        assert_eq!(
            config.rules.type_enum.as_ref().unwrap().values,
            vec!["feat", "fix"]
        );
        // Unspecified rules keep their defaults.
        assert_eq!(config.rules.header_max_length.as_ref().unwrap().max, 100);
    }

    #[test]
    fn test_parse_numeric_severity() {
        let toml = r#"
[rules]
subject-max-length = { severity = 1, max = 60 }
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(
            config.rules.subject_max_length.as_ref().unwrap().severity,
            Severity::Warning
        );
    }

    #[test]
    fn test_parse_ignores() {
        let toml = r#"
default_ignores = false

[[ignores]]
contains = "fixup!"

[[ignores]]
contains = "hotfix"
case_insensitive = true
"#;
        let config = parse_config(toml).unwrap();
        assert!(!config.default_ignores);
        assert_eq!(config.ignores.len(), 2);
        let predicates = config.ignore_predicates();
        assert_eq!(predicates.len(), 2);
        assert!(predicates[1].matches("HOTFIX for prod"));
    }

    #[test]
    fn test_unknown_rule_key_is_fatal() {
        let toml = r#"
[rules]
subject-sparkle = { severity = "error" }
"#;
        assert!(parse_config(toml).is_err());
    }

    #[test]
    fn test_unknown_severity_is_fatal() {
        let toml = r#"
[rules]
subject-max-length = { severity = "fatal", max = 72 }
"#;
        assert!(parse_config(toml).is_err());
    }

    #[test]
    fn test_out_of_range_severity_level_is_fatal() {
        let toml = r#"
[rules]
subject-max-length = { severity = 3, max = 72 }
"#;
        assert!(parse_config(toml).is_err());
    }

    #[test]
    fn test_non_lowercase_enum_value_is_fatal() {
        let toml = r#"
[rules]
type-enum = { values = ["Feat"] }
"#;
        assert!(parse_config(toml).is_err());
    }

    #[test]
    fn test_load_config_from_missing_path() {
        let result = load_config_from(Path::new("/nonexistent/cmlint.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cmlint.toml");
        std::fs::write(
            &path,
            "[rules]\nsubject-max-length = { max = 60 }\n",
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.rules.subject_max_length.unwrap().max, 60);
    }

    #[test]
    fn test_find_config_file_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cmlint.toml"), "").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_config_file_from(&nested).unwrap();
        assert_eq!(found, dir.path().join("cmlint.toml"));
    }
}
