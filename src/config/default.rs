// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.
//!
//! The defaults mirror the project's commit conventions: a closed set of
//! commit types, a closed set of scopes grouped by subsystem, and the
//! standard length limits for readable `git log` output.

/// Allowed commit types.
pub const DEFAULT_TYPES: &[&str] = &[
    "feat", "fix", "docs", "style", "refactor", "perf", "test", "build", "ci", "chore", "revert",
    "security", "deps", "config", "ui", "a11y", "i18n", "dx", "release",
];

/// Allowed commit scopes.
pub const DEFAULT_SCOPES: &[&str] = &[
    // Core components
    "core",
    "editor",
    "buffer",
    "syntax",
    "ui",
    "model",
    "view",
    "controller",
    // Features
    "search",
    "selection",
    "clipboard",
    "file",
    "keybinds",
    "commands",
    "themes",
    "config",
    // Technical areas
    "performance",
    "memory",
    "rendering",
    "input",
    "output",
    "terminal",
    // Development
    "build",
    "test",
    "ci",
    "docs",
    "deps",
    "tools",
    "scripts",
    // LSP related
    "lsp",
    "completion",
    "diagnostics",
    "hover",
    "definition",
    // Platform specific
    "linux",
    "macos",
    "windows",
    "cross-platform",
    // Security
    "security",
    "auth",
    "permissions",
    // API
    "api",
    "interface",
    "protocol",
];

/// Help URL shown under failing verdicts.
pub const DEFAULT_HELP_URL: &str =
    "https://github.com/conventional-changelog/commitlint/#what-is-commitlint";

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# cmlint configuration file
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

# Apply the built-in ignore predicates (Merge / Revert / Release / wip)
# in addition to any [[ignores]] entries below.
default_ignores = true

help_url = "https://github.com/conventional-changelog/commitlint/#what-is-commitlint"

# Each rule takes a severity ("disabled"/"warning"/"error" or 0-2), an
# optional applicability ("always" or "never"), and its parameter.
[rules]
type-enum = { severity = "error", values = ["feat", "fix", "docs", "chore"] }
scope-enum = { severity = "error", values = ["core", "cli", "config"] }
subject-case = { severity = "error", case = "lower-case" }
subject-min-length = { severity = "error", min = 3 }
subject-max-length = { severity = "error", max = 72 }
subject-full-stop = { severity = "error", when = "never", value = "." }
header-max-length = { severity = "error", max = 100 }
body-max-line-length = { severity = "error", max = 100 }
footer-max-line-length = { severity = "error", max = 100 }
type-case = { severity = "error", case = "lower-case" }
scope-case = { severity = "error", case = "lower-case" }
type-empty = { severity = "error", when = "never" }
subject-empty = { severity = "error", when = "never" }

# Additional ignore predicates (substring match on the raw message).
[[ignores]]
contains = "fixup!"

[[ignores]]
contains = "hotfix"
case_insensitive = true
"#
}
