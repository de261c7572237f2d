// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and decomposition.
//!
//! Parsing is deliberately infallible: a header that does not match the
//! conventional `type(scope)!: subject` grammar yields empty type/subject
//! fields, so the structural rules (`type-empty`, `subject-empty`) report
//! the problem instead of the parser aborting the run.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Grammar for the conventional commit header line.
    static ref HEADER_REGEX: Regex = Regex::new(
        r"^(?P<type>[A-Za-z0-9]+)(?:\((?P<scope>[^)]*)\))?(?P<breaking>!)?: (?P<subject>.*)$"
    )
    .unwrap();

    /// A git trailer line: `Token: value`, `Token #value`, or `BREAKING CHANGE: ...`.
    static ref TRAILER_REGEX: Regex = Regex::new(
        r"^(?:BREAKING[- ]CHANGE|[A-Za-z][A-Za-z0-9-]*)(?:: | #)"
    )
    .unwrap();
}

/// A commit message decomposed into its conventional-commit parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    /// The raw message text as given.
    pub raw: String,
    /// The first line of the message.
    pub header: String,
    /// Commit type (empty when the header does not match the grammar).
    pub commit_type: String,
    /// Optional scope.
    pub scope: Option<String>,
    /// Subject text (empty when the header does not match the grammar).
    pub subject: String,
    /// Whether the header carries the `!` breaking marker.
    pub is_breaking: bool,
    /// Optional body (blank-line separated paragraphs after the header).
    pub body: Option<String>,
    /// Optional trailer block (final paragraph of git trailers).
    pub footer: Option<String>,
}

impl CommitMessage {
    /// Decompose a raw commit message.
    pub fn parse(message: &str) -> Self {
        let raw = message.to_string();
        let header = message.lines().next().unwrap_or("").to_string();

        let (commit_type, scope, subject, is_breaking) = match HEADER_REGEX.captures(&header) {
            Some(captures) => {
                let commit_type = captures
                    .name("type")
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default();
                let scope = captures
                    .name("scope")
                    .map(|m| m.as_str().to_string())
                    .filter(|s| !s.is_empty());
                let subject = captures
                    .name("subject")
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default();
                let is_breaking = captures.name("breaking").is_some();
                (commit_type, scope, subject, is_breaking)
            }
            None => (String::new(), None, String::new(), false),
        };

        let (body, footer) = split_body_footer(message);

        Self {
            raw,
            header,
            commit_type,
            scope,
            subject,
            is_breaking,
            body,
            footer,
        }
    }

    /// Lines of the body, if any.
    pub fn body_lines(&self) -> Vec<&str> {
        self.body.as_deref().map(|b| b.lines().collect()).unwrap_or_default()
    }

    /// Lines of the footer, if any.
    pub fn footer_lines(&self) -> Vec<&str> {
        self.footer
            .as_deref()
            .map(|f| f.lines().collect())
            .unwrap_or_default()
    }
}

/// Split everything after the header into body paragraphs and an optional
/// trailing footer block.
///
/// Deliberately lenient about the blank line conventional commits require
/// after the header: content starting on the very next line is still
/// classified as body (or footer when it is all trailers), so the
/// line-length rules see it instead of it slipping past unchecked.
fn split_body_footer(message: &str) -> (Option<String>, Option<String>) {
    let mut lines = message.lines();
    lines.next(); // header

    let rest: Vec<&str> = lines.collect();
    let mut paragraphs: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in rest {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }

    if paragraphs.is_empty() {
        return (None, None);
    }

    // The last paragraph is the footer only when every line is a trailer.
    let footer = if paragraphs
        .last()
        .map(|p| p.iter().all(|l| TRAILER_REGEX.is_match(l)))
        .unwrap_or(false)
    {
        paragraphs.pop().map(|p| p.join("\n"))
    } else {
        None
    };

    let body = if paragraphs.is_empty() {
        None
    } else {
        Some(
            paragraphs
                .iter()
                .map(|p| p.join("\n"))
                .collect::<Vec<_>>()
                .join("\n\n"),
        )
    };

    (body, footer)
}
