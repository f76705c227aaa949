//! Scan engine for privscan
//!
//! Strips comments, runs every category's patterns over the cleaned text and
//! records the line each match sits on.

pub mod comments;
pub mod severity;

use crate::rules::{Category, Pattern};
use comments::strip_comments;
use severity::{aggregate, SeverityReport};

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use std::collections::BTreeSet;

/// Built-in scanner, compiled on first use
static BUILTIN: Lazy<Scanner> = Lazy::new(Scanner::compile);

/// A single privileged command found in a script
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandMatch {
    /// Category the pattern belongs to
    pub category: Category,

    /// The trimmed source line containing the match
    pub command: String,

    /// 1-based line number of the match start
    pub line: usize,

    /// Id of the pattern that fired
    #[serde(rename = "pattern")]
    pub pattern_id: &'static str,
}

/// Result of scanning one script
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    /// Every match, in category, pattern, then text order
    pub matches: Vec<CommandMatch>,

    /// Distinct categories that fired
    pub categories: BTreeSet<Category>,
}

impl ScanResult {
    fn push(&mut self, found: CommandMatch) {
        self.categories.insert(found.category);
        self.matches.push(found);
    }

    /// Check if nothing was found
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Aggregate the fired categories into a severity
    pub fn severity(&self) -> SeverityReport {
        aggregate(&self.categories)
    }
}

struct CompiledPattern {
    id: &'static str,
    regex: Regex,
}

/// Compiled pattern registry
pub struct Scanner {
    rules: Vec<(Category, Vec<CompiledPattern>)>,
}

impl Scanner {
    /// Shared scanner over the built-in pattern tables
    pub fn builtin() -> &'static Scanner {
        &BUILTIN
    }

    fn compile() -> Self {
        let rules = Category::ALL
            .into_iter()
            .map(|category| {
                let patterns = category
                    .patterns()
                    .iter()
                    .filter_map(compile_pattern)
                    .collect();
                (category, patterns)
            })
            .collect();

        Self { rules }
    }

    /// Number of compiled patterns
    pub fn pattern_count(&self) -> usize {
        self.rules.iter().map(|(_, patterns)| patterns.len()).sum()
    }

    /// Scan script text for privileged commands
    pub fn scan(&self, text: &str) -> ScanResult {
        let cleaned = strip_comments(text);
        let lines = LineIndex::new(&cleaned);
        let mut result = ScanResult::default();

        for (category, patterns) in &self.rules {
            for pattern in patterns {
                for m in pattern.regex.find_iter(&cleaned) {
                    let (line, command) = lines.containing(m.start(), m.end());
                    result.push(CommandMatch {
                        category: *category,
                        command: command.to_string(),
                        line,
                        pattern_id: pattern.id,
                    });
                }
            }
        }

        tracing::debug!(
            bytes = text.len(),
            matches = result.matches.len(),
            categories = result.categories.len(),
            "scan complete"
        );

        result
    }

    /// Scan and aggregate in one step
    pub fn analyze(&self, text: &str) -> (ScanResult, SeverityReport) {
        let result = self.scan(text);
        let severity = result.severity();
        (result, severity)
    }
}

fn compile_pattern(pattern: &Pattern) -> Option<CompiledPattern> {
    match RegexBuilder::new(pattern.regex).case_insensitive(true).build() {
        Ok(regex) => Some(CompiledPattern {
            id: pattern.id,
            regex,
        }),
        Err(e) => {
            tracing::error!("Pattern {} failed to compile: {}", pattern.id, e);
            None
        }
    }
}

/// Newline offsets of a text, for line lookups by byte offset
struct LineIndex<'a> {
    text: &'a str,
    newlines: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    fn new(text: &'a str) -> Self {
        let newlines = text.match_indices('\n').map(|(i, _)| i).collect();
        Self { text, newlines }
    }

    /// Line number of `start` and the trimmed text from the start of that
    /// line to the end of the line holding `end`.
    fn containing(&self, start: usize, end: usize) -> (usize, &'a str) {
        let idx = self.newlines.partition_point(|&nl| nl < start);
        let line_start = if idx == 0 { 0 } else { self.newlines[idx - 1] + 1 };

        let end_idx = self.newlines.partition_point(|&nl| nl < end);
        let line_end = self
            .newlines
            .get(end_idx)
            .copied()
            .unwrap_or(self.text.len());

        (idx + 1, self.text[line_start..line_end].trim())
    }
}

/// Scan text with the built-in scanner
pub fn scan(text: &str) -> ScanResult {
    Scanner::builtin().scan(text)
}
