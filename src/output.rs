//! Report assembly and rendering
//!
//! Produces the text and JSON forms of a scan.

use crate::advice;
use crate::config::OutputFormat;
use crate::engine::{CommandMatch, ScanResult};
use crate::error::Result;
use crate::rules::Category;

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::Write;

/// Gauge band label for a severity. Values above 3 are clamped.
pub fn gauge_band(severity: u8) -> &'static str {
    match severity {
        0 => "Low",
        1 => "Medium",
        2 => "High",
        _ => "Critical",
    }
}

/// Complete report for one scanned input
#[derive(Debug, Serialize)]
pub struct ScanReport {
    /// Input name (path or `<stdin>`)
    pub source: String,

    /// When the scan ran
    pub scanned_at: DateTime<Utc>,

    /// Every match, in evaluation order
    pub matches: Vec<CommandMatch>,

    /// Distinct categories that fired
    pub categories: BTreeSet<Category>,

    /// Aggregate severity (0-3)
    pub severity: u8,

    /// Tier label for the severity
    pub tier: &'static str,

    /// Gauge band label for the severity
    pub band: &'static str,
}

impl ScanReport {
    /// Build a report from a scan result
    pub fn new(source: impl Into<String>, result: ScanResult) -> Self {
        let severity = result.severity();
        Self {
            source: source.into(),
            scanned_at: Utc::now(),
            matches: result.matches,
            categories: result.categories,
            severity: severity.severity,
            tier: severity.tier,
            band: gauge_band(severity.severity),
        }
    }

    /// Check if the severity reaches a failure threshold (0 disables)
    pub fn fails(&self, fail_on: u8) -> bool {
        fail_on > 0 && self.severity >= fail_on
    }

    /// Render in the given format
    pub fn render(&self, format: OutputFormat, with_advice: bool) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text(with_advice)),
            OutputFormat::Json => self.to_json(),
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render as terminal text
    pub fn to_text(&self, with_advice: bool) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "privscan: {}", self.source);

        if self.matches.is_empty() {
            out.push_str("No privileged commands detected\n");
            out.push_str("This script contains no elevated-privilege operations\n");
        } else {
            let _ = writeln!(out, "Detected {} privileged command(s)", self.matches.len());
            for m in &self.matches {
                let _ = writeln!(out, "\n  [{}] line {}: {}", m.category, m.line, m.command);
                if with_advice {
                    let advice = advice::context_for(m.category, &m.command);
                    let _ = writeln!(out, "    {}", advice.context);
                    for note in advice.notes {
                        let _ = writeln!(out, "    Note: {}", note);
                    }
                }
            }
            out.push('\n');
        }

        let _ = writeln!(
            out,
            "Severity: {} ({}) | Gauge: {}",
            self.severity, self.tier, self.band
        );
        out
    }
}
