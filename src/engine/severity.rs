//! Severity aggregation
//!
//! Reduces the set of fired categories to a single 0-3 severity and a tier
//! label.

use crate::rules::Category;
use serde::Serialize;
use std::collections::BTreeSet;

/// Tier reported when no category fired at all
pub const NO_PRIVILEGED_COMMANDS: &str = "No Privileged Commands";

/// Overall severity of a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityReport {
    /// 0 (nothing risky) to 3 (high risk)
    pub severity: u8,

    /// Human-readable tier label
    pub tier: &'static str,
}

impl SeverityReport {
    /// Report for an empty category set
    pub const fn none() -> Self {
        Self {
            severity: 0,
            tier: NO_PRIVILEGED_COMMANDS,
        }
    }

    fn from_severity(severity: u8) -> Self {
        Self {
            severity,
            tier: tier_for(severity),
        }
    }

    /// Check if nothing risky was found
    pub fn is_clean(&self) -> bool {
        self.severity == 0
    }
}

/// Map a severity to its tier label
pub fn tier_for(severity: u8) -> &'static str {
    match severity {
        0 => "Clean",
        1 => "Low Risk",
        2 => "Medium Risk",
        3 => "High Risk",
        _ => "Unknown",
    }
}

/// Aggregate a set of fired categories
pub fn aggregate(categories: &BTreeSet<Category>) -> SeverityReport {
    if categories.is_empty() {
        return SeverityReport::none();
    }

    let max = categories.iter().map(Category::weight).max().unwrap_or(0);
    SeverityReport::from_severity(max)
}

/// Aggregate categories given by label.
///
/// Labels that name no known category weigh 0. They still count towards the
/// set being non-empty, so a set of only unknown labels is "Clean" rather
/// than "No Privileged Commands".
pub fn aggregate_labels<I, S>(labels: I) -> SeverityReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen_any = false;
    let mut max = 0;

    for label in labels {
        seen_any = true;
        let weight = Category::from_label(label.as_ref())
            .map(|c| c.weight())
            .unwrap_or(0);
        max = max.max(weight);
    }

    if !seen_any {
        return SeverityReport::none();
    }

    SeverityReport::from_severity(max)
}
