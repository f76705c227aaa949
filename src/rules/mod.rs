//! Detection rules for privscan
//!
//! Defines the closed category taxonomy and the pattern tables behind it.

pub mod privileged;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk category a privileged command falls into.
///
/// Variant order is the evaluation order used by the scanner, and therefore
/// the order in which matches appear in a scan result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Privilege Escalation")]
    PrivilegeEscalation,

    #[serde(rename = "User Management")]
    UserManagement,

    #[serde(rename = "File Permission")]
    FilePermission,

    #[serde(rename = "System Config")]
    SystemConfig,

    #[serde(rename = "Destructive Command")]
    DestructiveCommand,

    #[serde(rename = "Sensitive Info Access")]
    SensitiveInfoAccess,

    #[serde(rename = "Network Admin")]
    NetworkAdmin,
}

impl Category {
    /// All categories in evaluation order
    pub const ALL: [Category; 7] = [
        Category::PrivilegeEscalation,
        Category::UserManagement,
        Category::FilePermission,
        Category::SystemConfig,
        Category::DestructiveCommand,
        Category::SensitiveInfoAccess,
        Category::NetworkAdmin,
    ];

    /// Human-readable label, also used as the serialized form
    pub const fn label(&self) -> &'static str {
        match self {
            Category::PrivilegeEscalation => "Privilege Escalation",
            Category::UserManagement => "User Management",
            Category::FilePermission => "File Permission",
            Category::SystemConfig => "System Config",
            Category::DestructiveCommand => "Destructive Command",
            Category::SensitiveInfoAccess => "Sensitive Info Access",
            Category::NetworkAdmin => "Network Admin",
        }
    }

    /// Fixed severity weight (1-3)
    pub const fn weight(&self) -> u8 {
        match self {
            Category::DestructiveCommand | Category::PrivilegeEscalation => 3,
            Category::FilePermission | Category::SystemConfig | Category::UserManagement => 2,
            Category::NetworkAdmin | Category::SensitiveInfoAccess => 1,
        }
    }

    /// Patterns registered for this category, in registration order
    pub fn patterns(&self) -> &'static [Pattern] {
        privileged::patterns_for(*self)
    }

    /// Parse from a label. Exact match, as produced by `label()`.
    pub fn from_label(s: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.label() == s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A detection pattern definition
#[derive(Debug, Clone)]
pub struct Pattern {
    /// Stable identifier for this pattern
    pub id: &'static str,

    /// Regex source, matched case-insensitively
    pub regex: &'static str,
}

impl Pattern {
    /// Create a new pattern
    pub const fn new(id: &'static str, regex: &'static str) -> Self {
        Self { id, regex }
    }
}
