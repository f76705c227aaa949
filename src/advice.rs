//! Remediation advice shown alongside matches
//!
//! Static text only; advice never affects detection or severity.

use crate::rules::Category;

/// Context used when a label names no known category
pub const FALLBACK_CONTEXT: &str = "Requires elevated privileges to execute";

/// Command-specific notes, tested as case-sensitive substrings in this order
pub const COMMAND_NOTES: &[(&str, &str)] = &[
    ("sudo", "Ensure sudo usage is limited to authorized operations"),
    ("chmod", "Avoid setting 777 permissions; use least privilege principle"),
    ("rm -rf", "Double-check target paths before execution"),
    ("passwd", "Password changes should follow security policies"),
    ("systemctl", "Verify service changes are intentional and authorized"),
];

/// Advice attached to one match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advice {
    /// What the category of command does
    pub context: &'static str,

    /// Notes for well-known commands on the line
    pub notes: Vec<&'static str>,
}

/// General description of a category
pub fn category_context(category: Category) -> &'static str {
    match category {
        Category::PrivilegeEscalation => {
            "Elevates user privileges, potentially granting admin/root access"
        }
        Category::UserManagement => "Modifies user accounts or group memberships",
        Category::FilePermission => "Changes file/directory permissions or ownership",
        Category::SystemConfig => "Alters system configuration or service states",
        Category::DestructiveCommand => "Can cause data loss or system instability if misused",
        Category::SensitiveInfoAccess => "Accesses security-sensitive files or credentials",
        Category::NetworkAdmin => "Modifies network configuration or firewall rules",
    }
}

/// Notes for every well-known command appearing in `command`
pub fn command_notes(command: &str) -> Vec<&'static str> {
    COMMAND_NOTES
        .iter()
        .filter(|(needle, _)| command.contains(*needle))
        .map(|(_, note)| *note)
        .collect()
}

/// Advice for a match
pub fn context_for(category: Category, command: &str) -> Advice {
    Advice {
        context: category_context(category),
        notes: command_notes(command),
    }
}

/// Advice for a match whose category is only known by label
pub fn context_for_label(label: &str, command: &str) -> Advice {
    Advice {
        context: Category::from_label(label)
            .map(category_context)
            .unwrap_or(FALLBACK_CONTEXT),
        notes: command_notes(command),
    }
}
