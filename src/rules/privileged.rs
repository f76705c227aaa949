//! Privileged command pattern tables
//!
//! One table per category. Word boundaries keep identifiers from matching
//! inside longer words; multi-token commands allow any whitespace between
//! tokens.

use crate::rules::{Category, Pattern};

/// Privilege escalation
pub const PRIVILEGE_ESCALATION: &[Pattern] = &[
    Pattern::new("sudo", r"\bsudo\b"),
    Pattern::new("su-root", r"\bsu\s+root\b"),
    Pattern::new("runas", r"\brunas\b"),
    Pattern::new("setuid", r"\bsetuid\b"),
    Pattern::new("doas", r"\bdoas\b"),
];

/// User and group management (Unix and Windows)
pub const USER_MANAGEMENT: &[Pattern] = &[
    Pattern::new("adduser", r"\badduser\b"),
    Pattern::new("useradd", r"\buseradd\b"),
    Pattern::new("usermod", r"\busermod\b"),
    Pattern::new("net-user", r"\bnet\s+user\b"),
    Pattern::new("net-localgroup", r"\bnet\s+localgroup\b"),
    Pattern::new("dsadd", r"\bdsadd\b"),
    Pattern::new("passwd", r"\bpasswd\b"),
    Pattern::new("groupadd", r"\bgroupadd\b"),
];

/// File ownership and permission changes
pub const FILE_PERMISSION: &[Pattern] = &[
    // Octal modes only; symbolic modes (u+x) are not flagged
    Pattern::new("chmod-octal", r"\bchmod\s+[0-7]{3,4}\b"),
    Pattern::new("chown", r"\bchown\b"),
    Pattern::new("icacls", r"\bicacls\b"),
    Pattern::new("attrib", r"\battrib\b"),
    Pattern::new("setfacl", r"\bsetfacl\b"),
    Pattern::new("takeown", r"\btakeown\b"),
];

/// Service and system configuration
pub const SYSTEM_CONFIG: &[Pattern] = &[
    Pattern::new(
        "systemctl-state",
        r"\bsystemctl\s+(enable|disable|start|stop|restart)\b",
    ),
    Pattern::new("sc-config", r"\bsc\s+config\b"),
    Pattern::new("reg-write", r"\breg\s+(add|delete)\b"),
    Pattern::new("regedit", r"\bregedit\b"),
    Pattern::new("powercfg", r"\bpowercfg\b"),
    Pattern::new("services-msc", r"\bservices\.msc\b"),
    Pattern::new("update-rc", r"\bupdate-rc\.d\b"),
    Pattern::new("chkconfig", r"\bchkconfig\b"),
];

/// Destructive or high-impact operations
pub const DESTRUCTIVE_COMMAND: &[Pattern] = &[
    // Captures the target path as well
    Pattern::new("rm-rf", r"\brm\s+-rf\s+[^\s]*"),
    Pattern::new("del-recursive", r"\bdel\s+/s\s+/q\b"),
    Pattern::new("mkfs", r"\bmkfs\b"),
    Pattern::new("format-drive", r"\bformat\s+\w:"),
    Pattern::new("shutdown", r"\bshutdown\b"),
    Pattern::new("reboot", r"\breboot\b"),
    Pattern::new("dd-copy", r"\bdd\s+if=.*of=.*"),
    Pattern::new("mv-system", r"\bmv\s+/system\b"),
];

/// Reads of credentials and privilege listings
pub const SENSITIVE_INFO_ACCESS: &[Pattern] = &[
    Pattern::new("cat-shadow", r"\bcat\s+/etc/shadow\b"),
    Pattern::new("cat-passwd", r"\bcat\s+/etc/passwd\b"),
    Pattern::new("type-key-file", r"\btype\s+.*\.(pem|key)\b"),
    Pattern::new("sudo-list", r"\bsudo\s+-l\b"),
    Pattern::new("whoami-priv", r"\bwhoami\s+/priv\b"),
];

/// Network and firewall administration
pub const NETWORK_ADMIN: &[Pattern] = &[
    Pattern::new("iptables", r"\biptables\b"),
    Pattern::new("route", r"\broute\b"),
    Pattern::new("netstat", r"\bnetstat\b"),
    Pattern::new("ifconfig", r"\bifconfig\b"),
    Pattern::new("ip-route", r"\bip\s+route\b"),
    Pattern::new("netsh", r"\bnetsh\b"),
];

/// Get the pattern table for a category
pub fn patterns_for(category: Category) -> &'static [Pattern] {
    match category {
        Category::PrivilegeEscalation => PRIVILEGE_ESCALATION,
        Category::UserManagement => USER_MANAGEMENT,
        Category::FilePermission => FILE_PERMISSION,
        Category::SystemConfig => SYSTEM_CONFIG,
        Category::DestructiveCommand => DESTRUCTIVE_COMMAND,
        Category::SensitiveInfoAccess => SENSITIVE_INFO_ACCESS,
        Category::NetworkAdmin => NETWORK_ADMIN,
    }
}
