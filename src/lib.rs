//! privscan - Privileged command scanner for scripts
//!
//! This library scans script text for commands that escalate privileges,
//! manage users, change permissions, alter system configuration, destroy
//! data, read credentials or administer the network, and rates the overall
//! risk.
//!
//! # Features
//!
//! - **Pattern registry**: seven fixed categories, each backed by
//!   case-insensitive regexes
//! - **Comment stripping**: `//`, `#` and `/* */` comments are ignored
//! - **Severity**: 0-3 score and tier label from the riskiest category found
//! - **Advice**: per-category context and notes for well-known commands
//!
//! # Example
//!
//! ```
//! use privscan::{aggregate, scan, Category};
//!
//! let result = scan("sudo apt update\nuseradd bob\n");
//! assert_eq!(result.matches.len(), 2);
//! assert!(result.categories.contains(&Category::UserManagement));
//!
//! let report = aggregate(&result.categories);
//! assert_eq!(report.severity, 3);
//! assert_eq!(report.tier, "High Risk");
//! ```

pub mod advice;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod output;
pub mod rules;

// Re-exports for convenience
pub use config::{Config, OutputFormat};
pub use engine::comments::strip_comments;
pub use engine::severity::{aggregate, aggregate_labels, SeverityReport};
pub use engine::{scan, CommandMatch, ScanResult, Scanner};
pub use error::{Error, Result};
pub use input::ScriptInput;
pub use output::ScanReport;
pub use rules::Category;
