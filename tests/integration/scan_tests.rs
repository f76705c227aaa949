//! Integration tests for scanning and severity aggregation

use privscan::{aggregate, aggregate_labels, scan, Category, ScanReport};
use std::collections::BTreeSet;

fn categories(text: &str) -> Vec<Category> {
    scan(text).matches.iter().map(|m| m.category).collect()
}

// ============================================================================
// Clean input
// ============================================================================

#[test]
fn test_clean_script() {
    let text = "#!/bin/bash\nset -euo pipefail\necho \"building\"\ncargo build --release\n";
    let result = scan(text);
    assert!(result.matches.is_empty());
    assert!(result.categories.is_empty());

    let report = aggregate(&result.categories);
    assert_eq!(report.severity, 0);
    assert_eq!(report.tier, "No Privileged Commands");
}

#[test]
fn test_empty_input_is_not_an_error() {
    let result = scan("");
    assert!(result.matches.is_empty());
    assert_eq!(aggregate(&result.categories).severity, 0);
}

// ============================================================================
// End-to-end scenarios
// ============================================================================

#[test]
fn test_mixed_language_script() {
    let text = "\n<script>alert('hello')</script>\nSELECT * FROM users WHERE name = 'admin' -- \nrm -rf /home/user\n";
    let result = scan(text);

    assert_eq!(result.matches.len(), 1);
    assert_eq!(result.matches[0].category, Category::DestructiveCommand);
    assert_eq!(result.matches[0].command, "rm -rf /home/user");
    assert_eq!(result.matches[0].line, 4);

    let expected: BTreeSet<Category> = [Category::DestructiveCommand].into_iter().collect();
    assert_eq!(result.categories, expected);

    let report = aggregate(&result.categories);
    assert_eq!(report.severity, 3);
    assert_eq!(report.tier, "High Risk");
}

#[test]
fn test_multi_category_script() {
    let result = scan("sudo apt update\nuseradd bob\n");
    assert_eq!(result.matches.len(), 2);
    assert_eq!(result.matches[0].category, Category::PrivilegeEscalation);
    assert_eq!(result.matches[0].command, "sudo apt update");
    assert_eq!(result.matches[1].category, Category::UserManagement);
    assert_eq!(result.matches[1].command, "useradd bob");

    let report = aggregate(&result.categories);
    assert_eq!(report.severity, 3);
    assert_eq!(report.tier, "High Risk");
}

#[test]
fn test_two_categories_one_line() {
    let result = scan("echo go\nsudo chown root:root /opt/app\n");
    assert_eq!(result.matches.len(), 2);
    assert_eq!(result.matches[0].category, Category::PrivilegeEscalation);
    assert_eq!(result.matches[1].category, Category::FilePermission);
    assert_eq!(result.matches[0].command, result.matches[1].command);
    assert_eq!(result.matches[0].command, "sudo chown root:root /opt/app");
    assert_eq!(result.matches[0].line, result.matches[1].line);
}

#[test]
fn test_destructive_only_is_high_risk() {
    for text in ["mkfs.ext4 /dev/sdb1", "dd if=/dev/zero of=/dev/sda", "shutdown -r now"] {
        let result = scan(text);
        assert_eq!(
            result.categories,
            [Category::DestructiveCommand].into_iter().collect::<BTreeSet<_>>(),
            "{}",
            text
        );
        assert_eq!(aggregate(&result.categories).tier, "High Risk");
    }
}

// ============================================================================
// Comment stripping
// ============================================================================

#[test]
fn test_trailing_comment_not_scanned() {
    let found = categories("sudo rm -rf /tmp # just a comment with chmod 777");
    assert_eq!(
        found,
        vec![Category::PrivilegeEscalation, Category::DestructiveCommand]
    );

    let result = scan("sudo rm -rf /tmp # just a comment with chmod 777");
    for m in &result.matches {
        assert_eq!(m.command, "sudo rm -rf /tmp");
    }
}

#[test]
fn test_commented_out_lines_ignored() {
    let text = "# sudo reboot\n// iptables -F\n/* useradd mallory\n   passwd mallory */\necho done\n";
    assert!(scan(text).matches.is_empty());
}

#[test]
fn test_url_hides_following_command() {
    // `//` in a URL starts a comment, hiding the rest of the line.
    let result = scan("curl https://example.com/x; sudo reboot");
    assert!(result.matches.is_empty());
}

// ============================================================================
// Boundaries
// ============================================================================

#[test]
fn test_chmod_word_boundary() {
    assert_eq!(categories("chmod 777 /var/www"), vec![Category::FilePermission]);
    assert!(categories("chmodify 777 /var/www").is_empty());
}

#[test]
fn test_identifiers_inside_words_ignored() {
    assert!(categories("visudo sudoers rerouted netstatistics").is_empty());
}

#[test]
fn test_flexible_whitespace_between_tokens() {
    assert_eq!(categories("net    user guest /active:no"), vec![Category::UserManagement]);
    // Both `route` and `ip route` fire
    assert_eq!(
        categories("ip\troute add default via 10.0.0.1"),
        vec![Category::NetworkAdmin, Category::NetworkAdmin]
    );
}

// ============================================================================
// Determinism and aggregation
// ============================================================================

#[test]
fn test_scan_is_idempotent() {
    let text = "sudo systemctl restart sshd\ncat /etc/shadow\niptables -L\nrm -rf ./build\n";
    assert_eq!(scan(text), scan(text));
}

#[test]
fn test_sensitive_and_network_are_low() {
    let result = scan("cat /etc/shadow\nnetstat -tulpn\n");
    let report = aggregate(&result.categories);
    assert_eq!(report.severity, 1);
    assert_eq!(report.tier, "Low Risk");
}

#[test]
fn test_aggregate_labels_matches_aggregate() {
    let result = scan("chkconfig httpd on\nwhoami /priv\n");
    let labels: Vec<&str> = result.categories.iter().map(|c| c.label()).collect();
    assert_eq!(aggregate_labels(labels), aggregate(&result.categories));
}

#[test]
fn test_report_from_scan() {
    let report = ScanReport::new("setup.sh", scan("usermod -aG docker ci\n"));
    assert_eq!(report.severity, 2);
    assert_eq!(report.tier, "Medium Risk");
    assert_eq!(report.band, "High");
    assert_eq!(report.matches.len(), 1);
}

#[test]
fn test_concurrent_scans() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let text = format!("sudo ls /tmp/{}\nreboot\n", i);
                scan(&text).matches.len()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 2);
    }
}
