//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: created secrets
//! - Yellow: secrets that already existed
//! - Red: errors
//! - Cyan: hints, names
//! - Dimmed: secondary info

use colored::Colorize;
use std::fmt::Display;

use crate::core::provisioner::{ItemReport, Outcome, Report};

const RULE_WIDTH: usize = 56;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print an error message to stderr (red).
///
/// Example: `✗ config file not found: data.json`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "✗".red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ pass --config <path>`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "→".cyan(), msg.cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print the line for one provisioned item.
///
/// The text is exactly [`ItemReport::line`]; only the color depends on the
/// outcome.
pub fn item(entry: &ItemReport) {
    let line = entry.line();
    if !colors_enabled() {
        println!("{}", line);
        return;
    }
    match entry.outcome {
        Outcome::Created => println!("{}", line.green()),
        Outcome::AlreadyExists => println!("{}", line.yellow()),
        Outcome::Failed(_) => println!("{}", line.red()),
    }
}

/// Print the end-of-run summary.
///
/// Example: `3 created, 1 already existed, 0 failed`
pub fn summary(report: &Report) {
    dimmed(&format!(
        "{} created, {} already existed, {} failed",
        report.created(),
        report.already_existed(),
        report.failed()
    ));
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  dn:  CN=WebApp01,OU=MYOU,...`
pub fn kv(label: &str, value: impl Display) {
    if colors_enabled() {
        println!("  {}  {}", label.dimmed(), value.to_string().bold());
    } else {
        println!("  {}  {}", label, value);
    }
}

/// Format a secret name in cyan.
pub fn name(n: &str) -> String {
    if colors_enabled() {
        n.cyan().to_string()
    } else {
        n.to_string()
    }
}

/// Print a dimmed/secondary message.
pub fn dimmed(msg: &str) {
    if colors_enabled() {
        println!("{}", msg.dimmed());
    } else {
        println!("{}", msg);
    }
}

/// Print a bold header followed by a separator line.
pub fn section(title: &str) {
    if colors_enabled() {
        println!("{}", title.bold());
        println!("{}", "─".repeat(RULE_WIDTH).dimmed());
    } else {
        println!("{}", title);
        println!("{}", "─".repeat(RULE_WIDTH));
    }
}
