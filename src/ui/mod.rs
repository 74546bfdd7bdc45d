//! User interface module - styled terminal output.
//!
//! - `formatter` - Pure formatting functions
//! - This module - Printing with colors
//!
//! All of it goes to stderr; stdout only carries the command's result.

use console::style;

use crate::domain::ReleaseDecision;

pub mod formatter;

pub use formatter::{format_commit_counts, format_decision};

/// Print an error message in red to stderr.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print a warning message in yellow to stderr.
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), message);
}

/// Print a success message with green checkmark to stderr.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Print a status message with yellow arrow to stderr.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Print the decision summary to stderr.
pub fn display_decision(decision: &ReleaseDecision, tag: &str) {
    eprintln!("\n{}", style("Release decision").bold().underlined());
    for line in format_decision(decision, tag).lines() {
        eprintln!("  {}", line);
    }
}
