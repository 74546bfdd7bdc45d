//! Pure formatting functions for UI output.
//!
//! Everything here returns plain strings so it can be tested; styling and
//! printing happen in the parent module.

use crate::domain::{ReleaseDecision, Severity, VersionEntry};

/// Render the summary printed by `git-semrel next`.
///
/// # Arguments
/// * `decision` - The computed release decision
/// * `tag` - Tag the next version would be published under
pub fn format_decision(decision: &ReleaseDecision, tag: &str) -> String {
    let mut lines = vec![
        format!("Branch:       {}", decision.branch),
        format!("Last version: {}", format_entry(&decision.last)),
    ];

    let mut next = format!("{} (tag {})", decision.next.version, tag);
    if decision.draft {
        next.push_str(" [draft]");
    }
    if decision.first_release {
        next.push_str(" [first release]");
    }
    lines.push(format!("Next version: {}", next));
    lines.push(format!("Commits:      {}", format_commit_counts(decision)));

    lines.join("\n")
}

fn format_entry(entry: &VersionEntry) -> String {
    match &entry.commit {
        Some(hash) => format!("{} ({})", entry.version, hash.get(..7).unwrap_or(hash)),
        None => format!("{} (not released yet)", entry.version),
    }
}

/// e.g. "1 major, 2 minor, 0 patch, 3 other, 1 skipped"
pub fn format_commit_counts(decision: &ReleaseDecision) -> String {
    let buckets = &decision.commits;
    format!(
        "{} major, {} minor, {} patch, {} other, {} skipped",
        buckets.get(Severity::Major).len(),
        buckets.get(Severity::Minor).len(),
        buckets.get(Severity::Patch).len(),
        buckets.get(Severity::None).len(),
        buckets.dropped
    )
}
