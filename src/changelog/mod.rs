//! Markdown changelog assembly
//!
//! Sections follow the rule table order. Within a section commits keep the
//! order they were analyzed in, regardless of which severity bucket holds them.

pub mod template;

use chrono::{DateTime, Utc};

use crate::analyzer::RuleTable;
use crate::domain::{AnalyzedCommit, BucketedCommits};

/// Release facts the changelog heading and links are built from
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseMetadata {
    pub version: String,
    pub previous_version: String,
    pub previous_hash: String,
    /// Tag names of both releases, following the configured tag pattern
    pub tag: String,
    pub previous_tag: String,
    /// Link template for a single commit, `{hash}` is substituted
    pub commit_url: String,
    /// Link template comparing two releases. `{previous}` and `{next}` are
    /// bare versions, `{previous_tag}` and `{next_tag}` full tag names,
    /// `{previous_hash}` the commit of the previous release
    pub compare_url: String,
    pub timestamp: DateTime<Utc>,
}

/// Renders analyzed commits as a Markdown changelog
pub struct ChangelogAssembler {
    rules: RuleTable,
    print_all: bool,
}

impl ChangelogAssembler {
    pub fn new(rules: RuleTable) -> Self {
        ChangelogAssembler {
            rules,
            print_all: false,
        }
    }

    /// Also render commits whose rule hides them from the changelog
    pub fn with_print_all(mut self, print_all: bool) -> Self {
        self.print_all = print_all;
        self
    }

    pub fn assemble(&self, metadata: &ReleaseMetadata, commits: &BucketedCommits) -> String {
        let mut output = self.heading(metadata);

        for section in self.rules.sections() {
            let mut entries: Vec<&AnalyzedCommit> = commits
                .iter()
                .filter(|c| c.section_title == section)
                .filter(|c| c.visible_in_changelog || self.print_all)
                .collect();
            if entries.is_empty() {
                continue;
            }
            entries.sort_by_key(|c| c.position);

            output.push_str(&format!("\n### {}\n\n", section));
            for entry in entries {
                output.push_str(&self.entry_line(metadata, entry));
            }
        }

        output
    }

    fn heading(&self, metadata: &ReleaseMetadata) -> String {
        let compare_url = template::render(
            &metadata.compare_url,
            &[
                ("previous", metadata.previous_version.as_str()),
                ("next", metadata.version.as_str()),
                ("previous_hash", metadata.previous_hash.as_str()),
                ("previous_tag", metadata.previous_tag.as_str()),
                ("next_tag", metadata.tag.as_str()),
            ],
        );
        let date = metadata.timestamp.format("%Y-%m-%d");

        if compare_url.is_empty() {
            format!("## {} ({})\n", metadata.version, date)
        } else {
            format!(
                "## {} ([compare]({})) ({})\n",
                metadata.version, compare_url, date
            )
        }
    }

    fn entry_line(&self, metadata: &ReleaseMetadata, entry: &AnalyzedCommit) -> String {
        let mut line = String::from("*");

        if !entry.scope.is_empty() {
            line.push_str(&format!(" **`{}`**", entry.scope));
        }
        if !entry.parsed_message.is_empty() {
            line.push(' ');
            line.push_str(&entry.parsed_message);
        }

        let short_hash = entry.commit.short_hash();
        let commit_url =
            template::render(&metadata.commit_url, &[("hash", entry.commit.hash.as_str())]);
        if commit_url.is_empty() {
            line.push_str(&format!(" ({})", short_hash));
        } else {
            line.push_str(&format!(" ([{}]({}))", short_hash, commit_url));
        }
        line.push('\n');

        if entry.is_breaking() {
            if entry.breaking_change_message.is_empty() {
                line.push_str("  > **BREAKING CHANGE**\n");
            } else {
                line.push_str(&format!(
                    "  > **BREAKING CHANGE:** {}\n",
                    entry.breaking_change_message
                ));
            }
        }

        line
    }
}
