use std::sync::Arc;

use super::grammar::Grammar;
use super::rules::RuleTable;
use crate::domain::{AnalyzedCommit, BucketedCommits, Commit, Severity};
use crate::error::Result;
use crate::events::{default_observer, DropReason, Observer, ReleaseEvent};

/// Classifies raw commits into severity buckets under one grammar
pub struct CommitAnalyzer {
    grammar: Grammar,
    rules: RuleTable,
    observer: Arc<dyn Observer>,
}

impl CommitAnalyzer {
    /// Create an analyzer for a registered commit format (e.g. "conventional")
    ///
    /// # Returns
    /// * `Ok(CommitAnalyzer)` - Analyzer with the grammar's rule table loaded
    /// * `Err(SemrelError::UnknownGrammar)` - If no grammar has that name
    pub fn new(commit_format: &str) -> Result<Self> {
        let grammar = Grammar::from_name(commit_format)?;
        Ok(CommitAnalyzer {
            grammar,
            rules: grammar.rules(),
            observer: default_observer(),
        })
    }

    /// Report dropped commits to `observer` instead of `tracing`
    pub fn with_observer(mut self, observer: Arc<dyn Observer>) -> Self {
        self.observer = observer;
        self
    }

    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Classify commits in order.
    ///
    /// Commits that do not follow the grammar, or whose type has no rule, are
    /// left out of every bucket and counted in `dropped`.
    pub fn analyze(&self, commits: &[Commit]) -> BucketedCommits {
        let mut buckets = BucketedCommits::new();

        for (position, commit) in commits.iter().enumerate() {
            match self.classify(position, commit) {
                Ok(analyzed) => buckets.push(analyzed),
                Err(reason) => {
                    buckets.dropped += 1;
                    self.observer.notify(&ReleaseEvent::CommitDropped {
                        hash: commit.hash.clone(),
                        reason,
                    });
                }
            }
        }

        buckets
    }

    fn classify(
        &self,
        position: usize,
        commit: &Commit,
    ) -> std::result::Result<AnalyzedCommit, DropReason> {
        let parts = self
            .grammar
            .decompose(&commit.message)
            .ok_or(DropReason::NoMatch)?;

        // The type must be known before breaking markers are considered
        let rule = self
            .rules
            .lookup(&parts.type_token)
            .ok_or_else(|| DropReason::UnknownType(parts.type_token.clone()))?;

        let is_breaking = parts.is_breaking();
        let (parsed_message, breaking_change_message) =
            match (parts.breaking_footer, parts.breaking_marker) {
                (Some(footer), _) if !footer.is_empty() => (parts.description, footer),
                (Some(_), _) => (parts.description.clone(), parts.description),
                (None, true) => (String::new(), parts.description),
                (None, false) => (parts.description, String::new()),
            };

        let severity = if is_breaking {
            Severity::Major
        } else {
            rule.severity
        };

        Ok(AnalyzedCommit {
            commit: commit.clone(),
            scope: parts.scope,
            parsed_message,
            type_token: parts.type_token,
            section_title: rule.section_title.clone(),
            visible_in_changelog: rule.visible_in_changelog,
            breaking: is_breaking,
            breaking_change_message,
            severity,
            position,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::RecordingObserver;

    fn commit(message: &str, hash: &str) -> Commit {
        Commit::new(message, "me", hash)
    }

    fn analyzer() -> CommitAnalyzer {
        CommitAnalyzer::new("conventional").unwrap()
    }

    #[test]
    fn test_unknown_format() {
        assert!(CommitAnalyzer::new("free-form").is_err());
    }

    #[test]
    fn test_analyze_features_with_and_without_scope() {
        let buckets = analyzer().analyze(&[
            commit("feat(internal/changelog): my first commit", "12345667"),
            commit("feat: no scope", "12345667"),
        ]);

        assert_eq!(buckets.minor.len(), 2);
        assert!(buckets.major.is_empty());
        assert!(buckets.patch.is_empty());
        assert!(buckets.none.is_empty());

        let first = &buckets.minor[0];
        assert_eq!(first.scope, "internal/changelog");
        assert_eq!(first.parsed_message, "my first commit");
        assert_eq!(first.type_token, "feat");
        assert_eq!(first.section_title, "Features");
        assert!(first.visible_in_changelog);
        assert_eq!(first.breaking_change_message, "");

        assert_eq!(buckets.minor[1].scope, "");
        assert_eq!(buckets.minor[1].parsed_message, "no scope");
    }

    #[test]
    fn test_bang_marker_goes_to_major() {
        let buckets = analyzer().analyze(&[
            commit("feat: my first commit", "12345667"),
            commit("feat!: my first break", "12345668"),
        ]);

        assert_eq!(buckets.minor.len(), 1);
        assert_eq!(buckets.major.len(), 1);
        let breaking = &buckets.major[0];
        assert_eq!(breaking.parsed_message, "");
        assert_eq!(breaking.breaking_change_message, "my first break");
        assert_eq!(breaking.section_title, "Features");
        assert_eq!(breaking.severity, Severity::Major);
    }

    #[test]
    fn test_bang_marker_without_description_is_breaking() {
        let buckets = analyzer().analyze(&[commit("feat!: ", "12345668")]);

        assert_eq!(buckets.major.len(), 1);
        let breaking = &buckets.major[0];
        assert!(breaking.is_breaking());
        assert_eq!(breaking.breaking_change_message, "");
        assert_eq!(breaking.severity, Severity::Major);
    }

    #[test]
    fn test_footer_goes_to_major() {
        let buckets = analyzer().analyze(&[
            commit(
                "feat: my first break \n\nBREAKING CHANGE: change api to v2\n",
                "12345668",
            ),
            commit(
                "feat!: my first break \n\nBREAKING CHANGE: hey from the change",
                "12345669",
            ),
        ]);

        assert_eq!(buckets.major.len(), 2);
        assert_eq!(buckets.major[0].parsed_message, "my first break");
        assert_eq!(buckets.major[0].breaking_change_message, "change api to v2");
        assert_eq!(buckets.major[1].parsed_message, "my first break");
        assert_eq!(buckets.major[1].breaking_change_message, "hey from the change");
    }

    #[test]
    fn test_breaking_overrides_hidden_type() {
        let buckets = analyzer().analyze(&[commit("chore!: drop node 14", "1")]);
        assert_eq!(buckets.major.len(), 1);
        assert!(buckets.none.is_empty());
        assert!(!buckets.major[0].visible_in_changelog);
    }

    #[test]
    fn test_empty_footer_keeps_description_as_break_message() {
        let buckets = analyzer().analyze(&[commit("fix: rename flag\n\nBREAKING CHANGE:", "1")]);
        assert_eq!(buckets.major.len(), 1);
        assert_eq!(buckets.major[0].parsed_message, "rename flag");
        assert_eq!(buckets.major[0].breaking_change_message, "rename flag");
    }

    #[test]
    fn test_invalid_commits_are_dropped() {
        let observer = Arc::new(RecordingObserver::new());
        let buckets = analyzer().with_observer(observer.clone()).analyze(&[
            commit("internal/changelog: my first commit", "12345667"),
            commit("Merge feat: my first commit", "12345667"),
        ]);

        assert!(buckets.is_empty());
        assert_eq!(buckets.dropped, 2);
        assert_eq!(observer.events().len(), 2);
        assert!(observer.events().iter().all(|event| matches!(
            event,
            ReleaseEvent::CommitDropped {
                reason: DropReason::NoMatch,
                ..
            }
        )));
    }

    #[test]
    fn test_unknown_type_is_dropped_even_when_breaking() {
        let observer = Arc::new(RecordingObserver::new());
        let buckets = analyzer()
            .with_observer(observer.clone())
            .analyze(&[commit("wip: stuff\n\nBREAKING CHANGE: everything", "abc")]);

        assert!(buckets.is_empty());
        assert_eq!(buckets.dropped, 1);
        assert_eq!(
            observer.events(),
            vec![ReleaseEvent::CommitDropped {
                hash: "abc".to_string(),
                reason: DropReason::UnknownType("wip".to_string()),
            }]
        );
    }

    #[test]
    fn test_feat_and_build() {
        let buckets = analyzer().analyze(&[
            commit("feat: my first commit", "12345667"),
            commit("build: my first build", "12345668"),
        ]);

        assert_eq!(buckets.minor.len(), 1);
        assert_eq!(buckets.none.len(), 1);
        let build = &buckets.none[0];
        assert_eq!(build.type_token, "build");
        assert_eq!(build.section_title, "Changes to CI/CD");
        assert!(!build.visible_in_changelog);
        assert_eq!(build.breaking_change_message, "");
    }

    #[test]
    fn test_fix_and_build() {
        let buckets = analyzer().analyze(&[
            commit("fix: my first commit", "12345667"),
            commit("build: my first build", "12345668"),
        ]);

        assert_eq!(buckets.patch.len(), 1);
        assert_eq!(buckets.patch[0].section_title, "Bug fixes");
        assert_eq!(buckets.none.len(), 1);
        assert!(buckets.minor.is_empty());
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let commits = vec![
            commit("feat(api): a", "1"),
            commit("fix: b\n\nBREAKING CHANGE: c", "2"),
            commit("not conventional", "3"),
            commit("docs: d", "4"),
        ];
        let analyzer = analyzer();
        assert_eq!(analyzer.analyze(&commits), analyzer.analyze(&commits));
    }

    #[test]
    fn test_positions_follow_input_order() {
        let buckets = analyzer().analyze(&[
            commit("fix: a", "1"),
            commit("garbage", "2"),
            commit("feat: b", "3"),
            commit("fix: c", "4"),
        ]);

        assert_eq!(buckets.patch[0].position, 0);
        assert_eq!(buckets.minor[0].position, 2);
        assert_eq!(buckets.patch[1].position, 3);
    }

    #[test]
    fn test_angular_revert() {
        let buckets = CommitAnalyzer::new("angular")
            .unwrap()
            .analyze(&[commit("revert: feat: a", "1"), commit("feat!: b", "2")]);
        assert_eq!(buckets.patch.len(), 1);
        assert_eq!(buckets.patch[0].section_title, "Reverts");
        assert_eq!(buckets.dropped, 1);
    }
}
