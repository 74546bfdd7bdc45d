//! Release orchestration
//!
//! [`SemanticRelease`] ties the collaborators together: it reads the last
//! version and the new commits from a [`Repository`], classifies the commits,
//! resolves the branch's release channel and computes a [`ReleaseDecision`].

use std::sync::Arc;

use chrono::{DateTime, Utc};
use semver::Version;

use crate::analyzer::{CommitAnalyzer, RuleTable};
use crate::calculator::{Calculator, NextVersion};
use crate::changelog::{ChangelogAssembler, ReleaseMetadata};
use crate::config::ReleaseConfig;
use crate::domain::{BuildContext, Channel, ReleaseDecision, TagPattern, VersionEntry};
use crate::error::Result;
use crate::events::{Observer, ReleaseEvent};
use crate::git::Repository;

pub struct SemanticRelease<R: Repository> {
    config: ReleaseConfig,
    repository: R,
    analyzer: CommitAnalyzer,
    calculator: Calculator,
    tag_pattern: TagPattern,
    default_version: Version,
    observer: Arc<dyn Observer>,
}

impl<R: Repository> SemanticRelease<R> {
    /// Create a release engine for `repository`
    ///
    /// # Returns
    /// * `Err(SemrelError::UnknownGrammar)` - If `commit_format` names no grammar
    /// * `Err(SemrelError::Config)` - If the tag pattern or default version is invalid
    pub fn new(config: ReleaseConfig, repository: R, observer: Arc<dyn Observer>) -> Result<Self> {
        let analyzer =
            CommitAnalyzer::new(&config.commit_format)?.with_observer(Arc::clone(&observer));
        let calculator = Calculator::new().with_observer(Arc::clone(&observer));
        let tag_pattern = config.tag_pattern()?;
        let default_version = config.default_version()?;

        Ok(SemanticRelease {
            config,
            repository,
            analyzer,
            calculator,
            tag_pattern,
            default_version,
            observer,
        })
    }

    pub fn config(&self) -> &ReleaseConfig {
        &self.config
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn rules(&self) -> &RuleTable {
        self.analyzer.rules()
    }

    /// Release channel configured for the build's branch
    pub fn channel(&self, context: &BuildContext) -> Option<Channel> {
        self.config
            .channel_for_branch(&context.branch)
            .map(Channel::from_name)
    }

    /// Whether a build is allowed to publish a release at all
    ///
    /// Pull request builds and branches without a channel never release.
    pub fn should_release(&self, context: &BuildContext) -> bool {
        !context.is_pull_request && self.channel(context).is_some()
    }

    /// Compute the release decision for a build
    pub fn next_version(&self, context: &BuildContext) -> Result<ReleaseDecision> {
        let (last, first_release) = match self.repository.last_version(&self.tag_pattern)? {
            Some(tag) => {
                tracing::debug!(tag = %tag.name, commit = %tag.commit, "found last release");
                (
                    VersionEntry {
                        version: tag.version,
                        commit: Some(tag.commit),
                    },
                    false,
                )
            }
            None => {
                tracing::debug!(version = %self.default_version, "no release tag, first release");
                (
                    VersionEntry {
                        version: self.default_version.clone(),
                        commit: None,
                    },
                    true,
                )
            }
        };

        let commits = self.repository.commits_since(last.commit.as_deref())?;
        let buckets = self.analyzer.analyze(&commits);
        tracing::debug!(
            analyzed = commits.len(),
            dropped = buckets.dropped,
            "classified commits"
        );

        let next = match self.channel(context) {
            Some(channel) => {
                let next =
                    self.calculator
                        .calculate(&buckets, &last.version, &channel, first_release)?;
                self.observer.notify(&ReleaseEvent::VersionCalculated {
                    previous: last.version.clone(),
                    next: next.version.clone(),
                    draft: next.draft,
                });
                next
            }
            None => {
                self.observer.notify(&ReleaseEvent::ChannelNotConfigured {
                    branch: context.branch.clone(),
                });
                NextVersion {
                    version: last.version.clone(),
                    draft: false,
                }
            }
        };

        Ok(ReleaseDecision {
            next: VersionEntry {
                version: next.version,
                commit: Some(context.commit.clone()),
            },
            last,
            branch: context.branch.clone(),
            draft: next.draft,
            first_release,
            commits: buckets,
        })
    }

    /// Tag name the decision's next version is published under
    pub fn next_tag(&self, decision: &ReleaseDecision) -> String {
        self.tag_pattern.format(&decision.next.version)
    }

    /// Render the Markdown changelog for a decision
    pub fn changelog(&self, decision: &ReleaseDecision, timestamp: DateTime<Utc>) -> String {
        let metadata = ReleaseMetadata {
            version: decision.next.version.to_string(),
            previous_version: decision.last.version.to_string(),
            previous_hash: decision.last.commit.clone().unwrap_or_default(),
            tag: self.next_tag(decision),
            previous_tag: self.tag_pattern.format(&decision.last.version),
            commit_url: self.config.changelog.commit_url.clone(),
            compare_url: self.config.changelog.compare_url.clone(),
            timestamp,
        };

        ChangelogAssembler::new(self.rules().clone())
            .with_print_all(self.config.changelog.print_all)
            .assemble(&metadata, &decision.commits)
    }
}
