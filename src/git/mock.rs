use crate::domain::{Commit, TagPattern};
use crate::error::{Result, SemrelError};
use crate::git::{Repository, VersionTag};

/// In-memory repository with a linear history, for tests
#[derive(Debug, Clone, Default)]
pub struct MockRepository {
    /// Oldest first
    commits: Vec<Commit>,
    /// (tag name, commit hash)
    tags: Vec<(String, String)>,
    branch: Option<String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a commit on top of the history
    pub fn add_commit(&mut self, commit: Commit) {
        self.commits.push(commit);
    }

    /// Add a tag pointing at a commit hash
    pub fn add_tag(&mut self, name: impl Into<String>, hash: impl Into<String>) {
        self.tags.push((name.into(), hash.into()));
    }

    /// Set the checked out branch
    pub fn set_branch(&mut self, branch: impl Into<String>) {
        self.branch = Some(branch.into());
    }
}

impl Repository for MockRepository {
    fn last_version(&self, pattern: &TagPattern) -> Result<Option<VersionTag>> {
        Ok(self
            .tags
            .iter()
            .filter_map(|(name, hash)| {
                pattern.extract(name).map(|version| VersionTag {
                    name: name.clone(),
                    version,
                    commit: hash.clone(),
                })
            })
            .max_by(|a, b| a.version.cmp(&b.version)))
    }

    fn commits_since(&self, since: Option<&str>) -> Result<Vec<Commit>> {
        let start = match since {
            Some(hash) => self
                .commits
                .iter()
                .position(|c| c.hash == hash)
                .map(|index| index + 1)
                .ok_or_else(|| SemrelError::repository(format!("Unknown commit: {}", hash)))?,
            None => 0,
        };
        Ok(self.commits[start..].to_vec())
    }

    fn head_hash(&self) -> Result<String> {
        self.commits
            .last()
            .map(|c| c.hash.clone())
            .ok_or_else(|| SemrelError::repository("Repository has no commits"))
    }

    fn current_branch(&self) -> Result<String> {
        self.branch
            .clone()
            .ok_or_else(|| SemrelError::repository("HEAD is not on a branch"))
    }
}
