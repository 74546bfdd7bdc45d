use crate::domain::{Commit, TagPattern};
use crate::error::{Result, SemrelError};
use crate::git::VersionTag;
use git2::{Oid, Repository as Git2Repo, Sort};
use semver::Version;
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Root of the working tree, `None` for a bare repository
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }
}

impl super::Repository for Git2Repository {
    fn last_version(&self, pattern: &TagPattern) -> Result<Option<VersionTag>> {
        let tag_names = self.repo.tag_names(None)?;

        let mut latest: Option<(Version, String)> = None;
        for name in tag_names.iter().flatten() {
            let Some(version) = pattern.extract(name) else {
                continue;
            };
            if latest.as_ref().map_or(true, |(best, _)| version > *best) {
                latest = Some((version, name.to_string()));
            }
        }

        let Some((version, name)) = latest else {
            return Ok(None);
        };

        let commit = self
            .repo
            .revparse_single(&format!("refs/tags/{}", name))?
            .peel_to_commit()
            .map_err(|e| {
                SemrelError::repository(format!("Tag '{}' does not point at a commit: {}", name, e))
            })?;

        Ok(Some(VersionTag {
            name,
            version,
            commit: commit.id().to_string(),
        }))
    }

    fn commits_since(&self, since: Option<&str>) -> Result<Vec<Commit>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.push_head()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::REVERSE)?;

        if let Some(hash) = since {
            let oid = Oid::from_str(hash)?;
            revwalk.hide(oid)?;
        }

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;

            let message = commit.message().unwrap_or_default().to_string();
            let author = commit.author().name().unwrap_or("unknown").to_string();

            commits.push(Commit {
                message,
                author,
                hash: oid.to_string(),
            });
        }

        Ok(commits)
    }

    fn head_hash(&self) -> Result<String> {
        let commit = self.repo.head()?.peel_to_commit()?;
        Ok(commit.id().to_string())
    }

    fn current_branch(&self) -> Result<String> {
        let head = self.repo.head()?;
        if !head.is_branch() {
            return Err(SemrelError::repository("HEAD is detached"));
        }

        head.shorthand()
            .map(str::to_string)
            .ok_or_else(|| SemrelError::repository("Branch name is not valid UTF-8"))
    }
}
