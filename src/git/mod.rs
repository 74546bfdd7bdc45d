//! Repository access
//!
//! The release engine only needs a handful of facts from version control: the
//! latest version tag, the commits made since, and what HEAD points at. The
//! [Repository] trait captures exactly that, so the engine can run against a
//! real repository ([Git2Repository]) or an in-memory one ([MockRepository]).

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::{Commit, TagPattern};
use crate::error::Result;
use semver::Version;

/// A tag that names a release version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTag {
    pub name: String,
    pub version: Version,
    /// Hash of the commit the tag points at
    pub commit: String,
}

/// Version control operations the release workflow depends on
pub trait Repository {
    /// Get the highest version tagged according to `pattern`
    ///
    /// # Returns
    /// * `Ok(Some(VersionTag))` - The tag with the greatest semantic version
    /// * `Ok(None)` - If no tag follows the pattern
    /// * `Err` - If there's a Git error
    fn last_version(&self, pattern: &TagPattern) -> Result<Option<VersionTag>>;

    /// Get the commits reachable from HEAD but not from `since`
    ///
    /// Commits are returned oldest first. With `since = None` the whole
    /// history is returned.
    fn commits_since(&self, since: Option<&str>) -> Result<Vec<Commit>>;

    /// Full hash of the commit HEAD points at
    fn head_hash(&self) -> Result<String>;

    /// Name of the checked out branch
    fn current_branch(&self) -> Result<String>;
}
