use semver::Version;

use super::buckets::BucketedCommits;

/// A version together with the commit it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionEntry {
    pub version: Version,
    /// Commit hash; `None` for the previous entry of a first release
    pub commit: Option<String>,
}

/// Everything decided for one release computation
///
/// The bucketed commits are retained so the changelog can be generated later
/// from the same classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseDecision {
    pub next: VersionEntry,
    pub last: VersionEntry,
    pub branch: String,
    pub draft: bool,
    pub first_release: bool,
    pub commits: BucketedCommits,
}

impl ReleaseDecision {
    /// Whether publishing a release is warranted
    ///
    /// True when the version moved, or when no version was ever tagged.
    pub fn requires_release(&self) -> bool {
        self.first_release || self.next.version != self.last.version
    }
}
