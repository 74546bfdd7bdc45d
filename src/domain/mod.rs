//! Domain logic - pure release data independent of git operations

pub mod branch;
pub mod buckets;
pub mod channel;
pub mod commit;
pub mod decision;
pub mod prerelease;
pub mod tag;
pub mod version;

pub use branch::BuildContext;
pub use buckets::BucketedCommits;
pub use channel::Channel;
pub use commit::{AnalyzedCommit, Commit};
pub use decision::{ReleaseDecision, VersionEntry};
pub use prerelease::PrereleaseLabel;
pub use tag::TagPattern;
pub use version::{bump, parse_version, Severity};
